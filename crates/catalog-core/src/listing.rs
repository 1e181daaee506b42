//! Listing query parameters.

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;
/// Largest number of items a caller may request per page.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Sort direction for the price sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Cheapest first.
    #[default]
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortDirection {
    /// Parse the `dir` query parameter. Only the literal `desc` selects
    /// descending; anything else falls back to ascending.
    pub fn from_param(s: &str) -> Self {
        match s {
            "desc" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Normalized listing query parameters.
///
/// Built from the raw query string; out-of-range or unparseable values are
/// replaced by their defaults rather than rejected, so a listing request
/// never fails on bad parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// Lower-cased search term; empty means no filter.
    pub search: String,
    /// Price sort direction.
    pub dir: SortDirection,
    /// 1-indexed page number.
    pub page: u32,
    /// Items per page, clamped to `1..=MAX_PAGE_SIZE`.
    pub page_size: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            dir: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingQuery {
    /// Parse listing parameters from a URL query string.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = ListingQuery::default();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = urlencoding_decode(value);

            match key {
                "q" => query.search = decoded.to_lowercase(),
                "dir" => query.dir = SortDirection::from_param(&decoded),
                "page" => query.page = decoded.parse().unwrap_or(1).max(1),
                "pageSize" => {
                    query.page_size = decoded
                        .parse()
                        .unwrap_or(DEFAULT_PAGE_SIZE)
                        .clamp(1, MAX_PAGE_SIZE)
                }
                _ => {}
            }
        }

        query
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.page_size)
    }
}

/// Simple URL decoding.
fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
