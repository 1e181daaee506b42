//! Listing transform: filter, sort, paginate.

use serde::{Deserialize, Serialize};

use crate::listing::{ListingQuery, SortDirection};
use crate::product::Product;

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page, in sorted order.
    pub items: Vec<Product>,
    /// The page that was served (1-indexed).
    pub page: u32,
    /// The page size that was served.
    pub page_size: u32,
    /// Size of the filtered set, before slicing.
    pub total: usize,
}

/// Apply a listing query to the upstream product set.
///
/// Filters by the normalized search term, sorts by price in the requested
/// direction, then slices out the requested page. `total` counts the
/// filtered set; a page past the end comes back with empty `items` rather
/// than an error.
pub fn paginate(mut products: Vec<Product>, query: &ListingQuery) -> ProductPage {
    if !query.search.is_empty() {
        products.retain(|p| p.matches_term(&query.search));
    }

    // Stable sort: equal prices keep their filtered relative order.
    match query.dir {
        SortDirection::Ascending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortDirection::Descending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    let total = products.len();
    let offset = query.offset();
    let items = if offset >= total as u64 {
        Vec::new()
    } else {
        products
            .into_iter()
            .skip(offset as usize)
            .take(query.page_size as usize)
            .collect()
    };

    ProductPage {
        items,
        page: query.page,
        page_size: query.page_size,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            sku: format!("SKU-{id:03}"),
            title: title.to_string(),
            description: String::new(),
            category: Some("beauty".to_string()),
            brand: None,
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 10,
            tags: Vec::new(),
            weight: None,
            dimensions: None,
            warranty_information: None,
            shipping_information: None,
            availability_status: None,
            return_policy: None,
            minimum_order_quantity: 1,
            reviews: Vec::new(),
            meta: None,
            images: Vec::new(),
            thumbnail: None,
        }
    }

    fn query(qs: &str) -> ListingQuery {
        ListingQuery::from_query_string(qs)
    }

    fn ids(page: &ProductPage) -> Vec<u64> {
        page.items.iter().map(|p| p.id).collect()
    }

    fn prices(page: &ProductPage) -> Vec<f64> {
        page.items.iter().map(|p| p.price).collect()
    }

    #[test]
    fn test_first_page_sorted_ascending() {
        let products = vec![
            product(1, "Alpha", 30.0),
            product(2, "Beta", 10.0),
            product(3, "Gamma", 20.0),
        ];
        let page = paginate(products, &query("page=1&pageSize=2"));

        assert_eq!(prices(&page), vec![10.0, 20.0]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 2);
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let products = vec![
            product(1, "Alpha", 30.0),
            product(2, "Beta", 10.0),
            product(3, "Gamma", 20.0),
        ];
        let asc = paginate(products.clone(), &query("pageSize=50"));
        let desc = paginate(products, &query("dir=desc&pageSize=50"));

        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_equal_prices_keep_filtered_order() {
        let products = vec![
            product(1, "First", 15.0),
            product(2, "Second", 15.0),
            product(3, "Third", 15.0),
        ];
        let asc = paginate(products.clone(), &query("pageSize=50"));
        assert_eq!(ids(&asc), vec![1, 2, 3]);

        let desc = paginate(products, &query("dir=desc&pageSize=50"));
        assert_eq!(ids(&desc), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_matches_title_brand_category_tags() {
        let mut branded = product(1, "Plain", 5.0);
        branded.brand = Some("Essence".to_string());
        let mut tagged = product(2, "Other", 6.0);
        tagged.tags = vec!["essence of style".to_string()];
        let titled = product(3, "Essence Water", 7.0);
        let unrelated = product(4, "Hammer", 8.0);

        let page = paginate(
            vec![branded, tagged, titled, unrelated],
            &query("q=essence&pageSize=50"),
        );
        assert_eq!(ids(&page), vec![1, 2, 3]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let products = vec![product(1, "Essence Mascara", 5.0)];
        let page = paginate(products, &query("q=ESSENCE&pageSize=50"));
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_filter_without_match_is_empty_with_zero_total() {
        let products = vec![product(1, "Alpha", 5.0)];
        let page = paginate(products, &query("q=zzzz"));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_total_counts_filtered_set_not_upstream() {
        let products = vec![
            product(1, "Essence A", 5.0),
            product(2, "Essence B", 6.0),
            product(3, "Hammer", 7.0),
        ];
        let page = paginate(products, &query("q=essence&pageSize=1"));
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let products = vec![product(1, "Alpha", 5.0), product(2, "Beta", 6.0)];
        let page = paginate(products, &query("page=9&pageSize=12"));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 9);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let products = (1..=5).map(|i| product(i, "Item", i as f64)).collect();
        let page = paginate(products, &query("page=2&pageSize=3"));
        assert_eq!(ids(&page), vec![4, 5]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_exact_boundary_page() {
        let products = (1..=4).map(|i| product(i, "Item", i as f64)).collect();
        let page = paginate(products, &query("page=2&pageSize=2"));
        assert_eq!(ids(&page), vec![3, 4]);

        let products: Vec<Product> = (1..=4).map(|i| product(i, "Item", i as f64)).collect();
        let beyond = paginate(products, &query("page=3&pageSize=2"));
        assert!(beyond.items.is_empty());
    }

    #[test]
    fn test_window_size_invariant() {
        // |items| = min(pageSize, max(0, total - (page-1)*pageSize))
        let total = 7usize;
        for page_no in 1u32..=5 {
            for page_size in [1u32, 2, 3, 12] {
                let products = (1..=total as u64).map(|i| product(i, "Item", i as f64)).collect();
                let page = paginate(
                    products,
                    &query(&format!("page={page_no}&pageSize={page_size}")),
                );
                let offset = (page_no as usize - 1) * page_size as usize;
                let expected = page_size.min(total.saturating_sub(offset) as u32) as usize;
                assert_eq!(page.items.len(), expected);
                assert_eq!(page.total, total);
            }
        }
    }

    #[test]
    fn test_empty_input_set() {
        let page = paginate(Vec::new(), &query(""));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = paginate(vec![product(1, "Alpha", 5.0)], &query(""));
        let value = serde_json::to_value(&page).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("items"));
        assert!(obj.contains_key("pageSize"));
        assert_eq!(value["total"], 1);
    }
}
