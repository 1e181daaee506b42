//! Product and review types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as served by the upstream catalog.
///
/// Field names mirror the upstream JSON (camelCase on the wire). Everything
/// beyond `id`, `title`, and `price` deserializes leniently so older or
/// partial upstream payloads are not rejected, and absent optional values
/// are omitted again on serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: u64,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: String,
    /// Product title.
    pub title: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Category slug (e.g., "beauty").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Brand name; not all products carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Current price.
    pub price: f64,
    /// Discount off the listed price, in percent.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average review rating.
    #[serde(default)]
    pub rating: f64,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shipping weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Physical dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Warranty terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_information: Option<String>,
    /// Shipping terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_information: Option<String>,
    /// Stock status label (e.g., "In Stock", "Low Stock").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,
    /// Return policy text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_policy: Option<String>,
    /// Smallest quantity accepted per order.
    #[serde(default)]
    pub minimum_order_quantity: u32,
    /// Customer reviews embedded in the product.
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Catalog bookkeeping metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ProductMeta>,
    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Thumbnail image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Product {
    /// Check whether this product matches a search term.
    ///
    /// The term is matched as a substring of the title, brand, category, or
    /// any tag. Matching is case-insensitive on the product side; the term
    /// itself must already be lower-cased (`ListingQuery` normalizes it).
    /// Products without a brand, category, or tags simply do not match on
    /// those fields.
    pub fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self
                .brand
                .as_ref()
                .map(|b| b.to_lowercase().contains(term))
                .unwrap_or(false)
            || self
                .category
                .as_ref()
                .map(|c| c.to_lowercase().contains(term))
                .unwrap_or(false)
            || self.tags.iter().any(|t| t.to_lowercase().contains(term))
    }

    /// Price after applying the listed discount percentage.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }
}

/// A customer review embedded in its product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating given by the reviewer.
    pub rating: f64,
    /// Review text.
    pub comment: String,
    /// When the review was left.
    pub date: DateTime<Utc>,
    /// Display name of the reviewer.
    pub reviewer_name: String,
    /// Contact email of the reviewer.
    pub reviewer_email: String,
}

/// Physical product dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// Catalog bookkeeping metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    /// EAN/UPC barcode.
    pub barcode: String,
    /// QR code image URL.
    pub qr_code: String,
    /// When the catalog entry was created.
    pub created_at: DateTime<Utc>,
    /// When the catalog entry was last updated.
    pub updated_at: DateTime<Utc>,
}
