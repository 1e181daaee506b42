//! Product catalog domain model and listing pipeline.
//!
//! This crate is pure and synchronous: it models the upstream product
//! payload, normalizes listing query parameters, and applies the
//! filter/sort/paginate transform behind the listing endpoint. Fetching is
//! someone else's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_core::{paginate, ListingQuery};
//!
//! let query = ListingQuery::from_query_string("q=mascara&dir=desc&page=2&pageSize=12");
//! let page = paginate(products, &query);
//! assert_eq!(page.page, 2);
//! ```

mod listing;
mod pipeline;
mod product;

pub use listing::{ListingQuery, SortDirection, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use pipeline::{paginate, ProductPage};
pub use product::{Dimensions, Product, ProductMeta, Review};
