//! Pure mappings between store records and the partner's JSON shapes.

pub mod categories;
pub mod orders;
pub mod products;

pub use categories::convert_category;
pub use orders::{
    InvalidStatus, convert_create_payload, convert_order, convert_tracked_order,
    convert_update_payload,
};
pub use products::{convert_product, derive_variants, slugify};
