//! Common types shared by all entities

pub mod amount;
pub mod entity_record;
pub mod refs;

pub use amount::Amount;
pub use entity_record::EntityRecord;
pub use refs::{BrandRef, ClientRef, LocalityRef, OfficeRef, ProductRef, SupplierRef};
