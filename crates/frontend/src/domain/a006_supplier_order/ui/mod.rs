pub mod details;
pub mod list;

pub use details::SupplierOrderDetails;
pub use list::SupplierOrderList;
