pub mod details;
pub mod list;

pub use details::InternalOrderDetails;
pub use list::InternalOrderList;
