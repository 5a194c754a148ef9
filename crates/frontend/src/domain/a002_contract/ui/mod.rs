pub mod details;
pub mod list;

pub use details::ContractDetails;
pub use list::ContractList;
