pub mod details;
pub mod form;
pub mod list;

pub use details::ClientDetails;
pub use form::ClientForm;
pub use list::ClientList;
