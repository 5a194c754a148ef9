pub mod list;

pub use list::ProductList;
