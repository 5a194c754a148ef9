pub mod export;
pub mod graphql_proxy;
