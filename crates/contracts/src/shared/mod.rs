pub mod api_error;
pub mod graphql;
pub mod pagination;
pub mod progress;
pub mod query_state;
pub mod throttle;
pub mod url_filters;
