pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod graphql;
pub mod page_frame;
pub mod paginated_query;
pub mod record_query;
pub mod toast;
pub mod url_filters;
