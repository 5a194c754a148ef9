pub mod badge;
pub mod bool_filter;
pub mod delete_dialog;
pub mod export_button;
pub mod pagination_controls;
pub mod progress_tracker;
pub mod query_feedback;
pub mod search_input;
pub mod status_actions;
pub mod status_filter;
