pub mod login;
pub mod not_found;
pub mod verify_email;
