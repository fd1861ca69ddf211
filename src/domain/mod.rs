pub mod auth;
pub mod donors;
