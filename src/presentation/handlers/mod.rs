pub mod donors;
pub mod health;
