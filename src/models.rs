pub mod auth;
pub mod chart;
pub mod inventory;
pub mod reports;
