pub mod auth;
pub mod catalog;
pub mod orders;
pub mod sales;
pub mod studio;
