pub mod client;
pub use client::{Access, ApiClient};
pub mod auth_repo;
pub use auth_repo::AuthRepository;
pub mod catalog_repo;
pub use catalog_repo::CatalogRepository;
pub mod order_repo;
pub use order_repo::OrderRepository;
pub mod sales_repo;
pub use sales_repo::SalesRepository;
