pub mod auth;
pub mod cart;
pub mod dashboard_service;
pub mod order_service;
pub mod poller;

pub use auth::AuthService;
pub use dashboard_service::DashboardService;
pub use order_service::OrderService;
pub use poller::Poller;
