pub mod admin;
pub mod guest;
pub mod login;
pub mod studio;

pub use admin::AdminDashboard;
pub use guest::GuestOrderView;
pub use login::LoginView;
pub use studio::StudioDashboard;

/// Where the app should go after a view handled an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Login,
    Admin,
}
