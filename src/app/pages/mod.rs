//! Top-level page subtrees selected by the view switch.

pub mod admin;
pub mod home;
pub mod login;

pub use admin::AdminPortal;
pub use home::Home;
pub use login::Login;
