//! Application Pages

pub mod dashboard;
pub mod login;
pub mod settings;

pub use dashboard::Dashboard;
pub use login::Login;
pub use settings::Settings;
