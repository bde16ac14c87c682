pub mod app;
pub mod components;
pub mod format;
pub mod state;
pub mod text;

pub use app::DashboardApp;
