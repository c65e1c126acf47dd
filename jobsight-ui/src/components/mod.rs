//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod toast;

pub use chart::{BarChart, PieChart, TimelineChart};
pub use loading::Loading;
pub use metric_card::StatCard;
pub use nav::Nav;
pub use toast::Toast;
