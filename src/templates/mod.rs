// Base template trait for shared page fields
pub mod base_template;
pub use base_template::BaseTemplate;

// Individual template files
pub mod dashboard_template;
pub use dashboard_template::DashboardTemplate;
