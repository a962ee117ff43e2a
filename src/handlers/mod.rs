pub mod dashboard_handler;
pub mod lead_handler;

pub use dashboard_handler::dashboard_metrics;
pub use lead_handler::{health_check, register_lead};
