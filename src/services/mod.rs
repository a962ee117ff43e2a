pub mod dashboard_service;
pub mod lead_service;

pub use dashboard_service::DashboardService;
pub use lead_service::LeadService;
