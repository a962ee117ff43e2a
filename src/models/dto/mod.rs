pub mod request;
pub mod response;

pub use request::LeadForm;
pub use response::{DashboardMetrics, DashboardResponse, SubmissionResponse};
