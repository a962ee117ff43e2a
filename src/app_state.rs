use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{LeadRepository, MongoLeadRepository},
    services::{DashboardService, LeadService},
};

#[derive(Clone)]
pub struct AppState {
    pub lead_service: Arc<LeadService>,
    pub dashboard_service: Arc<DashboardService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let lead_repository = Arc::new(MongoLeadRepository::new(&db, &config));
        lead_repository.ensure_indexes().await?;

        Ok(Self::with_repository(lead_repository, config))
    }

    /// Wire the services over any repository implementation; tests use
    /// this directly with in-memory repositories.
    pub fn with_repository(repository: Arc<dyn LeadRepository>, config: Config) -> Self {
        let lead_service = Arc::new(LeadService::new(repository.clone()));
        let dashboard_service = Arc::new(DashboardService::new(repository));

        Self {
            lead_service,
            dashboard_service,
            config: Arc::new(config),
        }
    }
}
