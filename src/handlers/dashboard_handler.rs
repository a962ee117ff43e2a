use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::{app_state::AppState, errors::AppError, models::dto::DashboardResponse};

/// Aggregate metrics for the reporting dashboard.
#[get("/api/dashboard")]
pub async fn dashboard_metrics(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let metrics = state.dashboard_service.metrics().await?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        success: true,
        metrics,
        ultima_atualizacao: Utc::now().format("%d/%m/%Y %H:%M:%S").to_string(),
    }))
}
