use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{LeadForm, SubmissionResponse},
};

const REGISTRATION_SUCCESS_MESSAGE: &str = "Cadastro realizado com sucesso! Em breve você receberá conteúdos importantes sobre medicamentos, vacinas e cuidados com a saúde.";

/// Landing-page lead submission.
///
/// Form-level rejections (validation, LGPD refusal, duplicate email) keep
/// the page contract: HTTP 200 with `success: false` and a user-facing
/// message. Infrastructure failures surface as real error statuses.
#[post("/api/leads")]
pub async fn register_lead(
    state: web::Data<AppState>,
    form: web::Form<LeadForm>,
) -> Result<HttpResponse, AppError> {
    match state.lead_service.register_lead(form.into_inner()).await {
        Ok(lead) => Ok(HttpResponse::Ok().json(SubmissionResponse::accepted(
            REGISTRATION_SUCCESS_MESSAGE,
            lead.id,
        ))),
        Err(AppError::ValidationError(message)) | Err(AppError::AlreadyExists(message)) => {
            log::warn!("Lead submission rejected: {message}");
            Ok(HttpResponse::Ok().json(SubmissionResponse::rejected(message)))
        }
        Err(err) => Err(err),
    }
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
