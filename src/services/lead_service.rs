use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Lead, dto::request, dto::LeadForm},
    repositories::LeadRepository,
};

pub struct LeadService {
    repository: Arc<dyn LeadRepository>,
}

impl LeadService {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    /// Full submission pipeline: normalize, validate, gate on LGPD
    /// consent, reject duplicate emails, persist.
    pub async fn register_lead(&self, form: LeadForm) -> AppResult<Lead> {
        let form = form.normalized();
        form.validate()?;

        // The mask alone lets half-typed numbers through; require a
        // complete 10- or 11-digit number.
        if !request::is_valid_masked_phone(&form.phone) {
            return Err(AppError::ValidationError("Telefone inválido".to_string()));
        }

        let consent = form.consent();
        if !consent.lgpd_accepted {
            return Err(AppError::ValidationError(
                "É necessário aceitar os termos da LGPD".to_string(),
            ));
        }

        if self.repository.find_by_email(&form.email).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Este email já está cadastrado em nossa plataforma".to_string(),
            ));
        }

        let lead = Lead::new(
            &form.first_name,
            &form.email,
            &form.phone,
            form.idade,
            consent,
        );
        let lead = self.repository.insert(lead).await?;

        log::info!("Lead registered: id={} email={}", lead.id, lead.email);
        Ok(lead)
    }
}
