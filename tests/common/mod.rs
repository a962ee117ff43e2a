use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use viver_bem_server::{
    errors::{AppError, AppResult},
    models::domain::Lead,
    repositories::LeadRepository,
};

/// In-memory stand-in for the MongoDB repository, keyed by email like the
/// unique index on the real collection.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<String, Lead>>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lead>> {
        let leads = self.leads.read().await;
        Ok(leads.get(email).cloned())
    }

    async fn insert(&self, lead: Lead) -> AppResult<Lead> {
        let mut leads = self.leads.write().await;
        if leads.contains_key(&lead.email) {
            return Err(AppError::AlreadyExists(format!(
                "Lead with email '{}' already exists",
                lead.email
            )));
        }
        leads.insert(lead.email.clone(), lead.clone());
        Ok(lead)
    }

    async fn count_all(&self) -> AppResult<u64> {
        let leads = self.leads.read().await;
        Ok(leads.len() as u64)
    }

    async fn count_lgpd_consented(&self) -> AppResult<u64> {
        let leads = self.leads.read().await;
        Ok(leads.values().filter(|l| l.lgpd_consent).count() as u64)
    }

    async fn count_cookie_choice(&self, choice: Option<bool>) -> AppResult<u64> {
        let leads = self.leads.read().await;
        Ok(leads
            .values()
            .filter(|l| l.cookies_accepted == choice)
            .count() as u64)
    }

    async fn count_age_between(&self, min_age: i16, max_age: i16) -> AppResult<u64> {
        let leads = self.leads.read().await;
        Ok(leads
            .values()
            .filter(|l| l.age >= min_age && l.age <= max_age)
            .count() as u64)
    }

    async fn count_registered_on(&self, day: &str) -> AppResult<u64> {
        let leads = self.leads.read().await;
        Ok(leads
            .values()
            .filter(|l| l.registered_day == day)
            .count() as u64)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Lead>> {
        let leads = self.leads.read().await;
        let mut items: Vec<Lead> = leads.values().cloned().collect();
        items.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }
}
