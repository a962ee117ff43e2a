use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Lead};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lead>>;
    async fn insert(&self, lead: Lead) -> AppResult<Lead>;
    async fn count_all(&self) -> AppResult<u64>;
    async fn count_lgpd_consented(&self) -> AppResult<u64>;
    /// `None` counts leads that never made a cookie choice.
    async fn count_cookie_choice(&self, choice: Option<bool>) -> AppResult<u64>;
    async fn count_age_between(&self, min_age: i16, max_age: i16) -> AppResult<u64>;
    /// Leads registered on one calendar day ("YYYY-MM-DD").
    async fn count_registered_on(&self, day: &str) -> AppResult<u64>;
    /// Most recent leads, newest first.
    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Lead>>;
}

pub struct MongoLeadRepository {
    collection: Collection<Lead>,
}

impl MongoLeadRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.leads_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for leads collection");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();
        self.collection.create_index(email_index).await?;

        let day_index = IndexModel::builder()
            .keys(doc! { "registered_day": 1 })
            .options(IndexOptions::builder().name("registered_day".to_string()).build())
            .build();
        self.collection.create_index(day_index).await?;

        log::info!("Successfully created indexes for leads collection");
        Ok(())
    }
}

#[async_trait]
impl LeadRepository for MongoLeadRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Lead>> {
        let lead = self.collection.find_one(doc! { "email": email }).await?;
        Ok(lead)
    }

    async fn insert(&self, lead: Lead) -> AppResult<Lead> {
        self.collection.insert_one(&lead).await?;
        Ok(lead)
    }

    async fn count_all(&self) -> AppResult<u64> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    async fn count_lgpd_consented(&self) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "lgpd_consent": true })
            .await?;
        Ok(count)
    }

    async fn count_cookie_choice(&self, choice: Option<bool>) -> AppResult<u64> {
        let filter = match choice {
            Some(value) => doc! { "cookies_accepted": value },
            None => doc! { "cookies_accepted": null },
        };
        let count = self.collection.count_documents(filter).await?;
        Ok(count)
    }

    async fn count_age_between(&self, min_age: i16, max_age: i16) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! {
                "age": { "$gte": min_age as i32, "$lte": max_age as i32 }
            })
            .await?;
        Ok(count)
    }

    async fn count_registered_on(&self, day: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "registered_day": day })
            .await?;
        Ok(count)
    }

    async fn find_recent(&self, limit: i64) -> AppResult<Vec<Lead>> {
        use futures::TryStreamExt;
        use mongodb::options::FindOptions;

        let find_options = FindOptions::builder()
            .sort(doc! { "registered_at": -1 })
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let leads: Vec<Lead> = cursor.try_collect().await?;

        Ok(leads)
    }
}
