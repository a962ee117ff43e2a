use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::consent::ConsentState;

/// A registered contact from the "Encontrar UBS" capture form.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Stored in display format, e.g. "(21) 98765-4321".
    pub phone: String,
    pub age: i16,
    pub lgpd_consent: bool,
    /// `None` when the visitor dismissed the cookie banner without choosing.
    pub cookies_accepted: Option<bool>,
    pub registered_at: DateTime<Utc>,
    /// Calendar day of `registered_at` ("YYYY-MM-DD"), denormalized so
    /// day-bucketed dashboard counts are exact-match queries.
    pub registered_day: String,
}

impl Lead {
    pub fn new(name: &str, email: &str, phone: &str, age: i16, consent: ConsentState) -> Self {
        let registered_at = Utc::now();
        Lead {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            age,
            lgpd_consent: consent.lgpd_accepted,
            cookies_accepted: consent.cookies.as_stored(),
            registered_at,
            registered_day: registered_at.format("%Y-%m-%d").to_string(),
        }
    }
}
