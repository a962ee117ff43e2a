use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::Lead;

/// Wire shape the landing-page script expects from `POST /api/leads`.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
}

impl SubmissionResponse {
    pub fn accepted(message: &str, lead_id: String) -> Self {
        SubmissionResponse {
            success: true,
            message: message.to_string(),
            lead_id: Some(lead_id),
        }
    }

    pub fn rejected(message: String) -> Self {
        SubmissionResponse {
            success: false,
            message,
            lead_id: None,
        }
    }
}

/// Envelope for `GET /api/dashboard`. Field names follow the dashboard
/// page contract (Portuguese keys).
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub metrics: DashboardMetrics,
    pub ultima_atualizacao: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub total_cadastros: u64,
    /// % of leads that accepted the LGPD terms, 2 decimals.
    pub taxa_lgpd: f64,
    /// % of cookie acceptances among leads that made an explicit choice.
    pub taxa_cookies: f64,
    pub cookies_info: String,
    pub faixa_etaria: Vec<AgeBracketCount>,
    pub cadastros_7_dias: Vec<DailyRegistrationCount>,
    pub leads_recentes: Vec<RecentLead>,
    pub distribuicao_cookies: Vec<CookieChoiceCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBracketCount {
    pub faixa_etaria: String,
    pub quantidade: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRegistrationCount {
    /// Calendar day, "YYYY-MM-DD".
    pub data: String,
    pub cadastros: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentLead {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub idade: i16,
    pub data_cadastro: String,
}

impl From<&Lead> for RecentLead {
    fn from(lead: &Lead) -> Self {
        RecentLead {
            nome: lead.name.clone(),
            email: lead.email.clone(),
            telefone: lead.phone.clone(),
            idade: lead.age,
            data_cadastro: format_timestamp(&lead.registered_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieChoiceCount {
    pub status_cookies: String,
    pub quantidade: u64,
}

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{ConsentState, CookieChoice};

    #[test]
    fn rejected_response_omits_lead_id() {
        let response = SubmissionResponse::rejected("Email inválido".to_string());
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Email inválido");
        assert!(json.get("lead_id").is_none());
    }

    #[test]
    fn accepted_response_carries_lead_id() {
        let response = SubmissionResponse::accepted("ok", "abc-123".to_string());
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["success"], true);
        assert_eq!(json["lead_id"], "abc-123");
    }

    #[test]
    fn recent_lead_uses_display_fields() {
        let consent = ConsentState {
            lgpd_accepted: true,
            cookies: CookieChoice::Undecided,
        };
        let lead = Lead::new("Maria", "maria@example.com", "(21) 98765-4321", 67, consent);
        let recent = RecentLead::from(&lead);

        assert_eq!(recent.nome, "Maria");
        assert_eq!(recent.telefone, "(21) 98765-4321");
        assert_eq!(recent.data_cadastro.len(), 19);
    }
}
