use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{
    errors::AppResult,
    models::dto::response::{
        AgeBracketCount, CookieChoiceCount, DailyRegistrationCount, DashboardMetrics, RecentLead,
    },
    repositories::LeadRepository,
};

/// Reported age brackets; the capture form caps ages at 120.
const AGE_BRACKETS: [(i16, i16, &str); 5] = [
    (60, 70, "60-70 anos"),
    (71, 80, "71-80 anos"),
    (81, 90, "81-90 anos"),
    (91, 100, "91-100 anos"),
    (101, 120, "Acima de 100 anos"),
];

const RECENT_LEADS_LIMIT: i64 = 10;
const REGISTRATION_WINDOW_DAYS: i64 = 7;

pub struct DashboardService {
    repository: Arc<dyn LeadRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn metrics(&self) -> AppResult<DashboardMetrics> {
        let total = self.repository.count_all().await?;
        let lgpd_consented = self.repository.count_lgpd_consented().await?;
        let cookies_accepted = self.repository.count_cookie_choice(Some(true)).await?;
        let cookies_declined = self.repository.count_cookie_choice(Some(false)).await?;
        let cookies_undecided = self.repository.count_cookie_choice(None).await?;
        let cookies_decided = cookies_accepted + cookies_declined;

        let taxa_lgpd = if total > 0 {
            round2(lgpd_consented as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        // Cookie rate is computed over leads that made an explicit choice,
        // not over the whole base.
        let (taxa_cookies, cookies_info) = if cookies_decided > 0 {
            (
                round2(cookies_accepted as f64 / cookies_decided as f64 * 100.0),
                format!("De {cookies_decided} que escolheram, {cookies_accepted} aceitaram"),
            )
        } else {
            (
                0.0,
                "Nenhum usuário fez escolha sobre cookies ainda".to_string(),
            )
        };

        let mut faixa_etaria = Vec::new();
        for (min_age, max_age, label) in AGE_BRACKETS {
            let quantidade = self.repository.count_age_between(min_age, max_age).await?;
            faixa_etaria.push(AgeBracketCount {
                faixa_etaria: label.to_string(),
                quantidade,
            });
        }

        // Trailing week, newest day first; days without registrations are
        // omitted, matching the dashboard page contract.
        let today = Utc::now().date_naive();
        let mut cadastros_7_dias = Vec::new();
        for offset in 0..REGISTRATION_WINDOW_DAYS {
            let day = (today - Duration::days(offset)).format("%Y-%m-%d").to_string();
            let cadastros = self.repository.count_registered_on(&day).await?;
            if cadastros > 0 {
                cadastros_7_dias.push(DailyRegistrationCount { data: day, cadastros });
            }
        }

        let leads_recentes: Vec<RecentLead> = self
            .repository
            .find_recent(RECENT_LEADS_LIMIT)
            .await?
            .iter()
            .map(RecentLead::from)
            .collect();

        let mut distribuicao_cookies = vec![
            CookieChoiceCount {
                status_cookies: "Aceitaram cookies".to_string(),
                quantidade: cookies_accepted,
            },
            CookieChoiceCount {
                status_cookies: "Recusaram cookies".to_string(),
                quantidade: cookies_declined,
            },
            CookieChoiceCount {
                status_cookies: "Não fizeram escolha".to_string(),
                quantidade: cookies_undecided,
            },
        ];
        distribuicao_cookies.sort_by(|a, b| b.quantidade.cmp(&a.quantidade));

        Ok(DashboardMetrics {
            total_cadastros: total,
            taxa_lgpd,
            taxa_cookies,
            cookies_info,
            faixa_etaria,
            cadastros_7_dias,
            leads_recentes,
            distribuicao_cookies,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
