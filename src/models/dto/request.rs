use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::ConsentState;

/// Masked 10- or 11-digit Brazilian number, exactly as the input mask
/// emits it.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{2}\) \d{5}-\d{3,4}$").expect("phone pattern is valid"));

/// Raw lead capture form, field names as submitted by the landing page.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadForm {
    #[serde(rename = "firstName", default)]
    #[validate(length(min = 2, message = "Nome deve ter pelo menos 2 caracteres"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(email(message = "Email inválido"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Telefone é obrigatório"))]
    pub phone: String,

    #[serde(default)]
    #[validate(range(min = 60, max = 120, message = "Idade deve estar entre 60 e 120 anos"))]
    pub idade: i16,

    /// "true" only when the visitor accepted the LGPD modal for this
    /// submission; never trusted from a hidden field.
    #[serde(default)]
    pub lgpd_consent: String,

    /// Cookie banner state: "true" / "false" / "null".
    #[serde(default = "cookie_choice_unset")]
    pub cookies_accepted: String,
}

fn cookie_choice_unset() -> String {
    "null".to_string()
}

impl LeadForm {
    /// Trim text fields and re-apply the phone display mask before
    /// validation, so "  maria@x.com " and half-masked phones coming from
    /// older browsers validate the same as clean input.
    pub fn normalized(&self) -> LeadForm {
        let digits = strip_phone_digits(&self.phone);
        let phone = if digits.is_empty() {
            String::new()
        } else {
            format_brazilian_phone(&digits)
        };

        LeadForm {
            first_name: self.first_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone,
            idade: self.idade,
            lgpd_consent: self.lgpd_consent.trim().to_string(),
            cookies_accepted: self.cookies_accepted.trim().to_string(),
        }
    }

    pub fn consent(&self) -> ConsentState {
        ConsentState::from_form_fields(&self.lgpd_consent, &self.cookies_accepted)
    }
}

/// True once a normalized phone carries a complete number.
pub fn is_valid_masked_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Keep only digits, capped at the 11 digits of a Brazilian mobile number.
pub fn strip_phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect()
}

/// Display mask used across the site: "(DD) 99999-9999". Short inputs get
/// the partial mask, same as the live input formatter on the page.
pub fn format_brazilian_phone(digits: &str) -> String {
    if digits.len() <= 2 {
        format!("({digits}")
    } else if digits.len() <= 7 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..])
    }
}
