use serde::{Deserialize, Serialize};

/// Privacy choices captured on the page before a lead is submitted.
///
/// Built once per submission from the raw form fields and read only by the
/// lead pipeline; the quiz module has no access to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentState {
    pub lgpd_accepted: bool,
    pub cookies: CookieChoice,
}

/// Cookie banner outcome. The banner can be dismissed without a choice,
/// so this is a tri-state, not a bool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum CookieChoice {
    Accepted,
    Declined,
    Undecided,
}

impl CookieChoice {
    /// The form submits the banner state as the literal strings
    /// "true" / "false" / "null".
    pub fn from_form_value(value: &str) -> Self {
        match value.trim() {
            "true" => CookieChoice::Accepted,
            "false" => CookieChoice::Declined,
            _ => CookieChoice::Undecided,
        }
    }

    pub fn as_stored(&self) -> Option<bool> {
        match self {
            CookieChoice::Accepted => Some(true),
            CookieChoice::Declined => Some(false),
            CookieChoice::Undecided => None,
        }
    }
}

impl ConsentState {
    /// LGPD consent must be the explicit string "true"; anything else
    /// (including a forged hidden-field value) counts as refusal.
    pub fn from_form_fields(lgpd_consent: &str, cookies_accepted: &str) -> Self {
        ConsentState {
            lgpd_accepted: lgpd_consent.trim() == "true",
            cookies: CookieChoice::from_form_value(cookies_accepted),
        }
    }
}
