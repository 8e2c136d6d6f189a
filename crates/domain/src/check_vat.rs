use serde::{Deserialize, Serialize};

/// Outcome of a single VAT registry lookup. Never persisted, only cached
/// transiently by company id until the company record changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckVatResult {
    pub country_code: String,
    pub vat_number: String,
    /// Date of the lookup as reported by the registry.
    pub request_date: Option<String>,
    pub valid: bool,
    /// Registered name and address, when the registry discloses them.
    pub name: Option<String>,
    pub address: Option<String>,
}
