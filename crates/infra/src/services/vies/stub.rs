use super::{IVatVerifier, VerifierError};
use company_registry_domain::CheckVatResult;

/// Deterministic verifier wired into the inmemory context so tests never
/// talk to the real registry. Reports every non-blank identity as
/// registered.
pub struct StubVatVerifier;

#[async_trait::async_trait]
impl IVatVerifier for StubVatVerifier {
    async fn verify(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<CheckVatResult, VerifierError> {
        if country_code.trim().is_empty() || vat_number.trim().is_empty() {
            return Err(VerifierError::Fault("INVALID_INPUT".into()));
        }

        Ok(CheckVatResult {
            country_code: country_code.into(),
            vat_number: vat_number.into(),
            request_date: None,
            valid: true,
            name: Some("REGISTERED TEST COMPANY".into()),
            address: None,
        })
    }
}
