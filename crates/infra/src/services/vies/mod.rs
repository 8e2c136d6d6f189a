mod soap_api;
mod stub;

pub use soap_api::ViesVatVerifier;
pub use stub::StubVatVerifier;

use company_registry_domain::CheckVatResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error("The VAT registry could not be reached: {0}")]
    Transport(String),
    #[error("The VAT registry rejected the request: {0}")]
    Fault(String),
    #[error("The VAT registry returned an unreadable response: {0}")]
    MalformedResponse(String),
}

#[async_trait::async_trait]
pub trait IVatVerifier: Send + Sync {
    async fn verify(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<CheckVatResult, VerifierError>;
}
