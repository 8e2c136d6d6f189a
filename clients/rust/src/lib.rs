mod base;
mod company;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use company::CompanyClient;
pub use company::{CreateCompanyInput, ListCompaniesInput, UpdateCompanyInput};
pub use company_registry_api_structs::dtos::*;
pub use company_registry_domain::ID;
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use company_registry_api_structs::dtos::CheckVatResultDTO as CheckVatResult;
pub use company_registry_api_structs::dtos::CompanyDTO as Company;

/// Company Registry Server SDK
///
/// The SDK contains methods for interacting with the Company Registry server
/// API.
#[derive(Clone)]
pub struct RegistrySDK {
    pub company: CompanyClient,
    pub status: StatusClient,
}

impl RegistrySDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let company = CompanyClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { company, status }
    }
}
