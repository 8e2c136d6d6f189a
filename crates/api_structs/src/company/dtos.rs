use company_registry_domain::{CheckVatResult, Company, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ID>,
    pub name: String,
    pub country_code: String,
    pub vat_number: String,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            country_code: company.country_code,
            vat_number: company.vat_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVatResultDTO {
    pub country_code: String,
    pub vat_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    pub valid: bool,
    pub name: Option<String>,
    pub address: Option<String>,
}

impl CheckVatResultDTO {
    pub fn new(result: CheckVatResult) -> Self {
        Self {
            country_code: result.country_code,
            vat_number: result.vat_number,
            request_date: result.request_date,
            valid: result.valid,
            name: result.name,
            address: result.address,
        }
    }
}
