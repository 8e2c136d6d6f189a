use crate::dtos::{CheckVatResultDTO, CompanyDTO};
use company_registry_domain::ID;
use serde::{Deserialize, Serialize};

pub mod list_companies {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub page: Option<i64>,
        pub size: Option<i64>,
    }

    pub type APIResponse = Vec<CompanyDTO>;
}

pub mod get_company {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PathParams {
        pub company_id: ID,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod create_company {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub country_code: String,
        pub vat_number: String,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod update_company {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub id: ID,
        pub name: String,
        pub country_code: String,
        pub vat_number: String,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod delete_company {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PathParams {
        pub company_id: ID,
    }
}

pub mod check_vat {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PathParams {
        pub company_id: ID,
    }

    pub type APIResponse = CheckVatResultDTO;
}
