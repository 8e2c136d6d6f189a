use crate::base::{APIResponse, BaseClient};
use company_registry_api_structs::*;
use company_registry_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyClient {
    base: Arc<BaseClient>,
}

pub struct CreateCompanyInput {
    pub name: String,
    pub country_code: String,
    pub vat_number: String,
}

pub struct UpdateCompanyInput {
    pub company_id: ID,
    pub name: String,
    pub country_code: String,
    pub vat_number: String,
}

pub struct ListCompaniesInput {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl CompanyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(
        &self,
        input: ListCompaniesInput,
    ) -> APIResponse<list_companies::APIResponse> {
        let mut query = Vec::new();
        if let Some(page) = input.page {
            query.push(format!("page={}", page));
        }
        if let Some(size) = input.size {
            query.push(format!("size={}", size));
        }
        let path = if query.is_empty() {
            "companies".to_string()
        } else {
            format!("companies?{}", query.join("&"))
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get(&self, company_id: ID) -> APIResponse<get_company::APIResponse> {
        self.base
            .get(format!("companies/{}", company_id), StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateCompanyInput,
    ) -> APIResponse<create_company::APIResponse> {
        let body = create_company::RequestBody {
            name: input.name,
            country_code: input.country_code,
            vat_number: input.vat_number,
        };
        self.base
            .post(body, "companies".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateCompanyInput,
    ) -> APIResponse<update_company::APIResponse> {
        let body = update_company::RequestBody {
            id: input.company_id,
            name: input.name,
            country_code: input.country_code,
            vat_number: input.vat_number,
        };
        self.base.put(body, "companies".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, company_id: ID) -> APIResponse<()> {
        self.base
            .delete(format!("companies/{}", company_id), StatusCode::NO_CONTENT)
            .await
    }

    pub async fn check_vat(&self, company_id: ID) -> APIResponse<check_vat::APIResponse> {
        self.base
            .get(format!("companies/{}/checkVat", company_id), StatusCode::OK)
            .await
    }
}
