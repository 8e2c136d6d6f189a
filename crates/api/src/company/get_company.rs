use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::get_company::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::RegistryContext;

pub async fn get_company_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = GetCompanyUseCase {
        company_id: path_params.company_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|company| HttpResponse::Ok().json(APIResponse::new(company)))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct GetCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A company with id: {}, was not found.", id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        if let Some(company) = ctx.caches.company.get(&self.company_id).await {
            return Ok(company);
        }

        let company = match ctx.repos.companies.find(&self.company_id).await {
            Some(company) => company,
            None => return Err(UseCaseError::NotFound(self.company_id)),
        };
        ctx.caches
            .company
            .insert(self.company_id, company.clone())
            .await;

        Ok(company)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use company_registry_infra::RegistryContext;

    async fn insert_company(ctx: &RegistryContext) -> Company {
        ctx.repos
            .companies
            .insert(&Company::new("Acme".into(), "PL".into(), "123456".into()))
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn returns_company_by_id() {
        let ctx = RegistryContext::create_inmemory();
        let company = insert_company(&ctx).await;

        let usecase = GetCompanyUseCase {
            company_id: company.id.unwrap(),
        };
        let found = execute(usecase, &ctx).await.unwrap();
        assert_eq!(found, company);
    }

    #[actix_web::test]
    async fn rejects_unknown_id() {
        let ctx = RegistryContext::create_inmemory();

        let usecase = GetCompanyUseCase {
            company_id: ID::new(612),
        };
        assert!(execute(usecase, &ctx).await.is_err());
    }

    #[actix_web::test]
    async fn serves_repeated_reads_from_cache() {
        let ctx = RegistryContext::create_inmemory();
        let company = insert_company(&ctx).await;
        let company_id = company.id.unwrap();

        let first = execute(GetCompanyUseCase { company_id }, &ctx).await.unwrap();
        assert_eq!(first, company);

        // Bypassing the usecases leaves the cache untouched, so the read
        // still answers with the cached record.
        ctx.repos.companies.delete(&company_id).await.unwrap();

        let cached = execute(GetCompanyUseCase { company_id }, &ctx).await.unwrap();
        assert_eq!(cached, company);
    }
}
