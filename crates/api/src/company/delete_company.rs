use super::subscribers::EvictCachesOnCompanyDeleted;
use crate::{
    error::RegistryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::delete_company::*;
use company_registry_domain::{Company, ID};
use company_registry_infra::RegistryContext;

pub async fn delete_company_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = DeleteCompanyUseCase {
        company_id: path_params.company_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct DeleteCompanyUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub company: Company,
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
impl UseCase for DeleteCompanyUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let company = match ctx.repos.companies.delete(&self.company_id).await {
            Some(company) => company,
            None => return Err(UseCaseError::NotFound(self.company_id)),
        };

        Ok(UseCaseRes {
            company,
            company_id: self.company_id,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(EvictCachesOnCompanyDeleted)]
    }
}
