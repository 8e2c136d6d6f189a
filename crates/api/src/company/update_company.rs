use super::subscribers::EvictCachesOnCompanyUpdated;
use crate::{
    error::RegistryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::update_company::*;
use company_registry_domain::{Company, InvalidCompanyError, ID};
use company_registry_infra::RegistryContext;

pub async fn update_company_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let body = body.0;
    let usecase = UpdateCompanyUseCase {
        company_id: body.id,
        name: body.name,
        country_code: body.country_code,
        vat_number: body.vat_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.company)))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct UpdateCompanyUseCase {
    pub company_id: ID,
    pub name: String,
    pub country_code: String,
    pub vat_number: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub company: Company,
    pub company_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidCompany(InvalidCompanyError),
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCompany(e) => Self::BadClientData(e.to_string()),
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A company with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCompanyUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let company = Company {
            id: Some(self.company_id),
            name: self.name.clone(),
            country_code: self.country_code.clone(),
            vat_number: self.vat_number.clone(),
        };
        if let Err(e) = company.validate() {
            return Err(UseCaseError::InvalidCompany(e));
        }

        if !ctx.repos.companies.exists(&self.company_id).await {
            return Err(UseCaseError::NotFound(self.company_id));
        }

        // Unlike insert, the VAT identity is not re-checked here, so an
        // update can move a company onto an identity another record already
        // holds. See the colliding identity test below.
        ctx.repos
            .companies
            .save(&company)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            company,
            company_id: self.company_id,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(EvictCachesOnCompanyUpdated)]
    }
}
