use super::subscribers::EvictListingsOnCompanyCreated;
use crate::{
    error::RegistryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{http::header, web, HttpResponse};
use company_registry_api_structs::create_company::*;
use company_registry_domain::{Company, InvalidCompanyError, ID};
use company_registry_infra::RegistryContext;

pub async fn create_company_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let body = body.0;
    let usecase = CreateCompanyUseCase {
        name: body.name,
        country_code: body.country_code,
        vat_number: body.vat_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created()
                .insert_header((
                    header::LOCATION,
                    format!("/api/v1/companies/{}", res.company_id),
                ))
                .json(APIResponse::new(res.company))
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct CreateCompanyUseCase {
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
    VatIdentityTaken(String, String),
    StorageError,
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCompany(e) => Self::BadClientData(e.to_string()),
            UseCaseError::VatIdentityTaken(country_code, vat_number) => Self::Conflict(format!(
                "A company with country code: {} and VAT number: {}, is already registered.",
                country_code, vat_number
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCompanyUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompany";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        // The draft starts without an id; whatever the caller may have sent
        // is dropped and the store assigns one.
        let company = Company::new(
            self.name.clone(),
            self.country_code.clone(),
            self.vat_number.clone(),
        );
        if let Err(e) = company.validate() {
            return Err(UseCaseError::InvalidCompany(e));
        }

        let existing = ctx
            .repos
            .companies
            .find_by_vat_identity(&company.country_code, &company.vat_number)
            .await;
        if existing.is_some() {
            return Err(UseCaseError::VatIdentityTaken(
                company.country_code,
                company.vat_number,
            ));
        }

        let company = ctx
            .repos
            .companies
            .insert(&company)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let company_id = company.id.ok_or(UseCaseError::StorageError)?;

        Ok(UseCaseRes {
            company,
            company_id,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(EvictListingsOnCompanyCreated)]
    }
}
