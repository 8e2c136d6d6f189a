use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::check_vat::*;
use company_registry_domain::{CheckVatResult, ID};
use company_registry_infra::RegistryContext;

pub async fn check_vat_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = CheckVatUseCase {
        company_id: path_params.company_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|result| HttpResponse::Ok().json(APIResponse::new(result)))
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct CheckVatUseCase {
    pub company_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    VerifierUnavailable(String),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("A company with id: {}, was not found.", id))
            }
            UseCaseError::VerifierUnavailable(message) => Self::ServiceUnavailable(message),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckVatUseCase {
    type Response = CheckVatResult;

    type Error = UseCaseError;

    const NAME: &'static str = "CheckVat";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        if let Some(result) = ctx.caches.check_vat.get(&self.company_id).await {
            return Ok(result);
        }

        let company = match ctx.repos.companies.find(&self.company_id).await {
            Some(company) => company,
            None => return Err(UseCaseError::NotFound(self.company_id)),
        };

        let result = ctx
            .vat_verifier
            .verify(&company.country_code, &company.vat_number)
            .await
            .map_err(|e| UseCaseError::VerifierUnavailable(e.to_string()))?;

        // Only successful lookups are memoized; a failure must be retried by
        // the next call.
        ctx.caches
            .check_vat
            .insert(self.company_id, result.clone())
            .await;

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use company_registry_domain::Company;
    use company_registry_infra::{IVatVerifier, VerifierError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingVerifier {
        calls: Arc<AtomicUsize>,
        failures_before_success: usize,
    }

    #[async_trait::async_trait]
    impl IVatVerifier for CountingVerifier {
        async fn verify(
            &self,
            country_code: &str,
            vat_number: &str,
        ) -> Result<CheckVatResult, VerifierError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                return Err(VerifierError::Transport("connection refused".into()));
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

    async fn setup(failures_before_success: usize) -> (RegistryContext, Arc<AtomicUsize>, ID) {
        let mut ctx = RegistryContext::create_inmemory();
        let calls = Arc::new(AtomicUsize::new(0));
        ctx.vat_verifier = Arc::new(CountingVerifier {
            calls: calls.clone(),
            failures_before_success,
        });

        let company = ctx
            .repos
            .companies
            .insert(&Company::new("Acme".into(), "PL".into(), "123456".into()))
            .await
            .unwrap();

        (ctx, calls, company.id.unwrap())
    }

    #[actix_web::test]
    async fn returns_verification_result() {
        let (ctx, _, company_id) = setup(0).await;

        let result = execute(CheckVatUseCase { company_id }, &ctx).await.unwrap();
        assert!(result.valid);
        assert_eq!(result.country_code, "PL");
        assert_eq!(result.vat_number, "123456");
    }

    #[actix_web::test]
    async fn rejects_unknown_company() {
        let (ctx, calls, _) = setup(0).await;

        let usecase = CheckVatUseCase {
            company_id: ID::new(99),
        };
        assert!(execute(usecase, &ctx).await.is_err());
        // The verifier is never consulted for a company that does not exist.
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn memoizes_successful_lookups() {
        let (ctx, calls, company_id) = setup(0).await;

        execute(CheckVatUseCase { company_id }, &ctx).await.unwrap();
        execute(CheckVatUseCase { company_id }, &ctx).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn does_not_memoize_failures() {
        let (ctx, calls, company_id) = setup(1).await;

        let failed = execute(CheckVatUseCase { company_id }, &ctx).await;
        match failed {
            Err(UseCaseError::VerifierUnavailable(message)) => {
                assert!(message.contains("connection refused"))
            }
            other => panic!("Expected verifier failure, got {:?}", other),
        }

        // The next call goes back to the verifier and succeeds.
        let result = execute(CheckVatUseCase { company_id }, &ctx).await.unwrap();
        assert!(result.valid);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
