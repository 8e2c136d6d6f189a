use crate::{
    error::RegistryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_registry_api_structs::dtos::CompanyDTO;
use company_registry_api_structs::list_companies::*;
use company_registry_domain::Company;
use company_registry_infra::{CompanyPageKey, RegistryContext};

pub async fn list_companies_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<RegistryContext>,
) -> Result<HttpResponse, RegistryError> {
    let usecase = ListCompaniesUseCase {
        page: query_params.page,
        size: query_params.size,
    };

    execute(usecase, &ctx)
        .await
        .map(|companies| {
            HttpResponse::Ok().json(
                companies
                    .into_iter()
                    .map(CompanyDTO::new)
                    .collect::<APIResponse>(),
            )
        })
        .map_err(RegistryError::from)
}

#[derive(Debug)]
pub struct ListCompaniesUseCase {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidPaging(String),
}

impl From<UseCaseError> for RegistryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPaging(message) => Self::BadClientData(message),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListCompanies";

    async fn execute(&mut self, ctx: &RegistryContext) -> Result<Self::Response, Self::Error> {
        let page = self.page.unwrap_or(0);
        if page < 0 {
            return Err(UseCaseError::InvalidPaging(format!(
                "The given page: {} is not a non-negative integer",
                page
            )));
        }
        if let Some(size) = self.size {
            if size <= 0 {
                return Err(UseCaseError::InvalidPaging(format!(
                    "The given size: {} is not a positive integer",
                    size
                )));
            }
        }

        let key = CompanyPageKey {
            page,
            size: self.size,
        };
        if let Some(companies) = ctx.caches.companies.get(&key).await {
            return Ok(companies);
        }

        let skip = match self.size {
            Some(size) => page * size,
            // Without a size the whole listing is returned and page is moot.
            None => 0,
        };
        let companies = ctx.repos.companies.find_all(skip, self.size).await;
        ctx.caches.companies.insert(key, companies.clone()).await;

        Ok(companies)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use company_registry_infra::RegistryContext;

    async fn seed(ctx: &RegistryContext, count: i32) {
        for i in 0..count {
            ctx.repos
                .companies
                .insert(&Company::new(
                    format!("Company {}", i),
                    "PL".into(),
                    format!("77700000{}", i),
                ))
                .await
                .unwrap();
        }
    }

    #[actix_web::test]
    async fn lists_all_companies_when_unpaged() {
        let ctx = RegistryContext::create_inmemory();
        seed(&ctx, 3).await;

        let usecase = ListCompaniesUseCase {
            page: None,
            size: None,
        };
        let companies = execute(usecase, &ctx).await.unwrap();
        assert_eq!(companies.len(), 3);
    }

    #[actix_web::test]
    async fn returns_at_most_size_items_without_duplicates() {
        let ctx = RegistryContext::create_inmemory();
        seed(&ctx, 5).await;

        let first = execute(
            ListCompaniesUseCase {
                page: Some(0),
                size: Some(2),
            },
            &ctx,
        )
        .await
        .unwrap();
        let second = execute(
            ListCompaniesUseCase {
                page: Some(1),
                size: Some(2),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 2);
        for company in &first {
            assert!(!second.contains(company));
        }
    }

    #[actix_web::test]
    async fn rejects_negative_page_and_non_positive_size() {
        let ctx = RegistryContext::create_inmemory();

        assert!(execute(
            ListCompaniesUseCase {
                page: Some(-1),
                size: Some(10),
            },
            &ctx,
        )
        .await
        .is_err());

        assert!(execute(
            ListCompaniesUseCase {
                page: Some(0),
                size: Some(0),
            },
            &ctx,
        )
        .await
        .is_err());
    }

    #[actix_web::test]
    async fn serves_repeated_listings_from_cache() {
        let ctx = RegistryContext::create_inmemory();
        seed(&ctx, 2).await;

        let companies = execute(
            ListCompaniesUseCase {
                page: None,
                size: None,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(companies.len(), 2);

        // Bypassing the usecases leaves the cache untouched, so the stale
        // page is still served.
        let id = companies[0].id.unwrap();
        ctx.repos.companies.delete(&id).await.unwrap();

        let cached = execute(
            ListCompaniesUseCase {
                page: None,
                size: None,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(cached.len(), 2);
    }
}
