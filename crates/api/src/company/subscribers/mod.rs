use super::create_company::{CreateCompanyUseCase, UseCaseRes as CreateCompanyRes};
use super::delete_company::{DeleteCompanyUseCase, UseCaseRes as DeleteCompanyRes};
use super::update_company::{UpdateCompanyUseCase, UseCaseRes as UpdateCompanyRes};
use crate::shared::usecase::Subscriber;
use company_registry_infra::RegistryContext;

/// Inserting a company changes which listing pages exist, so all of them
/// go. The per-company caches are untouched since the id is brand new.
pub struct EvictListingsOnCompanyCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateCompanyUseCase> for EvictListingsOnCompanyCreated {
    async fn notify(&self, _e: &CreateCompanyRes, ctx: &RegistryContext) {
        ctx.caches.evict_company_lists();
    }
}

pub struct EvictCachesOnCompanyUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateCompanyUseCase> for EvictCachesOnCompanyUpdated {
    async fn notify(&self, e: &UpdateCompanyRes, ctx: &RegistryContext) {
        ctx.caches.evict_company(&e.company_id).await;
        ctx.caches.evict_company_lists();
    }
}

pub struct EvictCachesOnCompanyDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteCompanyUseCase> for EvictCachesOnCompanyDeleted {
    async fn notify(&self, e: &DeleteCompanyRes, ctx: &RegistryContext) {
        ctx.caches.evict_company(&e.company_id).await;
        ctx.caches.evict_company_lists();
    }
}
