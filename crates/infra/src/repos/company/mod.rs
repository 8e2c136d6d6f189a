mod inmemory;
mod postgres;

pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

use company_registry_domain::{Company, ID};

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    /// Persists a draft and returns the stored company with its assigned id.
    /// Fails when the VAT identity is already taken; the implementation must
    /// enforce that inside the write itself, not with a separate lookup.
    async fn insert(&self, company: &Company) -> anyhow::Result<Company>;
    /// Full replacement of the record addressed by `company.id`.
    async fn save(&self, company: &Company) -> anyhow::Result<()>;
    async fn find(&self, company_id: &ID) -> Option<Company>;
    /// Companies in id order. A `limit` of `None` means unpaged.
    async fn find_all(&self, skip: i64, limit: Option<i64>) -> Vec<Company>;
    async fn find_by_vat_identity(&self, country_code: &str, vat_number: &str)
        -> Option<Company>;
    async fn exists(&self, company_id: &ID) -> bool;
    async fn delete(&self, company_id: &ID) -> Option<Company>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, RegistryContext};
    use company_registry_domain::Company;

    /// Creates an inmemory context, and additionally a postgres context when
    /// DATABASE_URL points at a running instance.
    async fn create_contexts() -> Vec<RegistryContext> {
        let mut contexts = vec![RegistryContext::create_inmemory()];
        if std::env::var("DATABASE_URL").is_ok() {
            contexts.push(setup_context().await);
        }
        contexts
    }

    fn draft(name: &str, country_code: &str, vat_number: &str) -> Company {
        Company::new(name.into(), country_code.into(), vat_number.into())
    }

    #[tokio::test]
    async fn create_and_delete() {
        for ctx in create_contexts().await {
            let persisted = ctx
                .repos
                .companies
                .insert(&draft("Acme", "PL", "5260001246"))
                .await
                .unwrap();
            let id = persisted.id.expect("Inserted company to have an id");

            // Different find methods
            let found = ctx.repos.companies.find(&id).await.unwrap();
            assert_eq!(found, persisted);
            assert!(ctx.repos.companies.exists(&id).await);
            let found = ctx
                .repos
                .companies
                .find_by_vat_identity("PL", "5260001246")
                .await
                .unwrap();
            assert_eq!(found, persisted);

            // Delete
            let deleted = ctx.repos.companies.delete(&id).await;
            assert_eq!(deleted, Some(persisted));

            // Find
            assert!(ctx.repos.companies.find(&id).await.is_none());
            assert!(!ctx.repos.companies.exists(&id).await);
        }
    }

    #[tokio::test]
    async fn rejects_duplicate_vat_identity() {
        for ctx in create_contexts().await {
            let persisted = ctx
                .repos
                .companies
                .insert(&draft("First", "SE", "556036079301"))
                .await
                .unwrap();

            let duplicate = ctx
                .repos
                .companies
                .insert(&draft("Second", "SE", "556036079301"))
                .await;
            assert!(duplicate.is_err());

            ctx.repos
                .companies
                .delete(&persisted.id.unwrap())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn update() {
        for ctx in create_contexts().await {
            let mut company = ctx
                .repos
                .companies
                .insert(&draft("Old Name", "DK", "13585628"))
                .await
                .unwrap();

            company.name = "New Name".into();
            assert!(ctx.repos.companies.save(&company).await.is_ok());

            let found = ctx
                .repos
                .companies
                .find(&company.id.unwrap())
                .await
                .unwrap();
            assert_eq!(found, company);

            ctx.repos
                .companies
                .delete(&company.id.unwrap())
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn find_all_respects_paging_and_id_order() {
        for ctx in create_contexts().await {
            let a = ctx
                .repos
                .companies
                .insert(&draft("Alpha", "PL", "7000000001"))
                .await
                .unwrap();
            let b = ctx
                .repos
                .companies
                .insert(&draft("Beta", "SE", "7000000002"))
                .await
                .unwrap();
            let c = ctx
                .repos
                .companies
                .insert(&draft("Gamma", "DK", "7000000003"))
                .await
                .unwrap();

            let page = ctx.repos.companies.find_all(0, Some(2)).await;
            assert!(page.len() <= 2);

            let all = ctx.repos.companies.find_all(0, None).await;
            let position = |company: &Company| {
                all.iter()
                    .position(|c| c.id == company.id)
                    .expect("Inserted company to be listed")
            };
            assert!(position(&a) < position(&b));
            assert!(position(&b) < position(&c));

            for company in [a, b, c].iter() {
                ctx.repos
                    .companies
                    .delete(&company.id.unwrap())
                    .await
                    .unwrap();
            }
        }
    }
}
