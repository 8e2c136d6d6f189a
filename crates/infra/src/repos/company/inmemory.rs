use super::ICompanyRepo;
use company_registry_domain::{Company, ID};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

pub struct InMemoryCompanyRepo {
    companies: Mutex<Vec<Company>>,
    id_seq: AtomicI32,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: Mutex::new(Vec::new()),
            id_seq: AtomicI32::new(1),
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<Company> {
        // Uniqueness is checked inside the same critical section as the
        // write, so two concurrent inserts of the same identity cannot both
        // succeed.
        let mut companies = self.companies.lock().unwrap();
        if companies.iter().any(|c| c.same_vat_identity(company)) {
            anyhow::bail!(
                "A company with VAT identity ({}, {}) is already registered",
                company.country_code,
                company.vat_number
            );
        }

        let mut persisted = company.clone();
        persisted.id = Some(ID::new(self.id_seq.fetch_add(1, Ordering::SeqCst)));
        companies.push(persisted.clone());
        Ok(persisted)
    }

    async fn save(&self, company: &Company) -> anyhow::Result<()> {
        let mut companies = self.companies.lock().unwrap();
        for i in 0..companies.len() {
            if companies[i].id == company.id {
                companies.splice(i..i + 1, vec![company.clone()]);
            }
        }
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> Option<Company> {
        let companies = self.companies.lock().unwrap();
        companies
            .iter()
            .find(|c| c.id == Some(*company_id))
            .cloned()
    }

    async fn find_all(&self, skip: i64, limit: Option<i64>) -> Vec<Company> {
        let companies = self.companies.lock().unwrap();
        let companies = companies.iter().skip(skip.max(0) as usize);
        match limit {
            Some(limit) => companies.take(limit.max(0) as usize).cloned().collect(),
            None => companies.cloned().collect(),
        }
    }

    async fn find_by_vat_identity(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Option<Company> {
        let companies = self.companies.lock().unwrap();
        companies
            .iter()
            .find(|c| c.country_code == country_code && c.vat_number == vat_number)
            .cloned()
    }

    async fn exists(&self, company_id: &ID) -> bool {
        let companies = self.companies.lock().unwrap();
        companies.iter().any(|c| c.id == Some(*company_id))
    }

    async fn delete(&self, company_id: &ID) -> Option<Company> {
        let mut companies = self.companies.lock().unwrap();
        let index = companies.iter().position(|c| c.id == Some(*company_id))?;
        Some(companies.remove(index))
    }
}
