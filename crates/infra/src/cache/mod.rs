use company_registry_domain::{CheckVatResult, Company, ID};
use moka::future::Cache;

const MAX_CAPACITY: u64 = 10_000;

/// Cache key for one page of the company listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyPageKey {
    pub page: i64,
    pub size: Option<i64>,
}

/// The three response cache regions. `companies` holds listing pages and is
/// dropped wholesale on any mutation; `company` and `check_vat` hold
/// per-company entries evicted by id when that company changes.
///
/// One instance is created per context: a single process-wide set of regions
/// in production, a fresh set for every test context.
#[derive(Clone)]
pub struct Caches {
    pub companies: Cache<CompanyPageKey, Vec<Company>>,
    pub company: Cache<ID, Company>,
    pub check_vat: Cache<ID, CheckVatResult>,
}

impl Caches {
    pub fn create() -> Self {
        Self {
            companies: Cache::builder().max_capacity(MAX_CAPACITY).build(),
            company: Cache::builder().max_capacity(MAX_CAPACITY).build(),
            check_vat: Cache::builder().max_capacity(MAX_CAPACITY).build(),
        }
    }

    /// Drops every cached listing page.
    pub fn evict_company_lists(&self) {
        self.companies.invalidate_all();
    }

    /// Drops the cached record and VAT lookup for a single company.
    pub async fn evict_company(&self, company_id: &ID) {
        self.company.invalidate(company_id).await;
        self.check_vat.invalidate(company_id).await;
    }
}
