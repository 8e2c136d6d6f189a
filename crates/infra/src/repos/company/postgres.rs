use super::ICompanyRepo;
use company_registry_domain::{Company, ID};
use sqlx::{FromRow, PgPool};

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    company_id: i32,
    name: String,
    country_code: String,
    vat_number: String,
}

impl Into<Company> for CompanyRaw {
    fn into(self) -> Company {
        Company {
            id: Some(ID::new(self.company_id)),
            name: self.name,
            country_code: self.country_code,
            vat_number: self.vat_number,
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<Company> {
        // The unique constraint on (country_code, vat_number) backs this
        // insert, so a concurrent duplicate fails here instead of slipping
        // past the service-layer lookup.
        let company: CompanyRaw = sqlx::query_as(
            r#"
            INSERT INTO companies(name, country_code, vat_number)
            VALUES($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&company.name)
        .bind(&company.country_code)
        .bind(&company.vat_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(company.into())
    }

    async fn save(&self, company: &Company) -> anyhow::Result<()> {
        let id = company
            .id
            .ok_or_else(|| anyhow::anyhow!("Cannot save a company that has no id"))?;
        sqlx::query(
            r#"
            UPDATE companies
            SET name = $2,
            country_code = $3,
            vat_number = $4
            WHERE company_id = $1
            "#,
        )
        .bind(id.inner())
        .bind(&company.name)
        .bind(&company.country_code)
        .bind(&company.vat_number)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, company_id: &ID) -> Option<Company> {
        match sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            WHERE company_id = $1
            "#,
        )
        .bind(company_id.inner())
        .fetch_one(&self.pool)
        .await
        {
            Ok(company) => Some(company.into()),
            Err(_) => None,
        }
    }

    async fn find_all(&self, skip: i64, limit: Option<i64>) -> Vec<Company> {
        // LIMIT NULL is how postgres spells "unpaged".
        sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            ORDER BY company_id
            LIMIT $1
            OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.into())
        .collect()
    }

    async fn find_by_vat_identity(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Option<Company> {
        match sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            WHERE country_code = $1 AND vat_number = $2
            "#,
        )
        .bind(country_code)
        .bind(vat_number)
        .fetch_one(&self.pool)
        .await
        {
            Ok(company) => Some(company.into()),
            Err(_) => None,
        }
    }

    async fn exists(&self, company_id: &ID) -> bool {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM companies WHERE company_id = $1)
            "#,
        )
        .bind(company_id.inner())
        .fetch_one(&self.pool)
        .await
        .unwrap_or(false)
    }

    async fn delete(&self, company_id: &ID) -> Option<Company> {
        match sqlx::query_as::<_, CompanyRaw>(
            r#"
            DELETE FROM companies
            WHERE company_id = $1
            RETURNING *
            "#,
        )
        .bind(company_id.inner())
        .fetch_one(&self.pool)
        .await
        {
            Ok(company) => Some(company.into()),
            Err(_) => None,
        }
    }
}
