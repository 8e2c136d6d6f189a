use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `Company` is a registered legal entity identified towards the outside
/// world by its VAT identity: the `(country_code, vat_number)` pair, which is
/// unique across all persisted companies regardless of the assigned id.
///
/// `id` is `None` until the storage layer has persisted the company and
/// assigned one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<ID>,
    pub name: String,
    pub country_code: String,
    pub vat_number: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidCompanyError {
    #[error("The field `{0}` is required and cannot be blank")]
    MissingField(&'static str),
}

impl Company {
    pub fn new(name: String, country_code: String, vat_number: String) -> Self {
        Self {
            id: None,
            name,
            country_code,
            vat_number,
        }
    }

    /// All three descriptive fields are mandatory and must contain at least
    /// one non-whitespace character.
    pub fn validate(&self) -> Result<(), InvalidCompanyError> {
        if self.name.trim().is_empty() {
            return Err(InvalidCompanyError::MissingField("name"));
        }
        if self.country_code.trim().is_empty() {
            return Err(InvalidCompanyError::MissingField("countryCode"));
        }
        if self.vat_number.trim().is_empty() {
            return Err(InvalidCompanyError::MissingField("vatNumber"));
        }
        Ok(())
    }

    /// Whether two companies claim the same VAT identity.
    pub fn same_vat_identity(&self, other: &Self) -> bool {
        self.country_code == other.country_code && self.vat_number == other.vat_number
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn acme() -> Company {
        Company::new("Acme".into(), "PL".into(), "123456".into())
    }

    #[test]
    fn it_creates_company_without_id() {
        let company = acme();
        assert!(company.id.is_none());
        assert!(company.validate().is_ok());
    }

    #[test]
    fn it_rejects_blank_fields() {
        let mut company = acme();
        company.name = "   ".into();
        assert_eq!(
            company.validate(),
            Err(InvalidCompanyError::MissingField("name"))
        );

        let mut company = acme();
        company.country_code = "".into();
        assert_eq!(
            company.validate(),
            Err(InvalidCompanyError::MissingField("countryCode"))
        );

        let mut company = acme();
        company.vat_number = "".into();
        assert_eq!(
            company.validate(),
            Err(InvalidCompanyError::MissingField("vatNumber"))
        );
    }

    #[test]
    fn it_compares_vat_identities() {
        let a = acme();
        let mut b = acme();
        b.name = "Acme Industries".into();
        assert!(a.same_vat_identity(&b));

        b.vat_number = "654321".into();
        assert!(!a.same_vat_identity(&b));
    }
}
