mod check_vat;
mod company;
mod shared;

pub use check_vat::CheckVatResult;
pub use company::{Company, InvalidCompanyError};
pub use shared::entity::{InvalidIDError, ID};
