mod vies;

pub use vies::{IVatVerifier, StubVatVerifier, VerifierError, ViesVatVerifier};
