//! Session verification and cookie handling

pub mod claims;
pub mod cookies;
pub mod verifier;

pub use claims::{decode_unverified, SessionClaims};
pub use verifier::SessionVerifier;
