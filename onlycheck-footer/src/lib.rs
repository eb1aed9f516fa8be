//! Footer verification for <https://only.digital/>.
//!
//! The domain crate: named locators for the page regions, pure
//! predicates behind the assertions, the sequential verifier that
//! drives a live page, and a session-scoped runner that guarantees the
//! browser is torn down on every exit path.
pub mod checks;
pub mod error;
pub mod locators;
pub mod runner;
pub mod verifier;

pub use error::CheckFailure;
pub use runner::{verify_site_footer, RunOptions};
pub use verifier::{FooterReport, FooterVerifier};
