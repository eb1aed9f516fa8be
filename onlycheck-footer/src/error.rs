//! Failure taxonomy for the footer checks.

use onlycheck_common::OnlycheckError;
use thiserror::Error;

/// Everything that can sink a verification run.
///
/// Expired waits on the optional steps (preloader, cookie banner) never
/// show up here; the verifier absorbs them as "element never appeared".
/// The only timeout-class failure is the mandatory footer lookup.
#[derive(Error, Debug)]
pub enum CheckFailure {
    #[error("no <footer> element appeared within {timeout_secs}s")]
    FooterNotFound { timeout_secs: u64 },

    #[error("the footer is in the DOM but not displayed after scrolling to it")]
    FooterHidden,

    #[error("{name} not found inside the footer")]
    MissingElement { name: &'static str },

    #[error("copyright markup does not span 2014 through 2025: {html:?}")]
    CopyrightMismatch { html: String },

    #[error("found {found} social links, expected at least 4")]
    TooFewSocialLinks { found: usize },

    #[error("social link #{position} has no href")]
    SocialLinkWithoutHref { position: usize },

    #[error("privacy policy link does not point at a pdf: {href:?}")]
    PrivacyLinkNotPdf { href: String },

    /// The browser or the WebDriver endpoint failed underneath a check.
    #[error(transparent)]
    Driver(#[from] anyhow::Error),
}

impl From<CheckFailure> for OnlycheckError {
    fn from(failure: CheckFailure) -> Self {
        match failure {
            CheckFailure::Driver(e) => OnlycheckError::Driver(e),
            other => OnlycheckError::Check(other.to_string()),
        }
    }
}
