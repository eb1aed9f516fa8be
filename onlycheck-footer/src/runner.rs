//! Session-scoped verification runs.

use onlycheck_common::OnlycheckError;
use onlycheck_drivers::onlycheck_browser::{OnlycheckDriver, SessionConfig, WaitSpec};
use tracing::{info, warn};
use url::Url;

use crate::error::CheckFailure;
use crate::verifier::{FooterReport, FooterVerifier};

/// Everything one verification run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub base_url: Url,
    pub session: SessionConfig,
    pub wait: WaitSpec,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://only.digital/").expect("static url parses"),
            session: SessionConfig::default(),
            wait: WaitSpec::default(),
        }
    }
}

/// Launch a session, run the footer checks, and close the session on
/// every exit path before propagating the outcome.
pub async fn verify_site_footer(options: &RunOptions) -> Result<FooterReport, OnlycheckError> {
    let driver = OnlycheckDriver::launch(&options.session).await?;

    let outcome = run_checks(&driver, options).await;

    match (driver.close().await, &outcome) {
        (Ok(()), _) => {}
        (Err(e), Ok(_)) => return Err(OnlycheckError::Driver(e)),
        (Err(e), Err(_)) => warn!(error = %e, "session close failed after a failing run"),
    }

    outcome.map_err(OnlycheckError::from)
}

async fn run_checks(
    driver: &OnlycheckDriver,
    options: &RunOptions,
) -> Result<FooterReport, CheckFailure> {
    let page = driver.open(options.base_url.as_str()).await?;
    info!(url = %options.base_url, "page opened");

    FooterVerifier::new(&page, options.wait).run().await
}
