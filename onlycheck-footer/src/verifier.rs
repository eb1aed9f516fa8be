//! The sequential footer verification procedure.

use onlycheck_drivers::onlycheck_browser::{OnlycheckElement, OnlycheckPage, WaitSpec};
use serde::Serialize;
use tracing::{debug, info};

use crate::checks;
use crate::error::CheckFailure;
use crate::locators;

/// What a passing run observed, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct FooterReport {
    /// Whether the loading overlay was gone (or never present) when the
    /// checks started.
    pub preloader_cleared: bool,
    /// Whether a cookie banner showed up and was removed.
    pub cookie_banner_dismissed: bool,
    pub social_links: usize,
    pub privacy_href: String,
}

/// Drives the wait-then-assert sequence against a live page.
///
/// The two overlay steps are expected-and-optional: their waits expiring
/// means the element never showed, which is a valid terminal state, and
/// the run continues. Every later step is load-bearing.
pub struct FooterVerifier<'a> {
    page: &'a OnlycheckPage,
    wait: WaitSpec,
}

impl<'a> FooterVerifier<'a> {
    pub fn new(page: &'a OnlycheckPage, wait: WaitSpec) -> Self {
        Self { page, wait }
    }

    /// Run the full sequence and report what was seen.
    pub async fn run(&self) -> Result<FooterReport, CheckFailure> {
        let preloader_cleared = self.await_preloader_gone().await?;
        let cookie_banner_dismissed = self.dismiss_cookie_banner().await?;

        let footer = self.locate_footer().await?;
        self.verify_copyright(&footer).await?;
        let social_links = self.verify_social_links(&footer).await?;
        let privacy_href = self.verify_privacy_link(&footer).await?;

        Ok(FooterReport {
            preloader_cleared,
            cookie_banner_dismissed,
            social_links,
            privacy_href,
        })
    }

    /// Wait out the loading overlay. Expiry is not a failure: the
    /// overlay staying up (or never existing) must not sink the run.
    async fn await_preloader_gone(&self) -> Result<bool, CheckFailure> {
        let cleared = self.page.wait_for_gone(locators::PRELOADER, self.wait).await?;
        if cleared {
            debug!("loading overlay resolved");
        } else {
            info!("loading overlay still visible after the wait budget; continuing");
        }
        Ok(cleared)
    }

    /// Dismiss the cookie banner by deleting its parent node. The target
    /// is unconditional dismissal, not the accept-button workflow.
    async fn dismiss_cookie_banner(&self) -> Result<bool, CheckFailure> {
        if let Some(banner) = self
            .page
            .wait_for_visible(locators::COOKIE_BANNER_TEXT, self.wait)
            .await?
        {
            self.page.remove_parent(&banner).await?;
            debug!("cookie banner removed");
            return Ok(true);
        }

        // The banner text can be reworded while the accept control stays
        // put; fall back to it before declaring the banner absent.
        if let Some(button) = self.page.find(locators::COOKIE_ACCEPT).await? {
            self.page.remove_parent(&button).await?;
            debug!("cookie banner removed via its accept control's parent");
            return Ok(true);
        }

        info!("cookie banner never appeared; skipping");
        Ok(false)
    }

    /// Locate the footer, scroll it into view, and require it displayed.
    ///
    /// A footer missing from the DOM is a timeout-class failure; one
    /// that is present but still hidden after the scroll is an
    /// assertion-class failure. The distinction is deliberate.
    async fn locate_footer(&self) -> Result<OnlycheckElement, CheckFailure> {
        let footer = self
            .page
            .wait_for_present(locators::FOOTER, self.wait)
            .await?
            .ok_or(CheckFailure::FooterNotFound {
                timeout_secs: self.wait.timeout.as_secs(),
            })?;

        self.page.scroll_into_center(&footer).await?;
        self.page.wait_until_displayed(&footer, self.wait).await?;
        if !footer.is_displayed().await? {
            return Err(CheckFailure::FooterHidden);
        }
        debug!("footer located and visible");
        Ok(footer)
    }

    async fn verify_copyright(&self, footer: &OnlycheckElement) -> Result<(), CheckFailure> {
        let node = footer
            .find(locators::COPYRIGHT_YEAR)
            .await?
            .ok_or(CheckFailure::MissingElement {
                name: "copyright node",
            })?;

        let html = node.inner_html().await?;
        if !checks::copyright_spans_years(&html) {
            return Err(CheckFailure::CopyrightMismatch { html });
        }
        debug!("copyright markup spans the expected years");
        Ok(())
    }

    async fn verify_social_links(&self, footer: &OnlycheckElement) -> Result<usize, CheckFailure> {
        let links = footer.find_all(locators::SOCIAL_LINKS).await?;

        let mut hrefs = Vec::with_capacity(links.len());
        for link in &links {
            hrefs.push(link.attr("href").await?);
        }
        checks::require_social_links(&hrefs)?;

        debug!(count = hrefs.len(), "social links verified");
        Ok(hrefs.len())
    }

    async fn verify_privacy_link(&self, footer: &OnlycheckElement) -> Result<String, CheckFailure> {
        let link = footer
            .find(locators::PRIVACY_POLICY)
            .await?
            .ok_or(CheckFailure::MissingElement {
                name: "privacy policy link",
            })?;

        let href = link.attr("href").await?.unwrap_or_default();
        if !checks::href_is_pdf(&href) {
            return Err(CheckFailure::PrivacyLinkNotPdf { href });
        }
        debug!(href = %href, "privacy policy link verified");
        Ok(href)
    }
}
