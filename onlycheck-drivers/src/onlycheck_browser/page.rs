use anyhow::{Context, Result};
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tokio::time::{sleep, Instant};
use tracing::debug;

use super::wait::WaitSpec;

/// DOM-query surface over one live browser session.
///
/// The explicit waits are bounded polling loops. An element that never
/// shows up within the budget comes back as `None`/`false`, never as an
/// error, so the caller keeps the decision of whether absence is fatal.
pub struct OnlycheckPage {
    client: Client,
}

impl OnlycheckPage {
    /// Construct a page wrapper around an existing WebDriver client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Navigate to `url`.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.client
            .goto(url)
            .await
            .with_context(|| format!("navigation to {url} failed"))?;
        Ok(())
    }

    /// First element matching `locator`, or `None` when nothing matches.
    pub async fn find(&self, locator: Locator<'_>) -> Result<Option<OnlycheckElement>> {
        match self.client.find(locator).await {
            Ok(element) => Ok(Some(OnlycheckElement::new(element))),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Poll until `locator` resolves to an element present in the DOM.
    pub async fn wait_for_present(
        &self,
        locator: Locator<'_>,
        wait: WaitSpec,
    ) -> Result<Option<OnlycheckElement>> {
        let deadline = Instant::now() + wait.timeout;
        loop {
            if let Some(element) = self.find(locator).await? {
                return Ok(Some(element));
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            sleep(wait.interval).await;
        }
    }

    /// Poll until `locator` resolves to a displayed element.
    pub async fn wait_for_visible(
        &self,
        locator: Locator<'_>,
        wait: WaitSpec,
    ) -> Result<Option<OnlycheckElement>> {
        let deadline = Instant::now() + wait.timeout;
        loop {
            if let Some(element) = self.find(locator).await? {
                if element.is_displayed().await? {
                    return Ok(Some(element));
                }
            }
            if Instant::now() >= deadline {
                return Ok(None);
            }
            sleep(wait.interval).await;
        }
    }

    /// Poll until `locator` resolves to an absent or undisplayed node.
    /// Returns `false` when the node is still visible at the deadline.
    ///
    /// Lookup errors while the page is still settling count as "not gone
    /// yet" and re-poll; the deadline bounds them.
    pub async fn wait_for_gone(&self, locator: Locator<'_>, wait: WaitSpec) -> Result<bool> {
        let deadline = Instant::now() + wait.timeout;
        loop {
            match self.client.find(locator).await {
                Err(e) if e.is_no_such_element() => return Ok(true),
                Ok(element) => match element.is_displayed().await {
                    Ok(false) => return Ok(true),
                    Ok(true) => {}
                    // The node can be detached between the lookup and the
                    // displayed query; that still counts as progress.
                    Err(e) => debug!(error = %e, "displayed query failed mid-wait"),
                },
                Err(e) => debug!(error = %e, "lookup failed mid-wait"),
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(wait.interval).await;
        }
    }

    /// Poll visibility of an element already in hand. Returns `false`
    /// when it is still undisplayed at the deadline.
    pub async fn wait_until_displayed(
        &self,
        element: &OnlycheckElement,
        wait: WaitSpec,
    ) -> Result<bool> {
        let deadline = Instant::now() + wait.timeout;
        loop {
            if element.is_displayed().await? {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            sleep(wait.interval).await;
        }
    }

    /// Scroll `element` to the vertical center of the viewport.
    pub async fn scroll_into_center(&self, element: &OnlycheckElement) -> Result<()> {
        self.execute_on("arguments[0].scrollIntoView({block: 'center'});", element)
            .await
    }

    /// Remove `element`'s parent node from the page. Used to dismiss the
    /// cookie banner without going through its accept control.
    pub async fn remove_parent(&self, element: &OnlycheckElement) -> Result<()> {
        self.execute_on("arguments[0].parentNode.remove();", element)
            .await
    }

    async fn execute_on(&self, script: &str, element: &OnlycheckElement) -> Result<()> {
        let target = serde_json::to_value(&element.element)?;
        self.client
            .execute(script, vec![target])
            .await
            .context("script execution failed")?;
        Ok(())
    }
}

/// Wrapper for DOM elements; lookups on it are scoped to its subtree.
#[derive(Clone)]
pub struct OnlycheckElement {
    pub element: Element,
}

impl OnlycheckElement {
    /// Construct an element wrapper.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// First descendant matching `locator`, or `None`.
    pub async fn find(&self, locator: Locator<'_>) -> Result<Option<OnlycheckElement>> {
        match self.element.find(locator).await {
            Ok(element) => Ok(Some(OnlycheckElement::new(element))),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All descendants matching `locator`, in document order.
    pub async fn find_all(&self, locator: Locator<'_>) -> Result<Vec<OnlycheckElement>> {
        let elements = self.element.find_all(locator).await?;
        Ok(elements.into_iter().map(OnlycheckElement::new).collect())
    }

    /// The element's raw inner markup.
    pub async fn inner_html(&self) -> Result<String> {
        Ok(self.element.html(true).await?)
    }

    /// Read an attribute value; `None` when the attribute is absent.
    pub async fn attr(&self, name: &str) -> Result<Option<String>> {
        Ok(self.element.attr(name).await?)
    }

    /// Whether the browser currently considers the element displayed.
    pub async fn is_displayed(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await?)
    }
}
