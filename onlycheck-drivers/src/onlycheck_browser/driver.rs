use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::info;
use webdriver::capabilities::Capabilities;

use super::page::OnlycheckPage;

/// How a browser session is launched.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// WebDriver endpoint (chromedriver).
    pub webdriver_url: String,
    pub headless: bool,
    /// Locale forced onto the browser; the checked strings are English.
    pub locale: String,
    /// Explicit window size; `None` starts the window maximized.
    pub window: Option<(u32, u32)>,
    /// Per-lookup floor the remote end applies to every element query.
    pub implicit_wait: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: false,
            locale: "en-US".to_string(),
            window: None,
            implicit_wait: Duration::from_secs(5),
        }
    }
}

/// Chrome command-line arguments for a session.
fn build_chrome_arguments(config: &SessionConfig) -> Vec<String> {
    let mut args = vec![format!("--lang={}", config.locale)];
    match config.window {
        Some((width, height)) => args.push(format!("--window-size={width},{height}")),
        None => args.push("--start-maximized".to_string()),
    }
    if config.headless {
        args.push("--headless=new".to_string());
        args.push("--disable-gpu".to_string());
    }
    args
}

/// W3C capabilities for a new session: the chrome arguments plus the
/// implicit lookup timeout.
fn session_capabilities(config: &SessionConfig) -> Capabilities {
    let mut caps = Capabilities::new();

    let mut chrome_opts = HashMap::new();
    chrome_opts.insert("args".to_string(), json!(build_chrome_arguments(config)));
    caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

    caps.insert(
        "timeouts".to_string(),
        json!({ "implicit": config.implicit_wait.as_millis() as u64 }),
    );

    caps
}

/// Thin wrapper around a `fantoccini` WebDriver client: one live browser
/// session, exclusively owned, closed exactly once.
pub struct OnlycheckDriver {
    pub client: Client,
}

impl OnlycheckDriver {
    /// Connect to a running WebDriver service and start a session.
    pub async fn launch(config: &SessionConfig) -> Result<Self> {
        let caps = session_capabilities(config);

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await
            .with_context(|| {
                format!("failed to start a session at {}", config.webdriver_url)
            })?;

        info!(
            url = %config.webdriver_url,
            headless = config.headless,
            locale = %config.locale,
            "browser session started"
        );
        Ok(Self { client })
    }

    /// Navigate to `url` and return a page wrapper for it.
    pub async fn open(&self, url: &str) -> Result<OnlycheckPage> {
        let page = OnlycheckPage::new(self.client.clone());
        page.goto(url).await?;
        Ok(page)
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<()> {
        self.client.close().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_is_always_forced() {
        let args = build_chrome_arguments(&SessionConfig::default());
        assert!(args.contains(&"--lang=en-US".to_string()));
    }

    #[test]
    fn maximized_by_default_explicit_size_overrides() {
        let args = build_chrome_arguments(&SessionConfig::default());
        assert!(args.contains(&"--start-maximized".to_string()));

        let sized = SessionConfig {
            window: Some((1280, 800)),
            ..Default::default()
        };
        let args = build_chrome_arguments(&sized);
        assert!(args.contains(&"--window-size=1280,800".to_string()));
        assert!(!args.contains(&"--start-maximized".to_string()));
    }

    #[test]
    fn headless_flags_only_when_requested() {
        let headed = build_chrome_arguments(&SessionConfig::default());
        assert!(!headed.iter().any(|a| a.starts_with("--headless")));

        let headless = SessionConfig {
            headless: true,
            ..Default::default()
        };
        let args = build_chrome_arguments(&headless);
        assert!(args.contains(&"--headless=new".to_string()));
        assert!(args.contains(&"--disable-gpu".to_string()));
    }

    #[test]
    fn implicit_timeout_lands_in_capabilities() {
        let caps = session_capabilities(&SessionConfig::default());
        assert_eq!(caps["timeouts"]["implicit"], json!(5000));
    }
}
