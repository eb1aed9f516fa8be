//! Driver layer for browser automation.
//!
//! This crate exposes the WebDriver session wrapper and the page/element
//! helpers the footer checks are built on: session lifecycle with a
//! fixed locale, bounded-polling waits, and script-backed scrolling and
//! DOM surgery.
//!
//! - [`onlycheck_browser::driver::OnlycheckDriver`]: WebDriver client wrapper
//! - [`onlycheck_browser::page::OnlycheckPage`]: DOM queries and explicit waits
//! - [`onlycheck_browser::wait::WaitSpec`]: bounded-polling wait policy
pub mod onlycheck_browser;
