//! Locators for the page regions under verification.
//!
//! Centralising them keeps maintenance in one place when the site's
//! hashed class names rotate.

use fantoccini::Locator;

/// Full-page loading overlay shown before the content is ready.
pub const PRELOADER: Locator<'static> = Locator::Css(".Preloader_root__YJpRG");

/// Text node of the cookie-consent banner.
pub const COOKIE_BANNER_TEXT: Locator<'static> =
    Locator::XPath("//*[contains(text(), 'By continuing to use the website')]");

/// The banner's accept control ("okay", any capitalisation).
pub const COOKIE_ACCEPT: Locator<'static> = Locator::XPath(
    "//button[normalize-space(translate(., 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz'))='okay']",
);

/// The page footer. The first one in document order wins.
pub const FOOTER: Locator<'static> = Locator::Css("footer");

/// Copyright year marker inside the footer.
pub const COPYRIGHT_YEAR: Locator<'static> = Locator::Css(".Footer_year__nyNCc");

/// Social-network anchors inside the footer.
pub const SOCIAL_LINKS: Locator<'static> = Locator::Css("a.SocialButton_root__MjR_H");

/// Privacy-policy anchor, matched by its visible link text.
pub const PRIVACY_POLICY: Locator<'static> = Locator::LinkText("Privacy policy");
