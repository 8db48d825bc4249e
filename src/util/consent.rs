//! Cookie-consent marker persistence.
//!
//! Reads and writes the long-lived consent cookie that suppresses the
//! consent banner. Presence alone gates visibility: the value carries no
//! signature or versioning. Browser-only; native builds see no marker.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

/// Name of the persisted consent marker.
pub const CONSENT_COOKIE_NAME: &str = "apqlikcoreaccept";

/// Fixed far-future expiry for the consent marker.
#[cfg(any(test, feature = "csr"))]
const CONSENT_COOKIE_EXPIRY: &str = "Sat, 01 Jan 2050 00:00:00 GMT";

/// Whether a `document.cookie` header string carries the consent marker.
pub fn has_consent_marker(cookie_header: &str) -> bool {
    cookie_header.contains(CONSENT_COOKIE_NAME)
}

/// The exact cookie string written on acceptance.
#[cfg(any(test, feature = "csr"))]
fn consent_cookie_string() -> String {
    format!("{CONSENT_COOKIE_NAME}=true; expires={CONSENT_COOKIE_EXPIRY}; path=/")
}

/// Read the persisted consent marker for this page load.
pub fn read_consent() -> bool {
    #[cfg(feature = "csr")]
    {
        html_document()
            .and_then(|doc| doc.cookie().ok())
            .is_some_and(|cookies| has_consent_marker(&cookies))
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Persist the consent marker. Writing it again is harmless: the browser
/// replaces the cookie with identical name, value, path, and expiry.
pub fn write_consent_marker() {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&consent_cookie_string());
        }
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into().ok()
}
