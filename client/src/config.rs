//! Shell configuration shared by the server render and browser hydration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server decides the configuration (from its environment) and provides
//! it as Leptos context during SSR. The HTML shell mirrors it into a `<meta>`
//! tag, and the hydrate entry point reads that tag back so both sides render
//! the same tree.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `<meta name=...>` carrying the not-found policy into the browser.
pub const NOT_FOUND_META_NAME: &str = "patient-app-not-found";

/// What the content region shows for a path with no route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Render nothing in the content region.
    #[default]
    Blank,
    /// Render a dedicated "Page not found." view.
    Page,
}

impl NotFoundPolicy {
    /// Parse a policy name (`blank` or `page`, case-insensitive).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blank" => Some(Self::Blank),
            "page" => Some(Self::Page),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Page => "page",
        }
    }
}

/// Shell-level configuration provided via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellConfig {
    pub not_found: NotFoundPolicy,
}

impl ShellConfig {
    /// Build from the `<meta>` content attribute; unknown or missing values
    /// fall back to the default.
    #[must_use]
    pub fn from_meta_content(content: Option<&str>) -> Self {
        let not_found = content.and_then(NotFoundPolicy::parse).unwrap_or_default();
        Self { not_found }
    }

    /// Read the configuration the server wrote into the document head.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{NOT_FOUND_META_NAME}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.get_attribute("content"));
        Self::from_meta_content(content.as_deref())
    }
}
