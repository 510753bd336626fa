//! API configuration for frontend-backend communication
//!
//! The backend serves the app either at the domain root or under a path
//! prefix (`/DiscountChecker` in production), so every request URL is
//! built from an explicit prefix instead of a free-floating global.

/// URL-prefix configuration, created once at startup and passed to the
/// component tree via context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiConfig {
    prefix: String,
}

impl ApiConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Read the active prefix from the `data-url-prefix` attribute on
    /// `<body>`. Empty when the attribute (or the window) is absent.
    pub fn from_document() -> Self {
        let prefix = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-url-prefix"))
            .unwrap_or_default();
        Self { prefix }
    }

    /// Build a full request URL from a path
    ///
    /// # Example
    /// ```rust
    /// use frontend::shared::api_utils::ApiConfig;
    ///
    /// let config = ApiConfig::new("/DiscountChecker");
    /// assert_eq!(config.api_url("/remove_row"), "/DiscountChecker/remove_row");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }
}
