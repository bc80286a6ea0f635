use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagesenseError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Invalid selector: {0}")]
    SelectorError(String),

    #[error("Renderer error: {0}")]
    RenderError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PagesenseError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            PagesenseError::HttpError(_) => Some(
                "Check that the URL is reachable and your internet connection is up.\nSome sites block plain HTTP clients - try again with --js",
            ),
            PagesenseError::UrlParseError(_) => Some(
                "Provide a full URL including the scheme, e.g. https://example.com",
            ),
            PagesenseError::SelectorError(_) => Some(
                "Check the CSS selector syntax, e.g. --selector \".article p\"",
            ),
            PagesenseError::RenderError(_) => Some(
                "Run `pagesense doctor` to check the rendering setup.\nInstall the browser with: npx playwright install chromium",
            ),
            PagesenseError::ConfigError(_) => Some(
                "Check the config file syntax (run `pagesense doctor` to see its location)",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PagesenseError>;
