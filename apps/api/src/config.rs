use anyhow::{Context, Result};

use crate::models::layout::StyleVariant;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a malformed PORT fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Style used when a render request names none.
    pub default_style: StyleVariant,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_style: std::env::var("DEFAULT_STYLE")
                .map(|id| parse_default_style(&id))
                .unwrap_or(StyleVariant::DEFAULT),
        })
    }
}

/// Unknown ids fall back to the default variant rather than failing startup.
fn parse_default_style(id: &str) -> StyleVariant {
    StyleVariant::from_id(id).unwrap_or_else(|| {
        tracing::warn!(
            "DEFAULT_STYLE '{id}' is not a known style; using {}",
            StyleVariant::DEFAULT.as_str()
        );
        StyleVariant::DEFAULT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_style_known() {
        assert_eq!(parse_default_style("executive"), StyleVariant::Executive);
        assert_eq!(parse_default_style(" Modern-Two "), StyleVariant::ModernTwo);
    }

    #[test]
    fn test_parse_default_style_unknown_falls_back() {
        assert_eq!(parse_default_style("glitter"), StyleVariant::ModernPro);
        assert_eq!(parse_default_style(""), StyleVariant::ModernPro);
    }
}
