use crate::config::types::{LinkEntry, MirrorConfig, OutputConfig, SiteConfig};
use crate::url::get_origin;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &MirrorConfig) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_output_config(&config.output)?;
    validate_links(&config.links)?;
    Ok(())
}

/// Validates the starting page
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    get_origin(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site url: {}", e)))?;

    if config.filename.trim().is_empty() {
        return Err(ConfigError::Validation(
            "site filename cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output path cannot be empty when set".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the link log
fn validate_links(links: &[LinkEntry]) -> Result<(), ConfigError> {
    for (index, link) in links.iter().enumerate() {
        if link.from.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "link #{} has an empty 'from'",
                index + 1
            )));
        }

        if link.href.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "link #{} has an empty 'href'",
                index + 1
            )));
        }

        if matches!(&link.filename, Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "link #{} has an empty 'filename'",
                index + 1
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> MirrorConfig {
        MirrorConfig {
            site: SiteConfig {
                url: "https://example.com/".to_string(),
                filename: "index.html".to_string(),
            },
            output: OutputConfig::default(),
            links: vec![LinkEntry {
                from: "https://example.com/".to_string(),
                href: "/css/site.css".to_string(),
                filename: None,
            }],
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&create_test_config()).is_ok());
    }

    #[test]
    fn test_invalid_site_url() {
        let mut config = create_test_config();
        config.site.url = "example.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_empty_site_filename() {
        let mut config = create_test_config();
        config.site.filename = "  ".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_output_path() {
        let mut config = create_test_config();
        config.output.path = Some(String::new());
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_link_fields() {
        let mut config = create_test_config();
        config.links[0].href = String::new();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        let mut config = create_test_config();
        config.links[0].from = String::new();
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));

        let mut config = create_test_config();
        config.links[0].filename = Some(String::new());
        assert!(matches!(validate(&config), Err(ConfigError::Validation(_))));
    }
}
