//! Configuration validation.
//!
//! Tag elements are checked when the token table is built; everything that
//! ends up in an attribute or a palette lookup is checked here.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("links.target must not be empty")]
    EmptyLinkTarget,
    #[error("links.target contains characters not allowed in an attribute: '{0}'")]
    InvalidLinkTarget(String),
    #[error("links.channel_route must start with '/', got '{0}'")]
    RouteNotAbsolute(String),
    #[error("links.channel_route contains characters not allowed in a URL: '{0}'")]
    InvalidChannelRoute(String),
    #[error("palette code must be 1-3 digits, got '{0}'")]
    InvalidPaletteCode(String),
    #[error("palette class for '{code}' is not a usable CSS class: '{class}'")]
    InvalidPaletteClass { code: String, class: String },
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Link attributes
    let target = &config.links.target;
    if target.is_empty() {
        errors.push(ValidationError::EmptyLinkTarget);
    } else if !is_attribute_safe(target) || target.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidLinkTarget(target.clone()));
    }

    let route = &config.links.channel_route;
    if !route.starts_with('/') {
        errors.push(ValidationError::RouteNotAbsolute(route.clone()));
    } else if !is_attribute_safe(route) || route.contains(char::is_whitespace) {
        errors.push(ValidationError::InvalidChannelRoute(route.clone()));
    }

    // Palette
    for (code, class) in &config.palette {
        if code.is_empty() || code.len() > 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            errors.push(ValidationError::InvalidPaletteCode(code.clone()));
        }
        if !is_class_name(class) {
            errors.push(ValidationError::InvalidPaletteClass {
                code: code.clone(),
                class: class.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_attribute_safe(value: &str) -> bool {
    !value
        .chars()
        .any(|c| matches!(c, '"' | '<' | '>' | '&') || c.is_control())
}

// Background classes are built by prefixing `bg-`, so one name only
fn is_class_name(value: &str) -> bool {
    !value.is_empty() && !value.contains(char::is_whitespace) && is_attribute_safe(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(toml: &str) -> Config {
        toml.parse().unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_link_target() {
        let errors = validate(&config("[links]\ntarget = \"\"")).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyLinkTarget]);

        let errors = validate(&config("[links]\ntarget = '_blank\" onclick'")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidLinkTarget(_)));
    }

    #[test]
    fn test_bad_channel_route() {
        let errors = validate(&config("[links]\nchannel_route = \"#!/\"")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RouteNotAbsolute("#!/".to_string())]
        );

        let errors = validate(&config("[links]\nchannel_route = '/a\"b/'")).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidChannelRoute(_)));
    }

    #[test]
    fn test_palette_entries() {
        let toml = r#"
[palette]
"99" = "pink"
"1234" = "x"
"ab" = "y"
"5" = "  "
"#;
        let errors = validate(&config(toml)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::InvalidPaletteCode("1234".into())));
        assert!(errors.contains(&ValidationError::InvalidPaletteCode("ab".into())));
        assert!(errors.contains(&ValidationError::InvalidPaletteClass {
            code: "5".into(),
            class: "  ".into(),
        }));
    }

    #[test]
    fn test_palette_class_is_single_name() {
        let errors = validate(&config("[palette]\n\"4\" = \"dark red\"")).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidPaletteClass {
                code: "4".into(),
                class: "dark red".into(),
            }]
        );
        assert!(validate(&config("[palette]\n\"4\" = \"dark-red\"")).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let toml = r#"
[links]
target = ""
channel_route = "x"
"#;
        let errors = validate(&config(toml)).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
