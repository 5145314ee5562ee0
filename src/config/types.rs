//! Core configuration types and loading.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use ircfmt_proto::{Palette, TableError, TagKind, TagStyle, TagStyles};

use super::defaults::{default_channel_route, default_link_target, default_true};
use super::validation::ValidationError;
use crate::links::LinkOptions;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid tag style: {0}")]
    Table(#[from] TableError),
    #[error(
        "invalid config: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid(Vec<ValidationError>),
}

/// Formatter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Element overrides for the toggle tags.
    #[serde(default)]
    pub tags: TagsConfig,
    /// Extra or replacement palette entries, code to CSS class.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    /// Link detection.
    #[serde(default)]
    pub links: LinksConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Config = content.parse()?;
        tracing::info!(
            path = %path.display(),
            palette = config.palette.len(),
            "Loaded formatter config"
        );
        Ok(config)
    }

    /// Tag styles with the configured overrides applied.
    pub fn tag_styles(&self) -> TagStyles {
        let mut styles = TagStyles::default();
        for (kind, tag) in self.tags.iter() {
            styles.set(kind, tag.to_style());
        }
        styles
    }

    /// The mIRC palette with the configured entries applied.
    pub fn palette(&self) -> Palette {
        let mut palette = Palette::default();
        for (code, class) in &self.palette {
            palette.insert(code.as_str(), class.as_str());
        }
        palette
    }

    /// Link options as configured.
    pub fn link_options(&self) -> LinkOptions {
        LinkOptions {
            urls: self.links.urls,
            channels: self.links.channels,
            target: self.links.target.clone(),
            channel_route: self.links.channel_route.clone(),
        }
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Per-tag element overrides. Unset tags keep their default element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsConfig {
    pub bold: Option<TagConfig>,
    pub monospace: Option<TagConfig>,
    pub inverse: Option<TagConfig>,
    pub italic: Option<TagConfig>,
    pub underline: Option<TagConfig>,
}

impl TagsConfig {
    /// Configured overrides, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TagKind, &TagConfig)> {
        [
            (TagKind::Bold, &self.bold),
            (TagKind::Monospace, &self.monospace),
            (TagKind::Inverse, &self.inverse),
            (TagKind::Italic, &self.italic),
            (TagKind::Underline, &self.underline),
        ]
        .into_iter()
        .filter_map(|(kind, tag)| tag.as_ref().map(|tag| (kind, tag)))
    }
}

/// HTML element for one toggle tag.
#[derive(Debug, Clone, Deserialize)]
pub struct TagConfig {
    /// Element name (e.g. "strong").
    pub element: String,
    /// Optional class attribute.
    pub class: Option<String>,
}

impl TagConfig {
    fn to_style(&self) -> TagStyle {
        let style = TagStyle::new(self.element.as_str());
        match &self.class {
            Some(class) => style.with_class(class.as_str()),
            None => style,
        }
    }
}

/// Link detection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    /// Wrap URLs in anchors (default: true).
    #[serde(default = "default_true")]
    pub urls: bool,
    /// Wrap `#channel` mentions in anchors (default: true).
    #[serde(default = "default_true")]
    pub channels: bool,
    /// `target` of URL anchors (default: "_blank").
    #[serde(default = "default_link_target")]
    pub target: String,
    /// Path prefix of channel links (default: "/#!/").
    #[serde(default = "default_channel_route")]
    pub channel_route: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            urls: default_true(),
            channels: default_true(),
            target: default_link_target(),
            channel_route: default_channel_route(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.tag_styles(), TagStyles::default());
        assert_eq!(config.palette(), Palette::default());
        assert_eq!(config.link_options(), LinkOptions::default());
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
[tags.bold]
element = "strong"

[tags.inverse]
element = "span"
class = "reverse"

[palette]
"16" = "brown"
"4" = "crimson"

[links]
channels = false
target = "_self"
"#;
        let config: Config = toml.parse().unwrap();

        let styles = config.tag_styles();
        assert_eq!(styles.get(TagKind::Bold), &TagStyle::new("strong"));
        assert_eq!(
            styles.get(TagKind::Inverse),
            &TagStyle::new("span").with_class("reverse")
        );
        assert_eq!(styles.get(TagKind::Italic), &TagStyle::new("i"));

        let palette = config.palette();
        assert_eq!(palette.class("16"), Some("brown"));
        assert_eq!(palette.class("4"), Some("crimson"));
        assert_eq!(palette.class("04"), Some("red"));

        let links = config.link_options();
        assert!(links.urls);
        assert!(!links.channels);
        assert_eq!(links.target, "_self");
        assert_eq!(links.channel_route, "/#!/");
    }

    #[test]
    fn test_parse_error() {
        let err = "[links]\nurls = \"yes\"".parse::<Config>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
