//! Site configuration loaded from `config.yml`
//!
//! The file carries everything the page needs: avatar, name, headline, theme
//! colours and the ordered link list. Links tagged with a category are shown
//! as social icons, the rest as plain link buttons.
//!
//! ```yaml
//! params:
//!   avatar: static/avatar.jpg
//!   name: Victoria Cheng
//!   headline: Software Developer
//!   theme:
//!     background: "#1f2937"
//!   links:
//!     - title: GitHub
//!       href: https://github.com/victoriacheng15
//!       category: social
//!       icon: static/icons/github.svg
//!     - title: Portfolio
//!       href: https://victoriacheng15.vercel.app
//! ```
//!
//! The older layout (`Params:` with PascalCase keys and separate `Socials`
//! and `Links` lists) loads as well. Its `Socials` entries are tagged as
//! social and placed ahead of the `links` list.

use crate::registry::{LinkRecord, LinkRegistry, SOCIAL_CATEGORY};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub mod theme;

pub use theme::Theme;

/// Default config file name, relative to the project root
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(alias = "Params")]
    pub params: Params,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    #[serde(default, alias = "Avatar", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Headline")]
    pub headline: String,
    #[serde(default, alias = "Theme")]
    pub theme: Theme,
    /// Social profiles listed separately, always treated as social links
    #[serde(default, alias = "Socials", skip_serializing_if = "Vec::is_empty")]
    pub socials: Vec<LinkRecord>,
    #[serde(default, alias = "Links")]
    pub links: Vec<LinkRecord>,
}

impl Params {
    /// Registry order: separately listed socials first, then `links`
    pub fn all_links(&self) -> Vec<LinkRecord> {
        self.socials
            .iter()
            .map(|record| {
                if record.is_social() {
                    record.clone()
                } else {
                    record.clone().with_category(SOCIAL_CATEGORY)
                }
            })
            .chain(self.links.iter().cloned())
            .collect()
    }
}

impl SiteConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        let config = Self::from_yaml_str(&content)?;
        debug!(
            "Loaded config from {}: {} link(s)",
            path.display(),
            config.params.socials.len() + config.params.links.len()
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Config carrying a registry's profile and the default theme
    pub fn from_registry(registry: &LinkRegistry) -> Self {
        Self {
            params: Params {
                avatar: None,
                name: registry.name().to_string(),
                headline: registry.headline().to_string(),
                theme: Theme::default(),
                socials: Vec::new(),
                links: registry.records().to_vec(),
            },
        }
    }

    /// Partition the configured links
    pub fn registry(&self) -> LinkRegistry {
        LinkRegistry::new(
            self.params.name.clone(),
            self.params.headline.clone(),
            self.params.all_links(),
        )
    }

    /// Check the content rules a registry itself never enforces
    pub fn validate(&self) -> Result<()> {
        if self.params.name.trim().is_empty() {
            return Err(Error::Validation("params.name must not be empty".into()));
        }

        for (index, link) in self.params.all_links().iter().enumerate() {
            validate_link(index, link)?;
        }

        self.params.theme.validate()
    }
}

fn validate_link(index: usize, link: &LinkRecord) -> Result<()> {
    if link.title.trim().is_empty() {
        return Err(Error::Validation(format!(
            "params.links[{index}]: title must not be empty"
        )));
    }

    if link.href.trim().is_empty() {
        return Err(Error::Validation(format!(
            "params.links[{index}] ({}): href must not be empty",
            link.title
        )));
    }

    url::Url::parse(&link.href).map_err(|e| {
        Error::Validation(format!(
            "params.links[{index}] ({}): invalid href {:?}: {e}",
            link.title, link.href
        ))
    })?;

    Ok(())
}
