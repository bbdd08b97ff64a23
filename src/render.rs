//! HTML rendering of a profile page
//!
//! Templates use Tera syntax and are registered under `index.html`, so HTML
//! autoescaping is always on. The template context exposes:
//!
//! - `name`, `headline`, `avatar` (null when unset)
//! - `theme` with the eight colour slots
//! - `socials` and `links`, the two partitioned link lists

use crate::config::{SiteConfig, Theme};
use crate::registry::LinkRecord;
use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;
use tera::{Context, Tera};
use tracing::debug;

/// Template shipped with the binary
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/index.html");

const TEMPLATE_NAME: &str = "index.html";

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    name: &'a str,
    headline: &'a str,
    avatar: Option<&'a str>,
    theme: &'a Theme,
    socials: &'a [LinkRecord],
    links: &'a [LinkRecord],
}

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Renderer using the built-in template
    pub fn builtin() -> Result<Self> {
        Self::from_source(BUILTIN_TEMPLATE)
    }

    /// Renderer using template source held in memory
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Renderer using a template file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(format!(
                "Template not found: {}",
                path.display()
            )));
        }

        let source = std::fs::read_to_string(path).map_err(|e| Error::io_at(path, e))?;
        debug!("Parsing template {}", path.display());
        Self::from_source(&source)
    }

    pub fn render(&self, config: &SiteConfig) -> Result<String> {
        let registry = config.registry();
        let page = PageContext {
            name: registry.name(),
            headline: registry.headline(),
            avatar: config.params.avatar.as_deref(),
            theme: &config.params.theme,
            socials: registry.social_links(),
            links: registry.plain_links(),
        };

        let context = Context::from_serialize(&page)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LinkRegistry;
    use std::fs;
    use tempfile::TempDir;

    fn test_config() -> SiteConfig {
        SiteConfig::from_yaml_str(
            r#"params:
  name: "Test User"
  headline: "Test Headline"
  links:
    - title: GitHub
      href: https://github.com/test
      category: social
    - title: Website
      href: https://example.com
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_custom_template() {
        let renderer = Renderer::from_source(
            "<h1>{{ name }}</h1><p>{{ headline }}</p>\
             {% for s in socials %}<a class=\"s\">{{ s.title }}</a>{% endfor %}\
             {% for l in links %}<a class=\"l\">{{ l.title }}</a>{% endfor %}",
        )
        .unwrap();

        let html = renderer.render(&test_config()).unwrap();

        assert_eq!(
            html,
            "<h1>Test User</h1><p>Test Headline</p>\
             <a class=\"s\">GitHub</a><a class=\"l\">Website</a>"
        );
    }

    #[test]
    fn test_render_escapes_html() {
        let mut config = test_config();
        config.params.name = "<script>alert(1)</script>".to_string();

        let html = Renderer::from_source("{{ name }}").unwrap().render(&config).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_builtin_template_renders_builtin_profile() {
        let config = SiteConfig::from_registry(&LinkRegistry::builtin());
        let html = Renderer::builtin().unwrap().render(&config).unwrap();

        assert!(html.contains("<title>Victoria Cheng</title>"));
        assert!(html.contains("🌊 Software Developer | React"));
        assert!(html.contains("👋 🐧 Portfolio site 🐧 👋"));
        assert!(html.contains("background: #1f2937;"));
        assert!(!html.contains("class=\"avatar\""));

        let socials = html.find("class=\"socials\"").unwrap();
        let links = html.find("class=\"links\"").unwrap();
        let github = html.find("title=\"GitHub\"").unwrap();
        let hooks = html.find("React Hooks Series").unwrap();
        assert!(socials < github && github < links);
        assert!(links < hooks);
    }

    #[test]
    fn test_builtin_template_shows_avatar_and_icons() {
        let mut config = test_config();
        config.params.avatar = Some("static/avatar.jpg".to_string());
        config.params.links[0].icon = Some("static/icons/github.svg".to_string());

        let html = Renderer::builtin().unwrap().render(&config).unwrap();

        assert!(html.contains("class=\"avatar\""));
        assert!(html.contains("github.svg"));
    }

    #[test]
    fn test_from_file_missing_template() {
        let err = Renderer::from_file(Path::new("/nonexistent/index.html"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("index.html");
        fs::write(&path, "{% for x in %}").unwrap();

        let err = Renderer::from_file(&path).err().unwrap();
        assert!(matches!(err, Error::Template(_)));
    }
}
