//! Link registry for a profile page
//!
//! A [`LinkRegistry`] owns a display name, a headline and an ordered list of
//! [`LinkRecord`]s. At construction the records are split once into two views:
//! social links (records carrying a category) and plain links (everything
//! else). Both views keep the registry order.
//!
//! # Examples
//!
//! ```rust
//! use linkpage::registry::LinkRegistry;
//!
//! let registry = LinkRegistry::builtin();
//! assert_eq!(registry.name(), "Victoria Cheng");
//! assert_eq!(registry.social_links().len(), 5);
//! assert_eq!(registry.plain_links().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Category tag used for social profile links
pub const SOCIAL_CATEGORY: &str = "social";

/// One external link
///
/// The PascalCase aliases accept the older `Socials`/`Links` entry shapes
/// (`Platform`/`Name` for the title, `URL` for the href).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    #[serde(alias = "Title", alias = "Name", alias = "Platform")]
    pub title: String,
    #[serde(alias = "Href", alias = "URL")]
    pub href: String,
    #[serde(default, alias = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Icon asset shown next to social links
    #[serde(default, alias = "Icon", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl LinkRecord {
    /// Create a link without a category
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            category: None,
            icon: None,
        }
    }

    /// Create a link tagged with the social category
    pub fn social(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(title, href).with_category(SOCIAL_CATEGORY)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// True when the category holds a non-empty value.
    ///
    /// An empty category counts as no category; any other value, whitespace
    /// included, is kept as a category.
    pub fn is_social(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|category| !category.is_empty())
    }
}

/// Immutable profile data with its partitioned link views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRegistry {
    name: String,
    headline: String,
    records: Vec<LinkRecord>,
    socials: Vec<LinkRecord>,
    links: Vec<LinkRecord>,
}

impl LinkRegistry {
    pub fn new(
        name: impl Into<String>,
        headline: impl Into<String>,
        records: Vec<LinkRecord>,
    ) -> Self {
        let (socials, links) = partition_links(&records);

        Self {
            name: name.into(),
            headline: headline.into(),
            records,
            socials,
            links,
        }
    }

    /// The profile shipped with the binary
    pub fn builtin() -> Self {
        Self::new(
            "Victoria Cheng",
            "🌊 Software Developer | React | TypeScript | Node.js | MongoDB | Docker | JavaScript",
            vec![
                LinkRecord::social("GitHub", "https://github.com/victoriacheng15"),
                LinkRecord::social("LinkedIn", "https://www.linkedin.com/in/victoriacheng15/"),
                LinkRecord::social("Twitter", "https://twitter.com/viktoriacheng15"),
                LinkRecord::social("YouTube", "https://www.youtube.com/@victoriacheng15"),
                LinkRecord::social(
                    "Buy me a coffee",
                    "https://www.buymeacoffee.com/victoriacheng15",
                ),
                LinkRecord::new(
                    "👋 🐧 Portfolio site 🐧 👋",
                    "https://victoriacheng15.vercel.app",
                ),
                LinkRecord::new(
                    "React Hooks Series",
                    "https://victoriacheng15.vercel.app/tags/react-hooks",
                ),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Headline text, returned verbatim
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Every record in registry order
    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    /// Records with a category, in registry order
    pub fn social_links(&self) -> &[LinkRecord] {
        &self.socials
    }

    /// Records without a category, in registry order
    pub fn plain_links(&self) -> &[LinkRecord] {
        &self.links
    }
}

/// Stable single-pass split into (social, plain)
pub fn partition_links(records: &[LinkRecord]) -> (Vec<LinkRecord>, Vec<LinkRecord>) {
    records.iter().cloned().partition(LinkRecord::is_social)
}
