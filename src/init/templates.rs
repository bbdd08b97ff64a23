use crate::config::SiteConfig;
use crate::registry::LinkRegistry;
use crate::render::BUILTIN_TEMPLATE;

/// A file written into a new project
pub struct ScaffoldFile {
    pub path: &'static str,
    pub content: String,
    pub description: &'static str,
}

/// Files of a starter project, seeded with the built-in profile
pub fn get_all_templates() -> crate::Result<Vec<ScaffoldFile>> {
    let config = SiteConfig::from_registry(&LinkRegistry::builtin()).to_yaml_string()?;

    Ok(vec![
        ScaffoldFile {
            path: crate::config::DEFAULT_CONFIG_FILE,
            content: config,
            description: "profile, theme and links",
        },
        ScaffoldFile {
            path: crate::site::DEFAULT_TEMPLATE_FILE,
            content: BUILTIN_TEMPLATE.to_string(),
            description: "page template",
        },
        ScaffoldFile {
            path: "template/static/.gitkeep",
            content: String::new(),
            description: "static assets directory",
        },
    ])
}
