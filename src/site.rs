//! Site build pipeline: load config, render `index.html`, copy static assets

use crate::assets;
use crate::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use crate::render::Renderer;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TEMPLATE_FILE: &str = "template/index.html";
pub const DEFAULT_STATIC_DIR: &str = "template/static";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const OUTPUT_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub config_path: PathBuf,
    /// `None` uses the built-in template
    pub template_path: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// `None` skips asset copying
    pub static_src: Option<PathBuf>,
    pub static_dst: PathBuf,
}

impl BuildOptions {
    /// Conventional layout rooted at `root`.
    ///
    /// The template and static directory are only picked up when present.
    pub fn for_project(root: &Path) -> Self {
        let template = root.join(DEFAULT_TEMPLATE_FILE);
        let static_src = root.join(DEFAULT_STATIC_DIR);
        let output_dir = root.join(DEFAULT_OUTPUT_DIR);

        Self {
            config_path: root.join(DEFAULT_CONFIG_FILE),
            template_path: template.is_file().then_some(template),
            static_dst: output_dir.join("static"),
            output_dir,
            static_src: static_src.is_dir().then_some(static_src),
        }
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE)
    }
}

/// Outcome of a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_file: PathBuf,
    pub social_count: usize,
    pub link_count: usize,
    pub assets_copied: usize,
}

pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    create_dir(&options.output_dir)?;
    create_dir(&options.static_dst)?;

    let config = SiteConfig::load(&options.config_path).map_err(|e| Error::ConfigLoad {
        path: options.config_path.clone(),
        source: Box::new(e),
    })?;
    config.validate()?;

    let renderer = match &options.template_path {
        Some(path) => Renderer::from_file(path)?,
        None => {
            debug!("No template given, using built-in template");
            Renderer::builtin()?
        }
    };

    let html = renderer.render(&config)?;
    let output_file = options.output_file();
    fs::write(&output_file, html).map_err(|e| Error::io_at(&output_file, e))?;
    info!("Rendered {}", output_file.display());

    let assets_copied = match &options.static_src {
        Some(src) => assets::copy_dir(src, &options.static_dst)?,
        None => 0,
    };
    debug!("Copied {} static file(s)", assets_copied);

    let registry = config.registry();
    Ok(BuildReport {
        output_file,
        social_count: registry.social_links().len(),
        link_count: registry.plain_links().len(),
        assets_copied,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io_at(path, e))
}
