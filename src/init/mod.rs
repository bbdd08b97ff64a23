//! Project scaffolding
//!
//! `linkpage init` writes a starter project seeded with the built-in profile:
//!
//! - `config.yml` - name, headline, theme and links
//! - `template/index.html` - the default page template
//! - `template/static/` - directory for the avatar and icons
//!
//! Existing files are kept unless `--force` is given.
//!
//! # Examples
//!
//! ```rust
//! use linkpage::init::{run, command::InitCommand};
//! use std::path::PathBuf;
//!
//! # fn example() -> anyhow::Result<()> {
//! let cmd = InitCommand {
//!     force: false,
//!     path: Some(PathBuf::from("/path/to/site")),
//! };
//!
//! run(cmd)?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod templates;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::init::command::InitCommand;

/// Files written and skipped by an init run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Write a single scaffold file, returning false when it was kept as-is
fn install_file(
    target_dir: &Path,
    template: &templates::ScaffoldFile,
    force: bool,
) -> Result<bool> {
    let file_path = target_dir.join(template.path);

    if file_path.exists() && !force {
        println!(
            "⚠️  {} already exists. Use --force to overwrite.",
            template.path
        );
        return Ok(false);
    }

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&file_path, &template.content)
        .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

    println!("✅ Created {} ({})", template.path, template.description);
    Ok(true)
}

/// Display summary and next steps
fn display_summary(report: &InitReport, target_dir: &Path) {
    println!("\n✨ Initialization complete!");
    println!("   - {} file(s) written", report.written.len());
    if !report.skipped.is_empty() {
        println!("   - {} file(s) skipped", report.skipped.len());
    }

    if !report.written.is_empty() {
        println!("\n📚 Next steps:");
        println!(
            "   1. Edit {}",
            target_dir.join(crate::config::DEFAULT_CONFIG_FILE).display()
        );
        println!("   2. Drop your avatar and icons into template/static/");
        println!("   3. Run 'linkpage build' to generate dist/index.html");
    }
}

/// Run the init command
pub fn run(cmd: InitCommand) -> Result<InitReport> {
    let target_dir = cmd.path.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    println!("🚀 Initializing link page in: {}", target_dir.display());

    let mut report = InitReport::default();
    for template in templates::get_all_templates()? {
        let path = target_dir.join(template.path);
        if install_file(&target_dir, &template, cmd.force)? {
            report.written.push(path);
        } else {
            report.skipped.push(path);
        }
    }
    debug!(
        "Init wrote {} file(s), skipped {}",
        report.written.len(),
        report.skipped.len()
    );

    display_summary(&report, &target_dir);
    Ok(report)
}
