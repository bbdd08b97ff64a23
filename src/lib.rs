//! # linkpage
//!
//! Build a single-page "link in bio" site from a YAML profile.
//!
//! ## Usage
//!
//! ```bash
//! linkpage init                 # starter config.yml and template
//! linkpage build [-c config.yml] [-t template/index.html] [-o dist]
//! linkpage show [--json]
//! ```
//!
//! ## Modules
//!
//! - `registry` - Ordered link records split into social and plain views
//! - `config` - `config.yml` loading and validation, theme colours
//! - `render` - Tera rendering of the page
//! - `assets` - Static asset copying
//! - `site` - Build pipeline tying config, rendering and assets together
//! - `init` - Starter project scaffolding
pub mod assets;
pub mod config;
pub mod error;
pub mod init;
pub mod registry;
pub mod render;
pub mod site;

pub use error::{Error, Result};
