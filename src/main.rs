use anyhow::Context;
use clap::{Parser, Subcommand};
use linkpage::config::{SiteConfig, DEFAULT_CONFIG_FILE};
use linkpage::init::command::InitCommand;
use linkpage::registry::{LinkRecord, LinkRegistry};
use linkpage::site::BuildOptions;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

/// Build a single-page link site from a YAML profile
#[derive(Parser)]
#[command(name = "linkpage")]
#[command(about = "Link page builder - render your profile and links to static HTML", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site (default command)
    Build {
        /// Path to configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Page template (default: template/index.html, or the built-in one)
        #[arg(short = 't', long)]
        template: Option<PathBuf>,

        /// Output directory
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Static assets to copy into <output>/static
        #[arg(short = 's', long)]
        static_dir: Option<PathBuf>,
    },
    /// Print the profile and its partitioned links
    Show {
        /// Path to configuration file (default: config.yml, or the built-in profile)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a starter project
    Init(InitCommand),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // LINKPAGE_LOG_LEVEL wins over RUST_LOG, which wins over -v
    let env_filter = EnvFilter::try_from_env("LINKPAGE_LOG_LEVEL")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("linkpage started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Some(Commands::Build {
            config,
            template,
            output,
            static_dir,
        }) => run_build(config, template, output, static_dir),
        Some(Commands::Show { config, json }) => run_show(config, json),
        Some(Commands::Init(cmd)) => linkpage::init::run(cmd).map(|_| ()),
        None => run_build(None, None, None, None),
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_build(
    config: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut options = BuildOptions::for_project(Path::new("."));
    if let Some(config) = config {
        options.config_path = config;
    }
    if template.is_some() {
        options.template_path = template;
    }
    if let Some(output) = output {
        options.static_dst = output.join("static");
        options.output_dir = output;
    }
    if static_dir.is_some() {
        options.static_src = static_dir;
    }
    debug!("Build options: {:?}", options);

    let report = linkpage::site::build_site(&options).context("error building site")?;

    println!(
        "Build complete: {} ({} social, {} links, {} static file(s))",
        report.output_file.display(),
        report.social_count,
        report.link_count,
        report.assets_copied
    );
    Ok(())
}

#[derive(Serialize)]
struct Profile<'a> {
    name: &'a str,
    headline: &'a str,
    avatar: Option<&'a str>,
    socials: &'a [LinkRecord],
    links: &'a [LinkRecord],
}

fn run_show(config: Option<PathBuf>, json: bool) -> anyhow::Result<()> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let site = match config {
        Some(path) => SiteConfig::load(&path)?,
        None if default_path.is_file() => SiteConfig::load(&default_path)?,
        None => {
            debug!("No {} found, showing built-in profile", DEFAULT_CONFIG_FILE);
            SiteConfig::from_registry(&LinkRegistry::builtin())
        }
    };
    let registry = site.registry();

    if json {
        let profile = Profile {
            name: registry.name(),
            headline: registry.headline(),
            avatar: site.params.avatar.as_deref(),
            socials: registry.social_links(),
            links: registry.plain_links(),
        };
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("Name: {}", registry.name());
    println!("Headline: {}", registry.headline());
    if let Some(avatar) = &site.params.avatar {
        println!("Avatar: {avatar}");
    }
    println!("Theme background: {}", site.params.theme.background);
    println!("Socials: {}", registry.social_links().len());
    for link in registry.social_links() {
        println!("  - {} <{}>", link.title, link.href);
    }
    println!("Links: {}", registry.plain_links().len());
    for link in registry.plain_links() {
        println!("  - {} <{}>", link.title, link.href);
    }
    Ok(())
}
