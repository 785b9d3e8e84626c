use anyhow::{Context, Result};
use binder_config::Config;
use binder_engine::{
    CompileOptions, DelimiterPolicy, EntryTemplate, Header, LinkRecord, SourceFile, compile_file,
    create_entry, write_fragment,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(
    name = "binder",
    version,
    about = "Compile binder documents to HTML fragments"
)]
struct Cli {
    /// Config file to use instead of ~/.config/binder/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile one document and print (or write) its HTML fragment
    Compile(CompileArgs),

    /// Print a document's header and discovered links as TOML
    Links(LinksArgs),

    /// Create a new, empty document with a fresh header
    Entry(EntryArgs),
}

#[derive(clap::Args)]
struct CompileArgs {
    /// Source document (.bndr)
    file: PathBuf,

    /// Write <name>.html into this directory instead of printing
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// End the body at a second `---` line
    #[arg(long)]
    truncate: bool,
}

#[derive(clap::Args)]
struct LinksArgs {
    /// Source document (.bndr)
    file: PathBuf,

    /// End the body at a second `---` line
    #[arg(long)]
    truncate: bool,
}

#[derive(clap::Args)]
struct EntryArgs {
    /// Entry name; becomes <name>.bndr and the wiki-link target
    name: String,

    /// Title (defaults to the entry name)
    #[arg(long)]
    title: Option<String>,

    /// Parent entry name
    #[arg(long)]
    parent: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Mark the entry as a portal page
    #[arg(long)]
    portal: bool,

    /// Directory to create the entry in
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Serialize)]
struct LinksReport<'a> {
    header: &'a Header,
    links: &'a LinkRecord,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Compile(args) => compile(args, &config),
        Command::Links(args) => links(args, &config),
        Command::Entry(args) => entry(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("config file not found: {}", path.display()))?,
        ),
        None => Config::load()?,
    };

    match loaded {
        Some(config) => {
            log::debug!("Loaded config: {config:?}");
            Ok(config)
        }
        None => {
            log::debug!(
                "No config file at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}

fn compile_options(config: &Config, truncate: bool) -> CompileOptions {
    let mut options = config.compile_options();
    if truncate {
        options.delimiter = DelimiterPolicy::Truncate;
    }
    options
}

fn compile(args: CompileArgs, config: &Config) -> Result<()> {
    let source = SourceFile::new(&args.file);
    if !SourceFile::is_source(source.path()) {
        log::warn!("{} is not a .bndr file", source.path().display());
    }

    let doc = compile_file(&source, &compile_options(config, args.truncate))
        .with_context(|| format!("failed to compile {}", source.path().display()))?;

    match args.out.or_else(|| config.output_dir.clone()) {
        Some(out_dir) => {
            let path = write_fragment(&out_dir, &source, &doc.html)?;
            log::info!("Wrote {}", path.display());
        }
        None => print!("{}", doc.html),
    }
    Ok(())
}

fn links(args: LinksArgs, config: &Config) -> Result<()> {
    let source = SourceFile::new(&args.file);
    let doc = compile_file(&source, &compile_options(config, args.truncate))
        .with_context(|| format!("failed to compile {}", source.path().display()))?;

    let report = LinksReport {
        header: &doc.header,
        links: &doc.links,
    };
    print!("{}", toml::to_string_pretty(&report)?);
    Ok(())
}

fn entry(args: EntryArgs) -> Result<()> {
    let template = EntryTemplate {
        title: args.title.unwrap_or_else(|| args.name.clone()),
        parent: args.parent,
        description: args.description.unwrap_or_default(),
        is_portal: args.portal,
    };
    let created = creation_time();

    let path = create_entry(&args.dir, &args.name, &template, created)?;
    log::info!("Created {}", path.display());
    Ok(())
}

/// Entries record creation in UTC, the clock offset timestamps are normalized to.
fn creation_time() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
