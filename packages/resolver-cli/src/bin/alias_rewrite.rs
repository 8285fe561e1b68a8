/**
 * alias-rewrite
 *
 * Rewrites path aliases in a project's sources ahead of the bundler
 */
use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use std::fs;
use std::path::PathBuf;

use alias_resolver::ModuleFormat;
use alias_resolver_cli::config::{BuildConfig, DEFAULT_CONFIG_FILE};
use alias_resolver_cli::crash::{exit_with_error, install_crash_handlers};
use alias_resolver_cli::logging::{self, LogLevel};
use alias_resolver_cli::manifest::stamp_package_type;
use alias_resolver_cli::pipeline::{build, rewrite_file};
use alias_resolver_cli::version;

fn cli() -> Command {
    Command::new("alias-rewrite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrite import path aliases into relative paths")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the build configuration")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("esm|cjs")
                .help("Override the configured module format")
                .value_parser(value_parser!(ModuleFormat))
                .global(true),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("debug, info, warn or error")
                .value_parser(value_parser!(LogLevel))
                .default_value("info")
                .global(true),
        )
        .subcommand(Command::new("build").about("Rewrite all sources into the output directory (default)"))
        .subcommand(
            Command::new("rewrite")
                .about("Print one rewritten file to stdout")
                .arg(Arg::new("file").value_name("FILE").required(true)),
        )
        .subcommand(Command::new("stamp").about("Only write the output package.json"))
}

fn main() {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<LogLevel>("log-level")
        .copied()
        .unwrap_or(LogLevel::Info);
    logging::init(level);
    install_crash_handlers();

    if let Err(err) = run(&matches) {
        exit_with_error(&err);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut config = BuildConfig::load(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    if let Some(format) = matches.get_one::<ModuleFormat>("format") {
        config = config.with_format(*format);
    }

    match matches.subcommand() {
        Some(("rewrite", sub)) => {
            let file = sub
                .get_one::<String>("file")
                .map(PathBuf::from)
                .context("missing FILE argument")?;
            let file = fs::canonicalize(&file)
                .with_context(|| format!("cannot open {}", file.display()))?;
            print!("{}", rewrite_file(&file, &config)?);
        }
        Some(("stamp", _)) => {
            let manifest = stamp_package_type(&config)?;
            log::info!("Wrote {}", manifest.display());
        }
        _ => {
            log::info!("{}", version::banner());
            let report = build(&config)?;
            log::info!(
                "Done: {} files, manifest at {}",
                report.files.len(),
                report.manifest.display()
            );
        }
    }

    Ok(())
}
