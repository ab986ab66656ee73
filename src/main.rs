mod cli;

use elemental::config::{self, OutputFormat};
use elemental::document::{Document, DocumentKind};
use elemental::model::catalog;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "elemental=trace,elemental_model=debug".to_string()
        } else {
            "elemental=warn,elemental_model=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect {
            file,
            kind,
            format,
            strict,
        } => inspect(&file, cli.config.as_deref(), kind, format, strict),
        Commands::Enums { name } => list_enums(name.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("elemental {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn inspect(
    file: &Path,
    config_path: Option<&Path>,
    kind: Option<DocumentKind>,
    format: Option<OutputFormat>,
    strict: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    if !file.exists() {
        anyhow::bail!("Input file does not exist: {:?}", file);
    }

    let document = Document::load(file, kind, config.input.default_kind)
        .with_context(|| format!("Failed to load document: {:?}", file))?;
    tracing::info!("Loaded {} document from {:?}", document.kind(), file);

    let unknown = document.unknown_values();
    for value in &unknown {
        eprintln!("warning: {}", value);
    }
    if !unknown.is_empty() && (strict || config.input.strict_enums) {
        anyhow::bail!(
            "{} unknown enumeration value(s) in {:?}",
            unknown.len(),
            file
        );
    }

    match format.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{}", document),
        OutputFormat::Json => println!("{}", document.to_json(config.output.pretty)?),
    }

    Ok(())
}

fn list_enums(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let Some(info) = catalog::find_enumeration(name) else {
                anyhow::bail!("Unknown enumeration: {}", name);
            };
            for value in info.values {
                println!("{}", value);
            }
        }
        None => {
            for info in catalog::enumerations() {
                println!("{:<40} {}", info.name, info.values.len());
            }
        }
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  Output format: {:?}", config.output.format);
    println!("  Pretty JSON: {}", config.output.pretty);
    println!("  Default kind: {}", config.input.default_kind);
    println!("  Strict enums: {}", config.input.strict_enums);

    Ok(())
}
