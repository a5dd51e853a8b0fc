// src/main.rs

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use content_collector::cli::{Cli, Commands, PresetAction};
use content_collector::config::{ConfigBuilder, Preset, PresetStore};
use content_collector::errors::{Error, PresetError};
use content_collector::run;
use std::io::Read;

// Wrapper struct to handle subcommands without breaking the library's Cli struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct AppArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    cli: Cli,
}

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "content_collector=debug".parse()?
                } else {
                    "content_collector=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting content-collector v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let args = AppArgs::parse();

    // --- Handle Subcommands (Presets) ---
    if let Some(Commands::Presets { action }) = args.command {
        let store = preset_store(args.cli.presets_file.as_deref())?;
        return handle_presets(&store, action);
    }

    // --- Configuration & Execution ---
    let preset = match &args.cli.preset {
        Some(name) => Some(preset_store(args.cli.presets_file.as_deref())?.require(name)?),
        None => None,
    };
    let mut builder = ConfigBuilder::from_cli(args.cli);
    if let Some(preset) = &preset {
        log::debug!("Applying preset '{}'", preset.name);
        builder = builder.apply_preset(preset);
    }
    let config = builder.build()?;
    log::debug!("Configuration built successfully.");

    // --- Error Handling ---
    if let Err(e) = run(&config) {
        match e {
            Error::NoFilesFound => {
                eprintln!("content-collector: No files found matching the specified criteria.");
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn preset_store(presets_file: Option<&str>) -> Result<PresetStore> {
    match presets_file {
        Some(path) => Ok(PresetStore::new(path)),
        None => PresetStore::default_location().ok_or_else(|| {
            anyhow!("Could not determine a config directory for presets; use --presets-file")
        }),
    }
}

fn handle_presets(store: &PresetStore, action: PresetAction) -> Result<()> {
    match action {
        PresetAction::List => {
            for preset in store.list()? {
                if preset.description.is_empty() {
                    println!("{}", preset.name);
                } else {
                    println!("{}\t{}", preset.name, preset.description);
                }
            }
        }
        PresetAction::Show { name } => {
            let preset = store.require(&name)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&preset).context("Failed to format preset")?
            );
        }
        PresetAction::Add {
            name,
            extensions,
            excludes,
            description,
            no_gitignore,
        } => {
            store.add(Preset {
                name: name.clone(),
                extensions,
                excludes: excludes.join("\n"),
                description,
                use_gitignore: !no_gitignore,
            })?;
            log::info!("Saved preset '{}' to {}", name, store.path().display());
        }
        PresetAction::New => {
            let name = store.unique_name()?;
            store.add(Preset::new(name.clone()))?;
            println!("{}", name);
        }
        PresetAction::Rename { from, to } => {
            let mut preset = store.require(&from)?;
            preset.name = to;
            store.save_edited(&from, preset)?;
        }
        PresetAction::Remove { name } => {
            if !store.remove(&name)? {
                return Err(Error::from(PresetError::NotFound(name)).into());
            }
        }
        PresetAction::Export { name } => {
            println!("{}", store.export(&name)?);
        }
        PresetAction::Import { json } => {
            let raw = match json {
                Some(json) => json,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read preset JSON from stdin")?;
                    buffer
                }
            };
            let preset = store.import(&raw)?;
            println!("{}", preset.name);
        }
    }
    Ok(())
}
