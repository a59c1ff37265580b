#![deny(unsafe_code)]
//! CLI binary for the rockview minor-body viewer.
//!
//! Subcommands:
//! - `list` — print the catalog (optionally refreshed from the NEO listing)
//! - `search <query>` — case-insensitive substring search
//! - `show <id>` — print an entry's full record (optionally enriched)
//! - `mesh <id>` — generate the body's displaced mesh, write OBJ

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use rockview_app::obj::write_obj;
use rockview_catalog::data::seed_catalog;
use rockview_catalog::export::entry_text;
use rockview_catalog::{Catalog, CatalogEntry};
use rockview_core::{displaced_body, seed_from_name, ShapeParams};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rockview", about = "Minor-body catalog and shape generator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog.
    List {
        /// Merge a page of the remote NEO listing first (best-effort).
        #[arg(long)]
        refresh: bool,
    },
    /// Search the catalog by name, designation, or id.
    Search {
        /// Case-insensitive substring query.
        query: String,
    },
    /// Print an entry's full record.
    Show {
        /// Catalog id (e.g. "433").
        id: String,

        /// Enrich from the small-body database first (best-effort).
        #[arg(long)]
        fetch: bool,
    },
    /// Generate the displaced mesh for an entry and write an OBJ file.
    Mesh {
        /// Catalog id (e.g. "433").
        id: String,

        /// Longitude divisions.
        #[arg(long, default_value_t = 64)]
        longitudes: u32,

        /// Latitude divisions.
        #[arg(long, default_value_t = 32)]
        latitudes: u32,

        /// Maximum fractional radius perturbation.
        #[arg(long, default_value_t = 0.08)]
        intensity: f32,

        /// Base sphere radius.
        #[arg(long, default_value_t = 1.0)]
        radius: f32,

        /// Output file path.
        #[arg(short, long, default_value = "body.obj")]
        output: PathBuf,
    },
}

/// Runs an async remote call on a throwaway current-thread runtime.
fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Io(e.to_string()))?;
    Ok(runtime.block_on(future))
}

/// Best-effort catalog refresh: on any failure the seed catalog is
/// returned unchanged.
fn refreshed(catalog: Catalog) -> Result<Catalog, CliError> {
    let client = reqwest::Client::new();
    let key = rockview_remote::api_key();
    match block_on(rockview_remote::fetch_catalog(&client, &key))? {
        Ok(entries) => Ok(catalog.merge(entries)),
        Err(e) => {
            log::warn!("catalog refresh failed, using local data: {e}");
            Ok(catalog)
        }
    }
}

/// Best-effort detail enrichment: on any failure the entry is returned
/// unmodified.
fn enriched(entry: &CatalogEntry) -> Result<CatalogEntry, CliError> {
    let client = reqwest::Client::new();
    match block_on(rockview_remote::fetch_detail(&client, &entry.designation))? {
        Ok(overlay) => Ok(entry.with_overlay(&overlay)),
        Err(e) => {
            log::warn!("detail lookup failed, showing entry unmodified: {e}");
            Ok(entry.clone())
        }
    }
}

fn print_entries(entries: &[&CatalogEntry], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for e in entries {
            let hazard = if e.potentially_hazardous { " [PHA]" } else { "" };
            println!("{:>8}  {} ({}){hazard}", e.id, e.name, e.designation);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let catalog = seed_catalog()?;
    match cli.command {
        Command::List { refresh } => {
            let catalog = if refresh { refreshed(catalog)? } else { catalog };
            let entries: Vec<&CatalogEntry> = catalog.entries().iter().collect();
            print_entries(&entries, cli.json)?;
        }
        Command::Search { query } => {
            print_entries(&catalog.search(&query), cli.json)?;
        }
        Command::Show { id, fetch } => {
            let entry = catalog
                .get(&id)
                .ok_or_else(|| CliError::Input(format!("no entry with id {id:?}")))?;
            let entry = if fetch { enriched(entry)? } else { entry.clone() };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                print!("{}", entry_text(&entry));
            }
        }
        Command::Mesh {
            id,
            longitudes,
            latitudes,
            intensity,
            radius,
            output,
        } => {
            let entry = catalog
                .get(&id)
                .ok_or_else(|| CliError::Input(format!("no entry with id {id:?}")))?;
            let params = ShapeParams {
                base_radius: radius,
                longitudes,
                latitudes,
                intensity,
            };
            let seed = seed_from_name(&entry.name);
            let mesh = displaced_body(seed, &params);
            write_obj(&mesh, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "id": entry.id,
                    "name": entry.name,
                    "seed": seed,
                    "vertices": mesh.vertex_count(),
                    "triangles": mesh.triangle_count(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "generated {} (seed {seed}, {} vertices, {} triangles) -> {}",
                    entry.name,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
