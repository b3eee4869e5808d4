use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use floorplan::config::EditorConfig;
use floorplan::doc::Document;
use floorplan::io::{DocumentError, export_json, read_file, write_file};
use floorplan::viewport::compute_bounding_box;
use floorplan::walls::{derive_walls, total_length};
use tracing::info;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
}

#[derive(Parser, Debug)]
#[command(name = "floorplan", about = "Inspect and tidy exported smart-home floor plans")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize rooms, devices, groups and the content extent.
    Inspect { file: PathBuf },
    /// Re-export a document through the importer, reconciling group membership.
    Normalize {
        input: PathBuf,
        /// Output path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the distinct wall segments with their lengths.
    Walls { file: PathBuf },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = EditorConfig::from_env();

    match cli.command {
        Command::Inspect { file } => run_inspect(&read_file(&file)?, &config),
        Command::Normalize { input, output } => run_normalize(&read_file(&input)?, output)?,
        Command::Walls { file } => run_walls(&read_file(&file)?),
    }
    Ok(())
}

fn run_inspect(doc: &Document, config: &EditorConfig) {
    println!("rooms:   {}", doc.rooms().len());
    for room in doc.rooms() {
        println!("  {} {:?} at ({}, {}) {} x {}", room.id, room.name, room.x, room.y, room.width, room.height);
    }

    println!("devices: {}", doc.devices().len());
    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for device in doc.devices() {
        *by_kind.entry(device.kind.label()).or_default() += 1;
    }
    for (label, count) in by_kind {
        println!("  {label}: {count}");
    }

    println!("groups:  {}", doc.groups().len());
    for group in doc.groups() {
        println!(
            "  {} at ({}, {}) {} members, mount {}",
            group.id,
            group.x,
            group.y,
            doc.member_count(&group.id),
            group.position.label()
        );
    }

    let extent = compute_bounding_box(doc.rooms(), doc.devices(), config.margin, config.default_extent());
    println!("extent:  {} {} {} {}", extent.min_x, extent.min_y, extent.width(), extent.height());
}

fn run_normalize(doc: &Document, output: Option<PathBuf>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_file(&path, doc)?;
            info!(path = %path.display(), "normalized document written");
        }
        None => println!("{}", export_json(doc)?),
    }
    Ok(())
}

fn run_walls(doc: &Document) {
    let walls = derive_walls(doc.rooms());
    for wall in &walls {
        println!(
            "{:<48} ({}, {}) -> ({}, {})  {}",
            wall.id, wall.start.x, wall.start.y, wall.end.x, wall.end.y, wall.length
        );
    }
    println!("total:  {} walls, {} units", walls.len(), total_length(&walls));
}
