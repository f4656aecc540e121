//! Resource document commands
//!
//! Usage: quarry resources check <PATH>

use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use quarry_repository::{JsonResourceReader, Resource, ResourceReader, YamlResourceReader};

#[derive(Debug, Args)]
pub struct ResourcesArgs {
    #[command(subcommand)]
    pub command: ResourcesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ResourcesCommand {
    /// Validate resource documents without populating anything
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Path to a resource document or a directory of documents
    pub path: PathBuf,
}

/// Execute resources command
pub fn execute(args: ResourcesArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ResourcesCommand::Check(check_args) => execute_check(check_args),
    }
}

/// Execute resources check
fn execute_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.path.is_dir() {
        // Check a directory of documents (sorted for determinism)
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| reader_for(p).is_some())
            .collect();

        files.sort();

        if files.is_empty() {
            return Err(format!(
                "No resource documents (.json, .yaml, .yml) found in {}",
                args.path.display()
            )
            .into());
        }

        for file in files {
            check_one(&file)?;
        }
    } else {
        check_one(&args.path)?;
    }

    Ok(())
}

fn check_one(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let reader = reader_for(path)
        .ok_or_else(|| format!("Unsupported resource extension: {}", path.display()))?;

    println!("Checking {}...", path.display());
    let resource = Resource::file(path);
    let digest = resource.digest()?;
    let document = reader.read(&resource)?;
    println!(
        "✓ Valid: entity {} with {} record(s) (digest: {})",
        document.entity,
        document.records.len(),
        digest
    );
    Ok(())
}

/// Pick the reader strategy from the file extension
fn reader_for(path: &Path) -> Option<Box<dyn ResourceReader>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Some(Box::new(JsonResourceReader)),
        Some("yaml") | Some("yml") => Some(Box::new(YamlResourceReader)),
        _ => None,
    }
}
