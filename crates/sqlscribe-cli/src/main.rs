//! sqlscribe command-line interface.
//!
//! Declares the sample Book model and emits its SQL to standard output, or
//! emits DDL for model definitions loaded from a JSON schema file.

mod demo;

use clap::Parser;
use sqlscribe_core::{sql, Emitter, Error, ModelDef};
use std::path::PathBuf;

/// sqlscribe - render CREATE TABLE and INSERT statements as text
#[derive(Parser, Debug)]
#[command(name = "sqlscribe")]
#[command(version, about = "Render CREATE TABLE and INSERT statements as text")]
pub struct Args {
    /// Table name for the demo CREATE TABLE statement
    #[arg(short, long, default_value = "books")]
    pub table: String,

    /// Emit CREATE TABLE for every model in a JSON schema file instead of
    /// running the demo
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Print the demo schema as JSON instead of SQL
    #[arg(long)]
    pub dump_schema: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sqlscribe_cli=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.dump_schema {
        return demo::dump_schema();
    }

    let mut emitter = Emitter::stdout();

    if let Some(path) = &args.schema {
        emit_schema_file(&mut emitter, path)?;
    } else {
        demo::run(&mut emitter, &args.table)?;
    }

    tracing::info!(statements = emitter.emitted(), "done");
    Ok(())
}

/// Emit CREATE TABLE for every model definition in a JSON schema file.
///
/// The file holds an array of model definitions; each table is named after
/// its model, lowercased.
fn emit_schema_file(
    emitter: &mut Emitter<std::io::Stdout>,
    path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let models: Vec<ModelDef> =
        serde_json::from_str(&content).map_err(|e| Error::Schema(e.to_string()))?;

    for model in &models {
        emitter.emit(&sql::create_table(model, &model.name.to_lowercase()))?;
    }

    Ok(())
}
