//! Failure Report CLI
//!
//! Entry point for the `failure-report` command-line tool.

use clap::{Parser, Subcommand};
use failure_report::{
    load_failures, render_report, CliOverrides, OutputFormat, ReportConfig, ReportDocument,
    ReportModel,
};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "failure-report")]
#[command(about = "Build failures grouped by message and by task", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render both failure trees
    Render {
        /// Failure collection (JSON array or generated script)
        input: PathBuf,

        /// Output format (overrides config)
        #[arg(long, short = 'f', value_enum)]
        format: Option<OutputFormat>,

        /// Path to config file (default: .failure-report.toml)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Collapse nodes below this depth (text output only)
        #[arg(long)]
        expand_depth: Option<usize>,

        /// Use ASCII tree connectors
        #[arg(long)]
        ascii: bool,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Print failure counts
    Summary {
        /// Failure collection (JSON array or generated script)
        input: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            input,
            format,
            config,
            expand_depth,
            ascii,
            output,
        } => run_render(
            input,
            config,
            CliOverrides {
                format,
                expand_depth,
                ascii,
            },
            output,
        ),
        Commands::Summary { input, json } => run_summary(input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_render(
    input: PathBuf,
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReportConfig::load(config_path.as_deref())?.with_overrides(overrides)?;
    let loaded = load_failures(&input)?;
    let model = ReportModel::assemble(&loaded.failures);

    let rendered = match config.render.format {
        OutputFormat::Text => render_report(&model, &config.render_options()),
        OutputFormat::Json => {
            let mut json = ReportDocument::new(model, Some(loaded.source)).to_json()?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, rendered)?;
            tracing::info!(path = %path.display(), "wrote failure report");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn run_summary(input: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_failures(&input)?;
    let model = ReportModel::assemble(&loaded.failures);

    if json_output {
        let summary = serde_json::json!({
            "total_failures": model.total_failures,
            "distinct_messages": model.distinct_messages(),
            "distinct_task_roots": model.distinct_task_roots(),
            "source": loaded.source,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Failures: {}", model.total_failures);
        println!("  Distinct messages: {}", model.distinct_messages());
        println!("  Distinct task roots: {}", model.distinct_task_roots());
    }
    Ok(())
}
