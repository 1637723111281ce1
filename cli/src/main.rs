//! Grom CLI: inspect how N-Triples data is indexed
//!
//! Reads a file (or stdin with `-`) and prints the statement index, the link
//! index, or a summary of both.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use grom::rdf::{resolve_id, ObjectKind, Reader, ReaderConfig};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grom", version, about = "Index RDF N-Triples by subject")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Reader configuration file (YAML)
    #[arg(long, global = true, env = "GROM_CONFIG")]
    config: Option<PathBuf>,

    /// Fail on link predicates that have no short identifier
    #[arg(long, global = true)]
    strict: bool,

    /// Log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show statement, subject and link counts
    Summary {
        /// N-Triples file, or `-` for stdin
        input: PathBuf,
    },
    /// List links by subject and short predicate id
    Edges {
        /// N-Triples file, or `-` for stdin
        input: PathBuf,
    },
    /// List statements grouped by subject
    Statements {
        /// N-Triples file, or `-` for stdin
        input: PathBuf,

        /// Only show statements for this subject
        #[arg(long)]
        subject: Option<String>,
    },
    /// Resolve URIs to their short identifiers
    Id {
        /// URIs to resolve
        #[arg(required = true)]
        uris: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Summary { input } => run_summary(&read(cli, input)?, &cli.format),
        Commands::Edges { input } => run_edges(&read(cli, input)?, &cli.format),
        Commands::Statements { input, subject } => {
            run_statements(&read(cli, input)?, subject.as_deref(), &cli.format)
        }
        Commands::Id { uris } => run_id(uris, &cli.format),
    }
}

fn load_config(cli: &Cli) -> Result<ReaderConfig> {
    let config = match &cli.config {
        Some(path) => ReaderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReaderConfig::default(),
    };

    Ok(if cli.strict { config.strict() } else { config })
}

fn read(cli: &Cli, input: &Path) -> Result<Reader> {
    let config = load_config(cli)?;

    if input == Path::new("-") {
        let stdin = std::io::stdin();
        Reader::from_buf_read(BufReader::new(stdin.lock()), &config).context("reading stdin")
    } else {
        Reader::from_path(input, &config).with_context(|| format!("reading {}", input.display()))
    }
}

fn run_summary(reader: &Reader, format: &OutputFormat) -> Result<()> {
    let summary = reader.summary();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            println!("Statements:      {}", summary.statements);
            println!("Subjects:        {}", summary.subjects);
            println!("Linked subjects: {}", summary.linked_subjects);
            println!("Links:           {}", summary.links);
        }
    }

    Ok(())
}

fn run_edges(reader: &Reader, format: &OutputFormat) -> Result<()> {
    let edges = reader.edges_by_subject();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(edges)?);
        }
        OutputFormat::Table => {
            if edges.is_empty() {
                println!("(no links)");
                return Ok(());
            }

            let mut table = new_table(&["Subject", "Predicate", "Objects"]);
            for (subject, predicates) in edges {
                for (predicate, objects) in predicates {
                    table.add_row(vec![subject.clone(), predicate.clone(), objects.join("\n")]);
                }
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn run_statements(reader: &Reader, subject: Option<&str>, format: &OutputFormat) -> Result<()> {
    let statements: Vec<_> = match subject {
        Some(subject) => reader.statements_for(subject).iter().collect(),
        None => reader.statements_by_subject().values().flatten().collect(),
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = statements
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "subject": s.subject.string_form(),
                        "predicate": s.predicate.as_str(),
                        "object": s.object.string_form(),
                        "kind": kind_name(s.object_kind()),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            if statements.is_empty() {
                println!("(no statements)");
                return Ok(());
            }

            let mut table = new_table(&["Subject", "Predicate", "Object", "Kind"]);
            for s in &statements {
                table.add_row(vec![
                    s.subject.string_form(),
                    s.predicate.as_str().to_string(),
                    s.object.to_string(),
                    kind_name(s.object_kind()).to_string(),
                ]);
            }
            println!("{}", table);
            println!("{} statement(s)", statements.len());
        }
    }

    Ok(())
}

fn run_id(uris: &[String], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let ids: serde_json::Map<_, _> = uris
                .iter()
                .map(|uri| (uri.clone(), serde_json::json!(resolve_id(uri))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&ids)?);
        }
        OutputFormat::Table => {
            let mut table = new_table(&["URI", "Identifier"]);
            for uri in uris {
                let id = resolve_id(uri).unwrap_or_else(|| "(none)".to_string());
                table.add_row(vec![uri.clone(), id]);
            }
            println!("{}", table);
        }
    }

    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn kind_name(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Uri => "uri",
        ObjectKind::BlankNode => "blank",
        ObjectKind::Literal => "literal",
    }
}
