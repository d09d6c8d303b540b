// ABOUTME: Main entry point for the deckdown program.
// ABOUTME: Provides CLI interface for parsing markdown into slide and TOC JSON.

use clap::{Args, Parser, Subcommand};
use deckdown::{DeckError, ParserOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse markdown into slide JSON
    Parse(ParseArgs),

    /// Extract the table of contents as JSON
    Toc(TocArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Path to the markdown file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output JSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Disable slide breaks at --- delimiter lines
    #[arg(long)]
    no_delimiter: bool,

    /// Disable slide breaks at heading lines
    #[arg(long)]
    no_heading_pagination: bool,

    /// Smallest heading level (1-6) that forces a slide break
    #[arg(long)]
    min_heading_level: Option<u8>,
}

#[derive(Args)]
struct TocArgs {
    /// Path to the markdown file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output JSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn build_options(args: &ParseArgs) -> Result<ParserOptions, DeckError> {
    let mut options = ParserOptions::from_env();

    if args.no_delimiter {
        options.use_delimiter = false;
    }
    if args.no_heading_pagination {
        options.use_heading_pagination = false;
    }
    if let Some(level) = args.min_heading_level {
        if !(1..=6).contains(&level) {
            return Err(DeckError::ConfigError(format!(
                "min heading level must be between 1 and 6, got {}",
                level
            )));
        }
        options.min_heading_level = level;
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Parse(args)) => run_parse(args),
        Some(Commands::Toc(args)) => run_toc(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_parse(args: &ParseArgs) -> Result<(), DeckError> {
    let options = build_options(args)?;
    let slides = deckdown::parse_markdown_file(&args.input, &options)?;

    match &args.output {
        Some(output) => {
            deckdown::write_slides_json(&slides, output)?;
            println!("Parsed {} slides: {:?}", slides.len(), output);
        }
        None => {
            let json =
                serde_json::to_string_pretty(&slides).map_err(DeckError::SerializationError)?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_toc(args: &TocArgs) -> Result<(), DeckError> {
    deckdown::utils::validate_file_exists(&args.input)?;
    let text = std::fs::read_to_string(&args.input).map_err(DeckError::FileReadError)?;
    let toc = deckdown::parse_toc(&text);
    let json = serde_json::to_string_pretty(&toc).map_err(DeckError::SerializationError)?;

    match &args.output {
        Some(output) => {
            deckdown::utils::ensure_parent_directory_exists(output)?;
            std::fs::write(output, json)
                .map_err(|e| anyhow::anyhow!("Failed to write output file: {}", e))?;
            println!("Extracted {} headings: {:?}", toc.len(), output);
        }
        None => println!("{}", json),
    }
    Ok(())
}
