//! Amdusias Command-Line Driver
//!
//! Two-pass Huffman coding over seven-bit text files.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a text file into a framed bitstream
//! amdusias encode input.txt input.huf
//!
//! # Decode it back; the codec is rebuilt from the original text
//! amdusias decode input.txt input.huf restored.txt
//!
//! # Show the frequency census and codeword table
//! amdusias inspect input.txt
//! amdusias inspect input.txt --json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use amdusias_core::{ByteReader, ByteWriter, TextReader, TextWriter};
use amdusias_huffman::{FrequencyTable, HuffmanCodec};

#[derive(Parser, Debug)]
#[command(name = "amdusias")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Amdusias Huffman codec for seven-bit text", long_about = None)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a text file and encode it into a framed bitstream
    Encode {
        /// Source text file (seven-bit symbols only)
        input: PathBuf,

        /// Destination for the encoded stream
        output: PathBuf,
    },

    /// Decode an encoded stream, rebuilding the codec from the original text
    Decode {
        /// Original text the stream was encoded from
        input: PathBuf,

        /// Encoded stream to decode
        encoded: PathBuf,

        /// Destination for the restored text
        output: PathBuf,
    },

    /// Report the frequency census and codeword table of a text file
    Inspect {
        /// Source text file to analyze
        input: PathBuf,

        /// Emit the report as JSON instead of aligned columns
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match args.command {
        Command::Encode { input, output } => run_encode(&input, &output),
        Command::Decode {
            input,
            encoded,
            output,
        } => run_decode(&input, &encoded, &output),
        Command::Inspect { input, json } => run_inspect(&input, json),
    }
}

/// Analyze `input`, then encode it into `output`.
fn run_encode(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let codec = HuffmanCodec::analyze(&mut TextReader::open(input)?)?;

    let mut sink = ByteWriter::create(output)?;
    let stats = codec.encode(&mut TextReader::open(input)?, &mut sink)?;

    info!("Encoded {} -> {}", input.display(), output.display());
    info!("  Symbols read:  {}", stats.symbols_read);
    info!("  Payload bits:  {}", stats.payload_bits);
    info!("  Padding bits:  {}", stats.padding_bits);
    info!("  Bytes written: {}", stats.bytes_written);
    info!(
        "  Ratio:         {:.2}x ({:.1}% saved)",
        stats.compression_ratio(),
        stats.savings_percent()
    );

    Ok(())
}

/// Rebuild the codec from `input`, then decode `encoded` into `output`.
///
/// Analysis is deterministic, so the rebuilt tree matches the one the
/// stream was encoded with as long as `input` is the original text.
fn run_decode(input: &Path, encoded: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let codec = HuffmanCodec::analyze(&mut TextReader::open(input)?)?;

    let mut sink = TextWriter::create(output)?;
    let stats = codec.decode(&mut ByteReader::open(encoded)?, &mut sink)?;

    info!("Decoded {} -> {}", encoded.display(), output.display());
    info!("  Bytes read:      {}", stats.bytes_read);
    info!("  Payload bits:    {}", stats.payload_bits);
    info!("  Symbols written: {}", stats.symbols_written);

    Ok(())
}

/// One row of the inspect report.
#[derive(Debug, Serialize)]
struct SymbolReport {
    symbol: u8,
    display: String,
    count: u64,
    probability: f64,
    codeword: String,
}

/// Full inspect report, ordered the way the tree consumes frequencies.
#[derive(Debug, Serialize)]
struct InspectReport {
    input: String,
    total_symbols: u64,
    distinct_symbols: usize,
    symbols: Vec<SymbolReport>,
}

/// Analyze `input` and print its census and codeword table.
fn run_inspect(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let census = FrequencyTable::from_source(&mut TextReader::open(input)?)?;
    let codec = HuffmanCodec::analyze(&mut TextReader::open(input)?)?;

    let symbols: Vec<SymbolReport> = codec
        .frequencies()
        .iter()
        .filter_map(|frequency| {
            let symbol = frequency.symbol?;
            Some(SymbolReport {
                symbol: symbol.value(),
                display: symbol.to_string(),
                count: census.count(symbol),
                probability: frequency.probability,
                codeword: codec
                    .code_table()
                    .code(symbol)
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect();

    let report = InspectReport {
        input: input.display().to_string(),
        total_symbols: census.total(),
        distinct_symbols: census.distinct(),
        symbols,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}: {} symbols, {} distinct",
            report.input, report.total_symbols, report.distinct_symbols
        );
        println!();
        println!(
            "{:>8}  {:>8}  {:>11}  codeword",
            "symbol", "count", "probability"
        );
        for row in &report.symbols {
            println!(
                "{:>8}  {:>8}  {:>11.6}  {}",
                row.display, row.count, row.probability, row.codeword
            );
        }
    }

    Ok(())
}
