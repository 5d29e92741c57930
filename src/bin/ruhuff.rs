#[path = "ruhuff/progress.rs"]
mod progress;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, WrapErr};
use console::style;
use progress::{fmt_size, ProgressMonitor};
use ruhuff::checksum::checksum;
use ruhuff::DecodeStrategy;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log more, repeat for even more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress INPUT into OUTPUT
    Compress {
        input: PathBuf,
        output: PathBuf,
        /// Decompress the result again and compare it to the input
        #[arg(long)]
        verify: bool,
    },
    /// Decompress INPUT into OUTPUT
    Decompress {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, value_enum, default_value_t)]
        strategy: Strategy,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Strategy {
    /// Match the payload against a table of all codes
    #[default]
    CodeLookup,
    /// Walk the tree bit by bit
    TreeWalk,
}

impl From<Strategy> for DecodeStrategy {
    fn from(value: Strategy) -> Self {
        match value {
            Strategy::CodeLookup => DecodeStrategy::CodeLookup,
            Strategy::TreeWalk => DecodeStrategy::TreeWalk,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::WARN
    } else {
        match cli.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    let indicatif_layer = IndicatifLayer::new();
    tracing_subscriber::registry()
        .with(level)
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    match cli.command {
        Commands::Compress {
            input,
            output,
            verify,
        } => compress(&input, &output, verify),
        Commands::Decompress {
            input,
            output,
            strategy,
        } => decompress(&input, &output, strategy.into()),
    }
}

fn open_input(path: &Path) -> color_eyre::Result<(File, u64)> {
    let file = File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let size = file
        .metadata()
        .wrap_err_with(|| format!("failed to read metadata of {}", path.display()))?
        .len();
    Ok((file, size))
}

fn create_output(path: &Path) -> color_eyre::Result<BufWriter<File>> {
    let file =
        File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn compress(input: &Path, output: &Path, verify: bool) -> color_eyre::Result<()> {
    let (source, size) = open_input(input)?;
    let mut data = Vec::with_capacity(size as usize);
    ProgressMonitor::new("reading", BufReader::new(source), size)
        .read_to_end(&mut data)
        .wrap_err_with(|| format!("failed to read {}", input.display()))?;

    let mut sink = create_output(output)?;
    let summary = discard_on_error(
        output,
        ruhuff::compress(&data, &mut sink)
            .wrap_err_with(|| format!("failed to compress {}", input.display())),
    )?;
    discard_on_error(
        output,
        sink.flush()
            .wrap_err_with(|| format!("failed to write {}", output.display())),
    )?;

    debug!(
        "{} distinct symbols, {} header bits, {} payload bits",
        summary.distinct_symbols, summary.header_bits, summary.payload_bits
    );
    info!(
        "{} {} -> {} ({:.1}%)",
        style("compressed").green().bold(),
        fmt_size(summary.input_bytes),
        fmt_size(summary.output_bytes),
        summary.ratio() * 100.0
    );

    if verify {
        let compressed =
            fs::read(output).wrap_err_with(|| format!("failed to read {}", output.display()))?;
        let restored = ruhuff::decompress_to_vec(&compressed)
            .wrap_err_with(|| format!("failed to decompress {}", output.display()))?;
        let expected = checksum(&data);
        let actual = checksum(&restored);
        if expected != actual {
            bail!(
                "verification failed: input checksum {:016x}, round trip checksum {:016x}",
                expected,
                actual
            );
        }
        info!("{} checksum {:016x}", style("verified").green(), actual);
    }
    Ok(())
}

fn decompress(input: &Path, output: &Path, strategy: DecodeStrategy) -> color_eyre::Result<()> {
    let (source, size) = open_input(input)?;
    let reader = ProgressMonitor::new("decompressing", BufReader::new(source), size);
    let sink = create_output(output)?;

    debug!("decoding with {:?}", strategy);
    let written = discard_on_error(
        output,
        ruhuff::decompress(reader, sink, strategy)
            .wrap_err_with(|| format!("failed to decompress {}", input.display())),
    )?;
    info!(
        "{} {} -> {}",
        style("decompressed").green().bold(),
        fmt_size(size),
        fmt_size(written)
    );
    Ok(())
}

/// Remove the half written `output` if `result` is an error
fn discard_on_error<T>(output: &Path, result: color_eyre::Result<T>) -> color_eyre::Result<T> {
    if result.is_err() {
        if let Err(err) = fs::remove_file(output) {
            warn!("could not remove {}: {}", output.display(), err);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use color_eyre::eyre::eyre;

    use super::discard_on_error;

    #[test]
    fn failed_output_is_removed() {
        let path = std::env::temp_dir().join(format!("ruhuff-discard-{}", std::process::id()));
        fs::write(&path, b"partial").unwrap();
        let result: color_eyre::Result<()> = Err(eyre!("payload too large"));
        assert!(discard_on_error(&path, result).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn successful_output_is_kept() {
        let path = std::env::temp_dir().join(format!("ruhuff-keep-{}", std::process::id()));
        fs::write(&path, b"complete").unwrap();
        assert_eq!(discard_on_error(&path, Ok(7)).unwrap(), 7);
        assert_eq!(fs::read(&path).unwrap(), b"complete");
        fs::remove_file(&path).unwrap();
    }
}
