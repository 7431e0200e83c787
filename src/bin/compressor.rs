use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use compressor::{Algorithm, CodecConfig, Operation, Processor};

#[derive(Parser, Debug)]
#[command(name = "compressor")]
#[command(about = "Compress and decompress files with RLE or LZ77")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress {
        #[command(flatten)]
        io: IoArgs,

        /// Decode the compressed output and check it matches the input
        #[arg(long)]
        verify: bool,
    },
    /// Decompress a file
    Decompress {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Input file (use - for stdin)
    input: PathBuf,

    /// Output file (use - for stdout)
    output: PathBuf,

    /// Use run-length encoding
    #[arg(long, conflicts_with = "lz")]
    rle: bool,

    /// Use LZ77
    #[arg(long)]
    lz: bool,
}

const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (io_args, operation, verify) = match &cli.command {
        Command::Compress { io, verify } => (io, Operation::Compress, *verify),
        Command::Decompress { io } => (io, Operation::Decompress, false),
    };

    let config = CodecConfig {
        algorithm: Algorithm::from_flags(io_args.rle, io_args.lz, operation)?,
        operation,
        verify,
        ..Default::default()
    };

    // Open input
    let input: Box<dyn Read> = if is_stdio(&io_args.input) {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&io_args.input).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", io_args.input.display(), e))
        })?)
    };

    // Run the codec before touching the output so a failure leaves no file behind
    let start = std::time::Instant::now();
    let processor = Processor::new(config);
    let data = processor.read_input(input)?;
    let result = processor.process(&data)?;

    // Open output
    let output: Box<dyn Write> = if is_stdio(&io_args.output) {
        Box::new(io::stdout().lock())
    } else {
        Box::new(File::create(&io_args.output)?)
    };
    processor.write_output(output, &result)?;

    let stats = processor.stats(&data, &result);
    let elapsed = start.elapsed();

    if cli.verbose {
        let config = processor.config();
        eprintln!("{} ({}) complete:", config.operation, config.algorithm);
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Output bytes:     {}", stats.output_bytes);
        eprintln!("  Ratio:            {:.3}", stats.ratio());
        if stats.verified {
            eprintln!("  Verified:         yes");
        }
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(())
}

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}
