use std::process::exit;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn, Level};

use tendigit::{
    alphabet::{DEFAULT_SALT_LENGTH, DEFAULT_STRING_LENGTH},
    generate,
    source::{parse_hex_seed, RandomSource},
    Config,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Source {
    /// the CSPRNG of the operating system
    Secure,
    /// a fast, non-cryptographic generator
    Insecure,
}

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where to draw the random string and the salts from.
    #[arg(long, value_enum, default_value_t = Source::Secure)]
    source: Source,

    /// Replay a run from a 32-byte seed given as 64 hexadecimal characters.
    #[arg(long, conflicts_with = "source")]
    seed: Option<String>,

    /// Length of the random string.
    #[arg(short, long, default_value_t = DEFAULT_STRING_LENGTH)]
    length: usize,

    /// Length of each of the two salts.
    #[arg(long, default_value_t = DEFAULT_SALT_LENGTH)]
    salt_length: usize,

    /// Number of numbers to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn random_source(cli: &Cli) -> Result<RandomSource> {
    if let Some(seed) = &cli.seed {
        let seed = parse_hex_seed(seed).context("could not read `--seed`")?;
        return Ok(RandomSource::Seeded(seed));
    }

    Ok(match cli.source {
        Source::Secure => RandomSource::Secure,
        Source::Insecure => RandomSource::Insecure,
    })
}

fn run(cli: &Cli) -> Result<()> {
    let source = random_source(cli)?;
    if !source.is_cryptographically_secure() {
        warn!("drawing from a non-cryptographic source: {}", source);
    }
    info!("random source: {}", source);

    let config = Config {
        string_length: cli.length,
        salt_length: cli.salt_length,
    };

    let mut rng = source.rng();
    for i in 0..cli.count {
        let trace = generate(&config, &mut rng)
            .with_context(|| format!("could not generate number {}", i))?;
        println!("Ten Digit Number: {}", trace.number);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.quiet { Level::WARN } else { Level::INFO })
        .try_init()
        .expect("cannot init logger");

    if let Err(e) = run(&cli) {
        error!("{:?}", e);
        exit(1);
    }
}
