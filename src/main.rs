use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polyfss::{
    evaluate_share, interpolate_2d, parse_samples, reconstruct, select_token, share_polynomial,
    BinaryField, FieldConfig, FiniteField, LookupTable, PrimeField, Sample, DEFAULT_DOMAIN_SIZE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "polyfss",
    about = "Encode state transitions as polynomials and select them privately"
)]
struct Cli {
    /// Field to interpolate in: `prime:<p>` or `gf2:<n>`
    #[arg(long, global = true, default_value_t = FieldConfig::default())]
    field: FieldConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the per-token lookup table and print its polynomials.
    Table {
        /// Samples file (`token state next_state` per line).
        samples: PathBuf,
        /// Number of distinct input tokens.
        #[arg(long, default_value_t = DEFAULT_DOMAIN_SIZE)]
        domain_size: usize,
    },
    /// Select a token with a fresh DPF key pair and evaluate both shares.
    Select {
        /// Samples file (`token state next_state` per line).
        samples: PathBuf,
        /// Token to select privately.
        #[arg(long)]
        token: usize,
        /// Current state to evaluate at.
        #[arg(long)]
        state: u64,
        /// Number of distinct input tokens.
        #[arg(long, default_value_t = DEFAULT_DOMAIN_SIZE)]
        domain_size: usize,
        /// Seed for key generation (random if omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Interpolate a single bivariate polynomial over a full (token, state) grid.
    Interpolate2d {
        /// Samples file (`token state next_state` per line).
        samples: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.field {
        FieldConfig::Prime { modulus } => {
            let field = PrimeField::new(modulus).context("invalid prime field")?;
            run(&field, cli.command)
        }
        FieldConfig::Binary { degree } => {
            let field = BinaryField::new(degree).context("invalid binary field")?;
            run(&field, cli.command)
        }
    }
}

fn run<F: FiniteField>(field: &F, command: Commands) -> Result<()> {
    match command {
        Commands::Table {
            samples,
            domain_size,
        } => run_table(field, &samples, domain_size),
        Commands::Select {
            samples,
            token,
            state,
            domain_size,
            seed,
        } => run_select(field, &samples, token, state, domain_size, seed),
        Commands::Interpolate2d { samples } => run_interpolate_2d(field, &samples),
    }
}

fn run_table<F: FiniteField>(field: &F, samples_path: &Path, domain_size: usize) -> Result<()> {
    let samples = read_samples(field, samples_path)?;
    let table = LookupTable::build(field, &samples, domain_size)
        .context("failed to build lookup table")?;

    println!(
        "field={}\tdomain={}\ttokens={}",
        field.config(),
        table.domain_size(),
        table.tokens().count()
    );
    for token in table.tokens() {
        let poly = table.get(token)?;
        println!("token {}\tp(s) = {}", token, poly);
    }
    println!("fingerprint={}", hex_digest(&table.fingerprint()));

    Ok(())
}

fn run_select<F: FiniteField>(
    field: &F,
    samples_path: &Path,
    token: usize,
    state: u64,
    domain_size: usize,
    seed: Option<u64>,
) -> Result<()> {
    let samples = read_samples(field, samples_path)?;
    let table = LookupTable::build(field, &samples, domain_size)
        .context("failed to build lookup table")?;
    let state = field
        .element(state)
        .with_context(|| format!("state {} is not a field element", state))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let keys = select_token(&table, token, &mut rng)
        .with_context(|| format!("cannot select token {}", token))?;

    let share0 = evaluate_share(&table, keys.first(), state)?;
    let share1 = evaluate_share(&table, keys.second(), state)?;
    let combined = reconstruct(field, share0, share1);
    let expected = table.evaluate(token, state)?;

    let poly0 = share_polynomial(&table, keys.first())?;
    let poly1 = share_polynomial(&table, keys.second())?;

    println!("party 0\tterms={}\tshare={}", keys.first().terms(field).len(), share0);
    println!("party 0\tshare polynomial = {}", poly0);
    println!("party 1\tterms={}\tshare={}", keys.second().terms(field).len(), share1);
    println!("party 1\tshare polynomial = {}", poly1);
    println!("reconstructed={}\tplaintext={}", combined, expected);

    if combined != expected {
        bail!("reconstruction {} does not match plaintext {}", combined, expected);
    }

    Ok(())
}

fn run_interpolate_2d<F: FiniteField>(field: &F, samples_path: &Path) -> Result<()> {
    let samples = read_samples(field, samples_path)?;
    let xs: Vec<_> = samples.iter().map(|s| s.token).collect();
    let ys: Vec<_> = samples.iter().map(|s| s.state).collect();
    let zs: Vec<_> = samples.iter().map(|s| s.next_state).collect();

    let poly = interpolate_2d(field, &xs, &ys, &zs).context("bivariate interpolation failed")?;
    println!("{}", poly);

    for sample in &samples {
        let value = poly.evaluate(field, sample.token, sample.state);
        println!(
            "f({}, {}) = {}\texpected {}",
            sample.token, sample.state, value, sample.next_state
        );
        if value != sample.next_state {
            bail!("interpolation mismatch at ({}, {})", sample.token, sample.state);
        }
    }

    Ok(())
}

fn read_samples<F: FiniteField>(field: &F, path: &Path) -> Result<Vec<Sample<F::Element>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read samples from {}", path.display()))?;
    let samples = parse_samples(field, &text)
        .with_context(|| format!("failed to parse samples in {}", path.display()))?;
    if samples.is_empty() {
        bail!("no samples found in {}", path.display());
    }
    Ok(samples)
}

fn hex_digest(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
