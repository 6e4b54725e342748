use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lrl_cell::reduction::{DeloneReduction, ReductionOracle, SellingReduction};
use lrl_cell::{RandomLatticeConfig, RandomLatticeGenerator, UnitCell};

#[derive(Parser)]
#[command(name = "lrl-cell")]
#[command(about = "Unit cells and their G6, S6, D7, C3 and B4 lattice encodings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validity, volume and every encoding of a cell
    Info {
        /// a b c alpha beta gamma (degrees)
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        cell: Vec<String>,
    },
    /// Reciprocal cell
    Inverse {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        cell: Vec<String>,
    },
    /// Primitive cell for a centered lattice
    Primitive {
        /// Lattice centering symbol (P, A, B, C, I, F, R, H)
        #[arg(short = 'l', long, default_value = "P")]
        centering: String,

        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        cell: Vec<String>,
    },
    /// Selling and Delone reduction
    Reduce {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        cell: Vec<String>,
    },
    /// Random cells
    Random {
        #[arg(short, long, value_enum, default_value_t = SampleKind::Any)]
        kind: SampleKind,

        /// Typical edge length of the generated cells
        #[arg(short, long)]
        scale: Option<f64>,

        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = RandomLatticeConfig::default().normalization_constant)]
        normalization: f64,

        #[arg(long, default_value_t = RandomLatticeConfig::default().max_attempts)]
        max_attempts: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleKind {
    Any,
    Reduced,
    Unreduced,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Info { cell } => show_info(&parse_cell(&cell)?),
        Commands::Inverse { cell } => {
            let cell = parse_cell(&cell)?;
            print_cell("reciprocal", &cell.inverse());
            Ok(())
        }
        Commands::Primitive { centering, cell } => {
            let cell = parse_cell(&cell)?;
            let primitive = cell.primitive_cell(&centering)?;
            info!("Centering {} reduces the volume by {:.5}", centering, cell.volume() / primitive.volume());
            print_cell("primitive", &primitive);
            Ok(())
        }
        Commands::Reduce { cell } => reduce(&parse_cell(&cell)?),
        Commands::Random {
            kind,
            scale,
            count,
            seed,
            normalization,
            max_attempts,
        } => {
            if normalization <= 0.0 {
                bail!("normalization constant must be positive, got {normalization}");
            }
            let rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let config = RandomLatticeConfig::new(normalization, max_attempts);
            let mut generator = RandomLatticeGenerator::new(rng).with_config(config);
            for _ in 0..count {
                let cell = match (kind, scale) {
                    (SampleKind::Any, None) => generator.cell(),
                    (SampleKind::Any, Some(d)) => generator.scaled_cell(d),
                    (SampleKind::Reduced, None) => generator.delone_reduced()?,
                    (SampleKind::Reduced, Some(d)) => generator.scaled_delone_reduced(d)?,
                    (SampleKind::Unreduced, None) => generator.delone_unreduced()?,
                    (SampleKind::Unreduced, Some(d)) => generator.scaled_delone_unreduced(d)?,
                };
                print_cell("random", &cell);
            }
            Ok(())
        }
    }
}

fn parse_cell(tokens: &[String]) -> Result<UnitCell> {
    let text = tokens.join(" ");
    let cell: UnitCell = text
        .parse()
        .with_context(|| format!("reading cell from {text:?}"))?;
    if !cell.is_valid() {
        warn!("Cell {text:?} is not a valid lattice; results are for diagnostics only");
    }
    Ok(cell)
}

fn print_cell(label: &str, cell: &UnitCell) {
    let degrees = cell.degrees();
    println!(
        "{label:>10}: {:.5} {:.5} {:.5} {:.3} {:.3} {:.3}{}",
        degrees[0],
        degrees[1],
        degrees[2],
        degrees[3],
        degrees[4],
        degrees[5],
        if cell.is_valid() { "" } else { "  (invalid)" }
    );
}

fn show_info(cell: &UnitCell) -> Result<()> {
    print_cell("cell", cell);
    println!("{:>10}: {}", "radians", cell);
    println!("{:>10}: {}", "valid", cell.is_valid());
    println!("{:>10}: {:.5}", "volume", cell.volume());
    println!("{:>10}: {:?}", "G6", cell.to_g6().values());
    println!("{:>10}: {:?}", "S6", cell.to_s6().values());
    println!("{:>10}: {:?}", "D7", cell.to_d7().values());
    println!("{:>10}: {:?}", "C3", cell.to_c3().values());
    Ok(())
}

fn reduce(cell: &UnitCell) -> Result<()> {
    print_cell("input", cell);
    let selling = SellingReduction.reduce(&cell.to_s6())?;
    info!("Selling reduction took {} steps", selling.cycles);
    print_cell("selling", &UnitCell::from(&selling.reduced));
    print_cell("delone", &DeloneReduction::default().reduce_cell(cell)?);
    Ok(())
}
