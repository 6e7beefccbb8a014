use clap::Parser;
use log::LevelFilter;
use matmult_coe::{reference_checksum, write_coe, FieldWidth, Result, TestMatrices};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "matmult-gen",
    version,
    about = "Generate random test matrices in .coe memory-initialization format"
)]
struct Cli {
    /// Matrix A .coe output
    #[arg(default_value = "matA_gen.coe")]
    mat_a: PathBuf,

    /// Matrix B .coe output
    #[arg(default_value = "matB_gen.coe")]
    mat_b: PathBuf,

    /// Matrix C .coe output
    #[arg(default_value = "matC_gen.coe")]
    mat_c: PathBuf,

    /// Seed the random source for reproducible matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mats = TestMatrices::random(&mut rng);
    let sums = reference_checksum(&mats.a, &mats.b, &mats.c);

    write_coe(&args.mat_a, &mats.a, FieldWidth::Byte)?;
    write_coe(&args.mat_b, &mats.b, FieldWidth::Byte)?;
    write_coe(&args.mat_c, &mats.c, FieldWidth::Word)?;

    println!(
        "Matrix files created: {} {} {}",
        args.mat_a.display(),
        args.mat_b.display(),
        args.mat_c.display()
    );
    println!("Ab sum: 0x{:08x}", sums.ab_sum);
    println!("C sum: 0x{:08x}", sums.c_sum);
    println!("MMA product: 0x{:08x}", sums.total());

    Ok(())
}
