use clap::Parser;
use log::LevelFilter;
use matmult_coe::{
    accumulate, block_sums, read_coe, take_expected, vector_sum, Result, A_CARDINALITY,
    BLOCK_ROWS, MATRIX_DIM, NUM_BLOCKS,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "matmult-verify",
    version,
    about = "Recompute the expected matrix-multiply result from .coe files"
)]
struct Cli {
    /// Matrix A .coe input (128x128)
    mat_a: PathBuf,

    /// Matrix B .coe input (128x1)
    mat_b: PathBuf,

    /// Matrix C .coe input (128x1)
    mat_c: PathBuf,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    // A bad invocation must exit 1, not clap's default 2.
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };
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
    println!("Reading matrix files...");
    let a_values = read_coe(&args.mat_a)?;
    let b_values = read_coe(&args.mat_b)?;
    let c_values = read_coe(&args.mat_c)?;

    println!("Parsed {} values from matrix A", a_values.len());
    println!("Parsed {} values from matrix B", b_values.len());
    println!("Parsed {} values from matrix C", c_values.len());

    let a = take_expected("A", &a_values, A_CARDINALITY)?;
    let b = take_expected("B", &b_values, MATRIX_DIM)?;
    let c = take_expected("C", &c_values, MATRIX_DIM)?;

    println!("\nProcessing {NUM_BLOCKS} segments of matrix A (each {BLOCK_ROWS}x{MATRIX_DIM})...\n");

    let rule = "=".repeat(70);
    println!("{rule}");
    let sums = block_sums(a, b);
    for (k, sum) in sums.iter().enumerate() {
        let start = k * BLOCK_ROWS;
        let end = start + BLOCK_ROWS - 1;
        println!(
            "Segment {:2} (rows {start:3}-{end:3}): Sum = {sum:15}",
            k + 1
        );
    }
    println!("{rule}");

    println!("\nSummary of all {NUM_BLOCKS} segment sums:");
    println!("{rule}");
    for (k, sum) in sums.iter().enumerate() {
        println!("Segment {:2}: {sum:15}", k + 1);
    }

    let accumulated_ab = accumulate(&sums);
    let accumulated_c = vector_sum(c);

    println!("\n{rule}");
    println!("Accumulated sum from A*B: {accumulated_ab:15}");
    println!("{rule}");

    println!("\n{rule}");
    println!("Accumulated sum from C:   {accumulated_c:15}");
    println!("{rule}");

    println!("\n{rule}");
    println!("FINAL SUM (A*B + C):      {:15}", accumulated_ab + accumulated_c);
    println!("{rule}");

    Ok(())
}
