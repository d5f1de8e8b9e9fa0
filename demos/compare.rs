use anyhow::{bail, Result};
use clap::Parser;
use decimul::{karatsuba_mul, BigInt};
use tracing_subscriber::EnvFilter;

/// Multiply two non-negative integers with Karatsuba and compare against schoolbook.
#[derive(Debug, Parser)]
#[command(name = "compare")]
struct Args {
    /// Left operand
    #[arg(default_value = "11111111111111111")]
    a: BigInt,

    /// Right operand
    #[arg(default_value = "22222222222222222")]
    b: BigInt,

    /// Digit-length hint; defaults to the larger operand's digit length
    #[arg(short = 'n', long = "digits")]
    digits: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let karatsuba = karatsuba_mul(&args.a, &args.b, args.digits)?;
    let schoolbook = &args.a * &args.b;
    println!("Karatsuba: {}", karatsuba);
    println!("Schoolbook: {}", schoolbook);
    if karatsuba != schoolbook {
        bail!("products differ");
    }
    Ok(())
}
