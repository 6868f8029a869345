//! Smoke-test harness: feeds a sample input through the hash wrapper and
//! prints the digest. No assertions beyond not failing.
//!
//! Usage:
//!   cargo run --example main                      # hash a built-in sample string
//!   cargo run --example main -- --text "abc"      # hash a string
//!   cargo run --example main -- --numbers 1,2,3   # hash an integer sequence
//!   cargo run --example main -- --circom          # print the Circom constant table

use num_bigint::BigUint;
use rescue_prime::codegen::circom_constants;
use rescue_prime::derivation::bn254_parameters;
use rescue_prime::{rescue_prime_hash, HashInput, RescuePrimeError};

fn main() -> Result<(), RescuePrimeError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let params = bn254_parameters();

    let digest = match args.first().map(String::as_str) {
        None => rescue_prime_hash(&params, HashInput::Text("Rescue Prime")),
        Some("--text") => {
            let text = args.get(1).map(String::as_str).unwrap_or_default();
            rescue_prime_hash(&params, HashInput::Text(text))
        }
        Some("--numbers") => {
            let raw = args.get(1).map(String::as_str).unwrap_or_default();
            let values = parse_numbers(raw)?;
            rescue_prime_hash(&params, HashInput::Sequence(&values))
        }
        Some("--circom") => {
            print!("{}", circom_constants(&params));
            return Ok(());
        }
        Some(other) => {
            return Err(RescuePrimeError::UnsupportedInput(format!(
                "input must be text or a sequence of integers, got {:?}",
                other
            )))
        }
    };

    let rendered: Vec<String> = digest.iter().map(|el| el.to_string()).collect();
    println!("{}", rendered.join(", "));
    Ok(())
}

fn parse_numbers(raw: &str) -> Result<Vec<BigUint>, RescuePrimeError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            BigUint::parse_bytes(part.as_bytes(), 10).ok_or_else(|| {
                RescuePrimeError::UnsupportedInput(format!("not a decimal integer: {:?}", part))
            })
        })
        .collect()
}
