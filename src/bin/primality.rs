//! Primality screening host
//!
//! Reads one hex-encoded candidate from the first line of the input
//! file, tests it for primality, and writes `1` (probably prime) or `0`
//! (composite) to the output file.

use rsamath::numtheory::is_prime;
use rsamath::primitives::U2048;
use rsamath::rng::WitnessRng;

use std::env;
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input_file> <output_file>", args[0]);
        return ExitCode::FAILURE;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Cannot open input file {}: {err}", args[1]);
            return ExitCode::FAILURE;
        }
    };

    let digits: String = contents
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let candidate: U2048 = match digits.parse() {
        Ok(candidate) => candidate,
        Err(err) => {
            eprintln!("Bad operand: {err}");
            return ExitCode::FAILURE;
        }
    };

    if candidate.bit_len() * 2 > U2048::BITS {
        eprintln!("Operand too large: at most {} bits supported", U2048::BITS / 2);
        return ExitCode::FAILURE;
    }

    let mut rng = WitnessRng::new();
    let verdict = if is_prime(&candidate, &mut rng) { "1" } else { "0" };

    if let Err(err) = fs::write(&args[2], format!("{verdict}\n")) {
        eprintln!("Cannot open output file {}: {err}", args[2]);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
