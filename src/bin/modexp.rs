//! Modular exponentiation host
//!
//! Reads three whitespace-delimited hex operands `N k x` from the input
//! file and writes `x^k mod N` to the output file.

use rsamath::numtheory::power_mod;
use rsamath::primitives::U8192;

use std::env;
use std::fs;
use std::process::ExitCode;

fn parse_operand(token: &str) -> Option<U8192> {
    match token.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Bad operand {token:?}: {err}");
            None
        }
    }
}

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

    let mut tokens = contents.split_whitespace();
    let (Some(n), Some(k), Some(x)) = (tokens.next(), tokens.next(), tokens.next()) else {
        eprintln!("Expected three operands: <N> <k> <x>");
        return ExitCode::FAILURE;
    };

    let (Some(n), Some(k), Some(x)) = (parse_operand(n), parse_operand(k), parse_operand(x))
    else {
        return ExitCode::FAILURE;
    };

    if n.is_zero() {
        eprintln!("Modulus must be nonzero");
        return ExitCode::FAILURE;
    }
    if n.bit_len() * 2 > U8192::BITS {
        eprintln!("Modulus too large: at most {} bits supported", U8192::BITS / 2);
        return ExitCode::FAILURE;
    }

    let result = power_mod(&x, &k, &n);

    if let Err(err) = fs::write(&args[2], format!("{result}\n")) {
        eprintln!("Cannot open output file {}: {err}", args[2]);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
