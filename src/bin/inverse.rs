//! RSA private-exponent host
//!
//! Reads three whitespace-delimited hex operands `p q e` from standard
//! input and prints `d = e⁻¹ mod (p−1)(q−1)`, or `-1` when the inverse
//! does not exist.

use rsamath::numtheory::mod_inverse;
use rsamath::primitives::U2048;

use std::io::{self, Read};
use std::process::ExitCode;

fn parse_operand(token: &str) -> Option<U2048> {
    match token.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Bad operand {token:?}: {err}");
            None
        }
    }
}

fn phi_euler(p: &U2048, q: &U2048) -> U2048 {
    (*p - U2048::ONE) * (*q - U2048::ONE)
}

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("Cannot read standard input: {err}");
        return ExitCode::FAILURE;
    }

    let mut tokens = input.split_whitespace();
    let (Some(p), Some(q), Some(e)) = (tokens.next(), tokens.next(), tokens.next()) else {
        eprintln!("Expected three operands: <p> <q> <e>");
        return ExitCode::FAILURE;
    };

    let (Some(p), Some(q), Some(e)) = (parse_operand(p), parse_operand(q), parse_operand(e))
    else {
        return ExitCode::FAILURE;
    };

    let phi = phi_euler(&p, &q);
    if phi.bit_len() * 2 > U2048::BITS {
        eprintln!("Operands too large: phi must fit {} bits", U2048::BITS / 2);
        return ExitCode::FAILURE;
    }

    match mod_inverse(&e, &phi) {
        Some(d) => println!("{d}"),
        None => println!("-1"),
    }

    ExitCode::SUCCESS
}
