use rsamath::numtheory::{is_prime, miller_rabin, trial_division};
use rsamath::primitives::U512;
use rsamath::rng::WitnessRng;

fn sieve(limit: usize) -> Vec<bool> {
    let mut flags = vec![true; limit];
    flags[0] = false;
    flags[1] = false;

    for i in 2..limit {
        if flags[i] {
            let mut j = i * i;
            while j < limit {
                flags[j] = false;
                j += i;
            }
        }
    }

    flags
}

#[test]
fn trial_division_screens_small_factors() {
    for p in [2u32, 3, 5, 7, 11, 97] {
        assert!(trial_division(&U512::from(p)));
    }

    assert!(!trial_division(&U512::from(25u32)));
    assert!(!trial_division(&U512::from(49u32)));
    assert!(!trial_division(&U512::from(121u32)));
    assert!(!trial_division(&U512::from(97u32 * 89u32)));

    // no factor below 100: survives the screen despite being composite
    assert!(trial_division(&U512::from(101u32 * 103u32)));
}

#[test]
fn small_candidates() {
    let mut rng = WitnessRng::from_seed(42);

    assert!(!is_prime(&U512::ZERO, &mut rng));
    assert!(!is_prime(&U512::ONE, &mut rng));
    assert!(is_prime(&U512::from(2u32), &mut rng));
    assert!(is_prime(&U512::from(3u32), &mut rng));
    assert!(!is_prime(&U512::from(4u32), &mut rng));
    assert!(is_prime(&U512::from(97u32), &mut rng));
    assert!(!is_prime(&U512::from(100u32), &mut rng));
}

#[test]
fn agrees_with_sieve_below_ten_thousand() {
    let oracle = sieve(10_000);
    let mut rng = WitnessRng::from_seed(0xC0FFEE);

    for n in 0..10_000usize {
        assert_eq!(
            is_prime(&U512::from(n as u32), &mut rng),
            oracle[n],
            "disagreement at n = {n}"
        );
    }
}

#[test]
fn composites_with_only_large_factors() {
    let mut rng = WitnessRng::from_seed(7);

    // pass trial division, must be caught by Miller-Rabin
    assert!(!is_prime(&U512::from(101u32 * 103u32), &mut rng));
    assert!(!is_prime(
        &(U512::from(1_000_003u32) * U512::from(1_000_033u32)),
        &mut rng
    ));

    // 2^67 - 1 = 193707721 * 761838257287
    let m67 = (U512::ONE << 67) - U512::ONE;
    assert!(!is_prime(&m67, &mut rng));
}

#[test]
fn known_large_primes() {
    let mut rng = WitnessRng::from_seed(7);

    assert!(is_prime(&U512::from(65537u32), &mut rng));
    assert!(is_prime(&U512::from(2_147_483_647u32), &mut rng));
    assert!(is_prime(&U512::from(4_294_967_291u32), &mut rng));

    // 2^61 - 1, a Mersenne prime
    assert!(is_prime(&U512::from((1u64 << 61) - 1), &mut rng));
}

#[test]
fn miller_rabin_handles_trivial_candidates() {
    let mut rng = WitnessRng::from_seed(1);

    assert!(!miller_rabin(&U512::ZERO, 10, &mut rng));
    assert!(!miller_rabin(&U512::ONE, 10, &mut rng));
    assert!(miller_rabin(&U512::from(2u32), 10, &mut rng));
    assert!(miller_rabin(&U512::from(3u32), 10, &mut rng));
    assert!(!miller_rabin(&U512::from(9u32), 10, &mut rng));
}

#[test]
fn miller_rabin_catches_carmichael_numbers() {
    let mut rng = WitnessRng::from_seed(3);

    // Fermat pseudoprimes to many bases, but not strong pseudoprimes
    for carmichael in [561u32, 1105, 1729, 2465, 41041] {
        assert!(!miller_rabin(&U512::from(carmichael), 20, &mut rng));
    }
}

#[test]
fn verdict_is_deterministic_under_a_fixed_seed() {
    let candidate = U512::from((1u64 << 61) - 1);

    let mut a = WitnessRng::from_seed(99);
    let mut b = WitnessRng::from_seed(99);

    assert_eq!(
        miller_rabin(&candidate, 40, &mut a),
        miller_rabin(&candidate, 40, &mut b)
    );
}
