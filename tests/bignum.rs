use rsamath::primitives::{U512, U2048};

use core::convert::TryFrom;

#[test]
fn constants() {
    assert!(U512::ZERO.is_zero());
    assert!(U512::ONE.is_one());
    assert_eq!(U512::ZERO, U512::from(0u32));
    assert_eq!(U512::ONE, U512::from(1u32));
    assert_eq!(U512::BITS, 512);
    assert_eq!(U2048::BITS, 2048);
}

#[test]
fn from_native_and_back() {
    let a = U512::from(0xDEADBEEFu32);
    assert_eq!(u32::try_from(a).unwrap(), 0xDEADBEEFu32);

    let a = U512::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    // a value wider than one word does not narrow to u32
    let wide = U512::from(0x1_0000_0000u64);
    assert!(u32::try_from(wide).is_err());

    // a value wider than two words does not narrow to u64
    let wider = U512::from(2u32) << 64;
    assert!(u64::try_from(wider).is_err());
}

#[test]
fn predicates() {
    assert!(U512::ZERO.is_even());
    assert!(!U512::ONE.is_even());
    assert!(U512::from(42u32).is_even());
    assert!(!U512::from(0x1_0000_0001u64).is_even());
    assert!(!U512::from(1u32).is_zero());
    assert!(!U512::from(2u32).is_one());
}

#[test]
fn bit_len_matches_magnitude() {
    assert_eq!(U512::ZERO.bit_len(), 0);
    assert_eq!(U512::ONE.bit_len(), 1);
    assert_eq!(U512::from(0xFFu32).bit_len(), 8);
    assert_eq!(U512::from(0x100u32).bit_len(), 9);
    assert_eq!(U512::from(1u64 << 32).bit_len(), 33);
    assert_eq!(U512::MAX.bit_len(), 512);
}

#[test]
fn bit_get_and_set() {
    let v = U512::from(0b1010u32);
    assert!(!v.bit(0));
    assert!(v.bit(1));
    assert!(!v.bit(2));
    assert!(v.bit(3));

    // beyond the significant range reads as false
    assert!(!v.bit(300));

    let mut v = U512::ZERO;
    v.set_bit(100);
    assert_eq!(v.bit_len(), 101);
    assert!(v.bit(100));

    // beyond capacity the set is a no-op
    let mut v = U512::from(5u32);
    v.set_bit(512);
    v.set_bit(100_000);
    assert_eq!(v, U512::from(5u32));
}

#[test]
fn comparison_orders_by_magnitude() {
    let small = U512::from(7u32);
    let big = U512::from(1u64 << 40);

    assert!(small < big);
    assert!(big > small);
    assert!(small <= small);
    assert!(small >= small);
    assert_eq!(small, U512::from(7u32));
    assert_ne!(small, big);

    // same word count, tie broken from the most significant word down
    let a = U512::from(0x2_0000_0001u64);
    let b = U512::from(0x2_0000_0002u64);
    assert!(a < b);
}

#[test]
fn add_carries_across_words() {
    let sum = U512::from(u32::MAX) + U512::ONE;
    assert_eq!(sum, U512::from(1u64 << 32));

    let sum = U512::from(u64::MAX) + U512::ONE;
    assert_eq!(sum, U512::from(1u32) << 64);
}

#[test]
fn add_is_commutative_and_associative() {
    let a = U512::from(0x0123_4567_89AB_CDEFu64);
    let b = U512::from(0xFEDC_BA98_7654_3210u64);
    let c = U512::from(0x0F0F_0F0Fu32);

    assert_eq!(a + b, b + a);
    assert_eq!((a + b) + c, a + (b + c));
}

#[test]
fn add_wraps_at_capacity() {
    assert_eq!(U512::MAX + U512::ONE, U512::ZERO);
}

#[test]
fn sub_borrows_across_words() {
    let diff = U512::from(1u64 << 32) - U512::ONE;
    assert_eq!(diff, U512::from(u32::MAX));
}

#[test]
fn sub_saturates_at_zero() {
    let small = U512::from(5u32);
    let big = U512::from(10u32);

    assert_eq!(small - big, U512::ZERO);
    assert_eq!(small - small, U512::ZERO);
}

#[test]
fn shifts_move_words_and_bits() {
    let one = U512::ONE;

    assert_eq!(one << 5, U512::from(32u32));
    assert_eq!(one << 32, U512::from(1u64 << 32));
    assert_eq!((one << 33) >> 33, one);

    let v = U512::from(0xABCD_EF01u32);
    assert_eq!((v << 100) >> 100, v);

    // mixed word+bit shift
    assert_eq!(U512::from(3u32) << 35, U512::from(3u64 << 35));
}

#[test]
fn shift_out_of_range_returns_zero() {
    assert_eq!(U512::ONE << 512, U512::ZERO);
    assert_eq!(U512::MAX >> 512, U512::ZERO);
    assert_eq!(U512::from(0xFFu32) >> 9, U512::ZERO);
}

#[test]
fn shift_left_drops_overflowing_bits() {
    // only the low bit of the top word survives
    let v = U512::from(3u32) << 511;
    assert_eq!(v, U512::ONE << 511);
}

#[test]
fn mul_basic_and_cross_word() {
    assert_eq!(U512::from(2u32) * U512::from(3u32), U512::from(6u32));

    let a = U512::from(u32::MAX);
    assert_eq!(a * a, U512::from(0xFFFF_FFFE_0000_0001u64));

    // (2^64)·(2^64) = 2^128
    let x = U512::ONE << 64;
    assert_eq!(x * x, U512::ONE << 128);
}

#[test]
fn mul_truncates_at_capacity() {
    let doubled = U512::MAX * U512::from(2u32);
    assert_eq!(doubled, U512::MAX - U512::ONE);
}

#[test]
fn div_rem_edge_cases() {
    let ten = U512::from(10u32);
    let three = U512::from(3u32);

    assert!(ten.div_rem(&U512::ZERO).is_none());

    let (q, r) = three.div_rem(&ten).unwrap();
    assert_eq!(q, U512::ZERO);
    assert_eq!(r, three);

    let (q, r) = ten.div_rem(&U512::ONE).unwrap();
    assert_eq!(q, ten);
    assert_eq!(r, U512::ZERO);

    let (q, r) = ten.div_rem(&three).unwrap();
    assert_eq!(q, three);
    assert_eq!(r, U512::ONE);
}

#[test]
fn div_rem_single_word_fast_path() {
    let a: U512 = "4A1F9C03B77D2E85F0123456789ABCDEF0".parse().unwrap();
    let b = U512::from(7u32);

    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r < b);
    assert_eq!(q * b + r, a);
}

#[test]
fn div_rem_long_division_identity() {
    let a: U2048 = "FEDCBA9876543210FEDCBA9876543210FEDCBA9876543210".parse().unwrap();
    let b: U2048 = "1D5C8A93F02B74E6".parse().unwrap();

    let (q, r) = a.div_rem(&b).unwrap();
    assert!(r < b);
    assert_eq!(q * b + r, a);

    // divisor wider than the dividend's top word
    let wide: U2048 = "00000000000000001".parse().unwrap();
    let (q, r) = a.div_rem(&wide).unwrap();
    assert!(r < wide);
    assert_eq!(q * wide + r, a);
}

#[test]
#[should_panic(expected = "division by zero")]
fn div_operator_panics_on_zero() {
    let _ = U512::from(1u32) / U512::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn rem_operator_panics_on_zero() {
    let _ = U512::from(1u32) % U512::ZERO;
}

#[test]
fn div_operators_match_div_rem() {
    let a = U512::from(1_000_003u32) * U512::from(1_000_033u32);
    let b = U512::from(1_000_003u32);

    assert_eq!(a / b, U512::from(1_000_033u32));
    assert_eq!(a % b, U512::ZERO);
}
