/// One xorshift64* step: advances the state and returns the scrambled
/// output word. The state must be nonzero.
#[inline(always)]
pub(crate) fn xorshift64star(state: &mut u64) -> u64 {
    let mut x = *state;

    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;

    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}
