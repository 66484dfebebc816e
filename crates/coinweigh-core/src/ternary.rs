//! Base-3 helpers for static codes.
//!
//! A code's digit at position `p` (0 = least significant) is the outcome
//! of one fixed weighing: 0 balance, 1 left heavier, 2 left lighter.

/// `3^k`.
pub fn pow3(k: u32) -> u64 {
    3u64.pow(k)
}

/// Base-3 digit of `x` at position `pos`, counting from the right.
pub fn digit(x: u64, pos: u32) -> u64 {
    (x / pow3(pos)) % 3
}

/// Swap digits 1 and 2, keep 0. Maps a heavy-code to its light-code and
/// back.
pub fn complement(mut x: u64) -> u64 {
    let mut place = 1;
    let mut out = 0;
    while x > 0 {
        out += match x % 3 {
            1 => 2 * place,
            2 => place,
            _ => 0,
        };
        x /= 3;
        place *= 3;
    }
    out
}

/// Fill the zero digits of `hc` with the complement of `m`'s digits.
///
/// Over the lowest `k` digits: where `m` has a 0 the digit of `hc` is
/// kept, where `m` is non-zero `hc` must be 0 and receives the
/// complement of `m`'s digit. Returns `None` when both are non-zero at
/// some position.
///
/// `m = 5 = (0 1 2)`, `hc = 9 = (1 0 0)` gives `16 = (1 2 1)`.
pub fn overlay_complement(mut m: u64, mut hc: u64, k: u32) -> Option<u64> {
    let mut place = 1;
    let mut out = 0;
    for _ in 0..k {
        let (dm, dh) = (m % 3, hc % 3);
        out += match (dm, dh) {
            (0, _) => dh * place,
            (_, 0) => (3 - dm) * place,
            _ => return None,
        };
        m /= 3;
        hc /= 3;
        place *= 3;
    }
    Some(out)
}

/// The lowest `k` digits of `x`, most significant first.
pub fn digits(x: u64, k: u32) -> Vec<u64> {
    (0..k).rev().map(|pos| digit(x, pos)).collect()
}
