//! Chinese-remainder demonstration tile set
//!
//! Tile `i` of a `p * q` set carries the glues `[i / 3, i % 3, i % 2, i / 2]`
//! (North, East, South, West). Grown from an L-shaped boundary seed with
//! threshold 2, directed assembly fills the enclosed square.

use crate::io::error::{Result, invalid_parameter};
use crate::tiles::{Glue, GluePattern, TileSet};

/// Greatest common divisor
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Whether two integers share no factor other than 1
pub const fn coprime(p: u64, q: u64) -> bool {
    gcd(p, q) == 1
}

/// Glues of tile `index` in the demonstration set
pub fn crt_glues(index: u64) -> GluePattern {
    GluePattern::new([index / 3, index % 3, index % 2, index / 2].map(|v| Glue::new(v.to_string())))
}

/// Build the `p * q` demonstration tile set
///
/// Tiles are named by their zero-padded index, so name order is index order.
///
/// # Errors
///
/// Returns a configuration error if:
/// - `p` or `q` is zero
/// - `p` and `q` are not coprime
/// - `p * q` overflows
pub fn crt_tile_set(p: u64, q: u64) -> Result<TileSet> {
    if p == 0 || q == 0 {
        return Err(invalid_parameter(
            "p, q",
            &format!("{p}, {q}"),
            &"must both be positive",
        ));
    }
    if !coprime(p, q) {
        return Err(invalid_parameter(
            "p, q",
            &format!("{p}, {q}"),
            &format!("must be coprime (gcd is {})", gcd(p, q)),
        ));
    }
    let count = p
        .checked_mul(q)
        .ok_or_else(|| invalid_parameter("p, q", &format!("{p}, {q}"), &"p * q overflows"))?;

    let width = count.saturating_sub(1).to_string().len();
    Ok((0..count)
        .map(|index| (format!("{index:0width$}"), crt_glues(index)))
        .collect())
}
