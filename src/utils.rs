//! Assorted utilities and helpers.

/// Default dedup-table capacity for a given beam width.
///
/// The probe map must stay strictly larger than the number of distinct
/// hashes pushed in one turn; 48 slots per beam slot keeps the load
/// factor comfortable for typical branching factors.
#[inline]
pub fn default_hash_capacity(beam_width: usize) -> usize {
    48 * beam_width
}
