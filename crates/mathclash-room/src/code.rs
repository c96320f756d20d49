//! Room code sampling.

use rand::Rng;

/// Alphabet for room codes: typeable on any keyboard, no lowercase.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Draws one candidate code of `len` characters from `[A-Z0-9]`.
///
/// Uniqueness against live rooms is the coordinator's job: it resamples
/// under its map write lock until the candidate is unused, so the
/// existence check and the insertion cannot be interleaved by another
/// creator.
pub(crate) fn random_code(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
