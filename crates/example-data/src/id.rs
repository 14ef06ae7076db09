//! Short random identifiers for seeded records.
//!
//! Identifiers are drawn from a 62-symbol alphanumeric alphabet. They are
//! storage keys, not secrets, so a seeded ChaCha stream is sufficient.

use rand::Rng;

/// Symbols used for generated identifiers.
pub const ID_ALPHABET: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 10;

/// Draw a single identifier from `rng`.
///
/// # Example
///
/// ```
/// use example_data::{ID_LENGTH, generate_id, is_valid_id};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let id = generate_id(&mut rng);
/// assert_eq!(id.len(), ID_LENGTH);
/// assert!(is_valid_id(&id));
/// ```
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| {
            let position = rng.random_range(0..ID_ALPHABET.len());
            ID_ALPHABET
                .get(position)
                .copied()
                .map_or('0', char::from)
        })
        .collect()
}

/// Returns `true` when `candidate` has the generated shape.
pub fn is_valid_id(candidate: &str) -> bool {
    candidate.len() == ID_LENGTH && candidate.bytes().all(|byte| ID_ALPHABET.contains(&byte))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(u64::MAX)]
    fn generated_ids_use_the_alphabet(#[case] seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..100 {
            let id = generate_id(&mut rng);
            assert!(is_valid_id(&id), "unexpected id shape: {id}");
        }
    }

    #[rstest]
    #[case("")]
    #[case("short")]
    #[case("0123456789A")]
    #[case("01234-6789")]
    #[case("01234 6789")]
    fn rejects_foreign_shapes(#[case] candidate: &str) {
        assert!(!is_valid_id(candidate));
    }

    #[test]
    fn same_seed_yields_same_id() {
        let first = generate_id(&mut ChaCha8Rng::seed_from_u64(99));
        let second = generate_id(&mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(first, second);
    }
}
