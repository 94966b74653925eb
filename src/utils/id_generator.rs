//! Short identifier generation.
//!
//! Identifiers are 6 characters over the 64-symbol URL-safe alphabet, giving
//! 2^36 possible values. Uniqueness is not checked here; the store's unique
//! constraint and [`crate::application::services::ShortenService`] handle collisions.

/// Length of a generated short identifier.
pub const SHORT_ID_LENGTH: usize = 6;

/// URL-safe alphabet (`A-Z a-z 0-9 _ -`), 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Source of short identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produces one identifier.
    fn generate(&self) -> String;
}

/// Generator backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_short_id()
    }
}

/// Generates a cryptographically secure random short identifier.
///
/// Each random byte is masked to its low 6 bits. 256 is a multiple of 64, so
/// every symbol is equally likely.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; SHORT_ID_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

/// Returns true if `candidate` has the shape of a generated identifier.
pub fn is_well_formed(candidate: &str) -> bool {
    candidate.len() == SHORT_ID_LENGTH && candidate.bytes().all(|b| ALPHABET.contains(&b))
}
