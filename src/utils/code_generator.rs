//! Short code generation.
//!
//! Codes are the first 8 hex digits of a 128-bit random value. The store is
//! never consulted, so a collision surfaces as a unique-constraint failure
//! on insert.

/// Number of random bytes drawn per code.
const RANDOM_BYTES: usize = 16;

/// Length of a generated short code.
pub const SHORT_CODE_LENGTH: usize = 8;

/// Generates a random short code.
///
/// Uses `getrandom` for entropy and hex-encodes the result, producing an
/// 8-character lowercase code that is safe in a URL path segment.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; RANDOM_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = hex::encode(buffer);
    code.truncate(SHORT_CODE_LENGTH);
    code
}
