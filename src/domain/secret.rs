//! Random secret generation for signing keys.

use rand::Rng;

/// Characters a generated secret is drawn from.
pub const SECRET_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

/// Length of secrets generated by the wizard.
pub const SECRET_LENGTH: usize = 32;

/// Generate a secret of `length` characters from the thread-local CSPRNG.
pub fn generate_secret(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..SECRET_ALPHABET.len());
            SECRET_ALPHABET[idx] as char
        })
        .collect()
}
