//! Password hashing for mailsim.
//!
//! The hash is a 32-bit polynomial rolling checksum used only for the
//! equality check at login. It is not a cryptographic digest.

use thiserror::Error;

/// Password-related errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Password verification failed (wrong password).
    #[error("password verification failed")]
    VerificationFailed,
}

/// Hash a password.
///
/// For every character code `c` the accumulator is updated as
/// `c + (acc << 6) + (acc << 16) - acc`, wrapping at 32 bits. Character
/// codes are the UTF-8 bytes sign-extended the way a signed C `char`
/// is, and hashing stops at an embedded NUL as it would over a C
/// string. Existing hash values stay comparable across platforms.
///
/// # Examples
///
/// ```
/// use mailsim::hash_password;
///
/// assert_eq!(hash_password(""), 0);
/// assert_eq!(hash_password("a"), 97);
/// ```
pub fn hash_password(password: &str) -> u32 {
    password
        .bytes()
        .take_while(|&b| b != 0)
        .fold(0u32, |acc, b| {
            // `as i8 as u32` sign-extends bytes >= 0x80.
            let c = b as i8 as u32;
            c.wrapping_add(acc << 6)
                .wrapping_add(acc << 16)
                .wrapping_sub(acc)
        })
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: u32) -> Result<(), PasswordError> {
    if hash_password(password) == hash {
        Ok(())
    } else {
        Err(PasswordError::VerificationFailed)
    }
}
