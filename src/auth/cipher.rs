//! Password obfuscation via the ROT47 substitution cipher.
//!
//! # Responsibilities
//! - Rotate each printable ASCII character (codes 33-126) by 47 places
//! - Pass characters outside that range through unchanged
//!
//! # Design Decisions
//! - 47 + 47 ≡ 0 (mod 94), so the transform is its own inverse and one
//!   function covers encode and decode
//! - Pass-through for out-of-range characters keeps the involution
//!   property on arbitrary input

/// Apply the ROT47 substitution to `text`.
///
/// Characters in `'!'..='~'` rotate by 47 within the 94-character
/// printable range; everything else (spaces, control characters,
/// non-ASCII) is left untouched.
pub fn rot47(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => char::from(b'!' + (c as u8 - b'!' + 47) % 94),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_rotations() {
        assert_eq!(rot47("!"), "P");
        assert_eq!(rot47("~"), "O");
        assert_eq!(rot47("abc"), "234");
        assert_eq!(rot47("password"), "A2DDH@C5");
    }

    #[test]
    fn test_involution() {
        for s in ["secret", "hunter2", "!@#$%^&*()", "The quick brown fox"] {
            assert_eq!(rot47(&rot47(s)), s);
        }
    }

    #[test]
    fn test_out_of_range_passthrough() {
        assert_eq!(rot47(" "), " ");
        assert_eq!(rot47("a b"), "2 3");
        assert_eq!(rot47("naïve"), "?2ïG6");
    }

    #[test]
    fn test_empty() {
        assert_eq!(rot47(""), "");
    }
}
