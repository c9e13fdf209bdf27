///
/// Cursor token codec.
///
/// Owns the opaque wire format handed to clients for `before`/`after`
/// parameters: lowercase hex of `[version][CBOR(CursorValue)]`.
/// Contains no pagination semantics.
///
use crate::cursor::CursorValue;
use std::panic::{AssertUnwindSafe, catch_unwind};
use thiserror::Error as ThisError;

// Decode bound for untrusted token input.
const MAX_CURSOR_TOKEN_HEX_LEN: usize = 8 * 1024;

const CURSOR_TOKEN_V1: u8 = 1;

///
/// CursorTokenError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CursorTokenError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },

    #[error("unsupported cursor token version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("failed to encode cursor token: {0}")]
    Encode(String),

    #[error("failed to decode cursor token: {0}")]
    Decode(String),
}

/// Encode one cursor value as an opaque hex token.
pub fn encode_cursor_token(value: &CursorValue) -> Result<String, CursorTokenError> {
    let payload =
        serde_cbor::to_vec(value).map_err(|err| CursorTokenError::Encode(err.to_string()))?;

    let mut bytes = Vec::with_capacity(payload.len() + 1);
    bytes.push(CURSOR_TOKEN_V1);
    bytes.extend_from_slice(&payload);

    Ok(encode_hex(&bytes))
}

/// Decode an opaque hex token back into its cursor value.
///
/// Surrounding whitespace is trimmed; hex digits may be either case.
pub fn decode_cursor_token(token: &str) -> Result<CursorValue, CursorTokenError> {
    let bytes = decode_hex(token)?;
    let Some((&version, payload)) = bytes.split_first() else {
        return Err(CursorTokenError::Empty);
    };
    if version != CURSOR_TOKEN_V1 {
        return Err(CursorTokenError::UnsupportedVersion { version });
    }
    if payload.is_empty() {
        return Err(CursorTokenError::Decode("missing cursor payload".to_string()));
    }

    // serde_cbor must never take the caller down on hostile input.
    match catch_unwind(AssertUnwindSafe(|| {
        serde_cbor::from_slice::<CursorValue>(payload)
    })) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(CursorTokenError::Decode(err.to_string())),
        Err(_) => Err(CursorTokenError::Decode(
            "panic during CBOR deserialization".to_string(),
        )),
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn encode_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
        .map(|nibble| char::from(HEX_DIGITS[usize::from(nibble)]))
        .collect()
}

// Trimmed input only; positions in errors are 1-based within the trimmed token.
fn decode_hex(token: &str) -> Result<Vec<u8>, CursorTokenError> {
    let token = token.trim();

    match token.len() {
        0 => return Err(CursorTokenError::Empty),
        len if len > MAX_CURSOR_TOKEN_HEX_LEN => {
            return Err(CursorTokenError::TooLong {
                len,
                max: MAX_CURSOR_TOKEN_HEX_LEN,
            });
        }
        len if !len.is_multiple_of(2) => return Err(CursorTokenError::OddLength),
        _ => {}
    }

    token
        .as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, digits)| {
            let offset = pair * 2;
            let high = hex_value(digits[0], offset + 1)?;
            let low = hex_value(digits[1], offset + 2)?;

            Ok((high << 4) | low)
        })
        .collect()
}

fn hex_value(digit: u8, position: usize) -> Result<u8, CursorTokenError> {
    char::from(digit)
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(CursorTokenError::InvalidHex { position })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rejects_empty_and_whitespace_tokens() {
        assert_eq!(decode_cursor_token(""), Err(CursorTokenError::Empty));
        assert_eq!(decode_cursor_token("  \n\t"), Err(CursorTokenError::Empty));
    }

    #[test]
    fn decode_rejects_odd_length_tokens() {
        assert_eq!(decode_cursor_token("abc"), Err(CursorTokenError::OddLength));
    }

    #[test]
    fn decode_reports_one_based_invalid_hex_position() {
        assert_eq!(
            decode_cursor_token("01zz"),
            Err(CursorTokenError::InvalidHex { position: 3 })
        );
    }

    #[test]
    fn decode_enforces_max_token_length() {
        let oversized = "aa".repeat(MAX_CURSOR_TOKEN_HEX_LEN / 2 + 1);
        assert_eq!(
            decode_cursor_token(&oversized),
            Err(CursorTokenError::TooLong {
                len: MAX_CURSOR_TOKEN_HEX_LEN + 2,
                max: MAX_CURSOR_TOKEN_HEX_LEN,
            })
        );
    }

    #[test]
    fn decode_rejects_unknown_version_and_missing_payload() {
        assert_eq!(
            decode_cursor_token("02ff"),
            Err(CursorTokenError::UnsupportedVersion { version: 2 })
        );
        assert!(matches!(
            decode_cursor_token("01"),
            Err(CursorTokenError::Decode(_))
        ));
    }

    #[test]
    fn token_is_lowercase_hex_with_version_prefix() {
        let token = encode_cursor_token(&CursorValue::Int(10)).expect("token should encode");
        assert!(token.starts_with("01"));
        assert!(token.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        let decoded =
            decode_cursor_token(&token.to_uppercase()).expect("uppercase token should decode");
        assert_eq!(decoded, CursorValue::Int(10));
    }

    #[test]
    fn decode_accepts_token_at_exact_length_cap() {
        // Text payload overhead is constant once the length needs two bytes.
        let sample_len = 300;
        let overhead = encode_cursor_token(&CursorValue::Text("x".repeat(sample_len)))
            .expect("token should encode")
            .len()
            - sample_len * 2;
        let text_len = (MAX_CURSOR_TOKEN_HEX_LEN - overhead) / 2;

        let value = CursorValue::Text("x".repeat(text_len));
        let token = encode_cursor_token(&value).expect("token should encode");
        assert_eq!(token.len(), MAX_CURSOR_TOKEN_HEX_LEN);
        assert_eq!(
            decode_cursor_token(&token).expect("token at the cap should decode"),
            value
        );

        let longer = encode_cursor_token(&CursorValue::Text("x".repeat(text_len + 1)))
            .expect("token should encode");
        assert_eq!(
            decode_cursor_token(&longer),
            Err(CursorTokenError::TooLong {
                len: MAX_CURSOR_TOKEN_HEX_LEN + 2,
                max: MAX_CURSOR_TOKEN_HEX_LEN,
            })
        );
    }

    #[test]
    fn length_cap_applies_after_trimming_whitespace() {
        let padded = format!("  {}\n", "0".repeat(MAX_CURSOR_TOKEN_HEX_LEN));
        assert!(matches!(
            decode_cursor_token(&padded),
            Err(CursorTokenError::UnsupportedVersion { version: 0 })
        ));
    }

    #[test]
    fn decode_accepts_mixed_case_token_with_surrounding_whitespace() {
        let value = CursorValue::from("thread-42");
        let token = encode_cursor_token(&value).expect("token should encode");
        let mixed: String = token
            .chars()
            .enumerate()
            .map(|(idx, c)| if idx % 2 == 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        assert_ne!(mixed, token);

        let decoded = decode_cursor_token(&format!("\t {mixed} \r\n"))
            .expect("mixed-case padded token should decode");
        assert_eq!(decoded, value);
    }

    #[test]
    fn invalid_hex_position_ignores_leading_whitespace() {
        assert_eq!(
            decode_cursor_token("   01g0"),
            Err(CursorTokenError::InvalidHex { position: 3 })
        );
        assert_eq!(
            decode_cursor_token("010-"),
            Err(CursorTokenError::InvalidHex { position: 4 })
        );
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        assert!(matches!(
            decode_cursor_token("01ffffffff"),
            Err(CursorTokenError::Decode(_))
        ));
    }
}
