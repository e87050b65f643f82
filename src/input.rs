//! Input reading
//!
//! Reads the integer under test from a byte reader (stdin in the binary).
//! Only the first whitespace-delimited token is consumed; anything after it,
//! including bytes that are not UTF-8, is left unread.

use std::io::{BufRead, ErrorKind};

use log::{debug, warn};

use crate::config::ParsePolicy;
use crate::error::InputError;

/// Longest token accepted; `i64::MIN` needs 20 bytes
pub const MAX_TOKEN_BYTES: usize = 64;

/// Read the first integer token from `reader`
///
/// Leading ASCII whitespace, newlines included, is skipped. The token must
/// parse as an `i64` in base 10; a leading `+` or `-` is accepted. At most
/// [`MAX_TOKEN_BYTES`] + 1 token bytes are buffered before the token is
/// rejected as invalid.
pub fn read_number<R: BufRead>(mut reader: R) -> Result<i64, InputError> {
    let token = read_token(&mut reader)?;
    debug!("read token {:?}", String::from_utf8_lossy(&token));
    parse_token(&token)
}

/// Read the first integer token from `reader`, applying `policy` to parse
/// failures
///
/// I/O failures are returned whatever the policy.
pub fn read_number_with_policy<R: BufRead>(
    reader: R,
    policy: ParsePolicy,
) -> Result<i64, InputError> {
    match read_number(reader) {
        Err(err) if err.is_parse_failure() && policy == ParsePolicy::Zero => {
            warn!("{err}, using 0");
            Ok(0)
        },
        result => result,
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, InputError> {
    let mut token = Vec::new();

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if available.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in available {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
                if token.len() > MAX_TOKEN_BYTES {
                    used += 1;
                    done = true;
                    break;
                }
            }
            used += 1;
        }
        reader.consume(used);

        if done {
            break;
        }
    }

    if token.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(token)
    }
}

fn parse_token(token: &[u8]) -> Result<i64, InputError> {
    let invalid = || {
        let shown_len = token.len().min(MAX_TOKEN_BYTES);
        let mut shown = String::from_utf8_lossy(&token[..shown_len]).into_owned();
        if token.len() > MAX_TOKEN_BYTES {
            shown.push_str("...");
        }
        InputError::Invalid { token: shown }
    };

    if token.len() > MAX_TOKEN_BYTES {
        return Err(invalid());
    }

    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse::<i64>().ok())
        .ok_or_else(invalid)
}
