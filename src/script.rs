// Script parsing: locate the embedded platform token and split it from
// the payload. Pure string work, no I/O, so the whole contract is unit
// testable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern a script must embed somewhere to be pushable. Group 1 is the
/// 32 character credential; everything after the full match is payload.
pub const TOKEN_PATTERN: &str = "botvs@([a-zA-Z0-9]{32})";

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN_PATTERN).unwrap());

/// A script split into the credential and the content to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub token: String,
    pub body: String,
}

/// Why a document could not be turned into a [`Script`]. The `Display`
/// strings are the status messages shown to the user as-is.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid empty file! - {0}")]
    EmptyFile(String),

    #[error("invalid botvs token! - botvs@([a-zA-Z0-9]{{32}})")]
    TokenMissing,
}

/// Split `text` into token and payload. `name` only feeds the empty-file
/// message. The payload is the text after the token marker, trimmed of
/// surrounding whitespace; whatever precedes the marker is discarded.
pub fn parse(name: &str, text: &str) -> Result<Script, ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyFile(name.to_string()));
    }
    let caps = TOKEN.captures(text).ok_or(ParseError::TokenMissing)?;
    let full = caps.get(0).unwrap();
    Ok(Script {
        token: caps[1].to_string(),
        body: text[full.end()..].trim().to_string(),
    })
}
