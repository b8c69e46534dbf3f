//! Reading input text for the single-label commands

use crate::cli::TextArgs;
use harf::error::Result;
use std::fs::File;
use std::io::{self, Read};

/// Collect the input text
///
/// Priority: positional > `--text` > `--text-file` > stdin. Escapes are
/// only decoded in argument text, never in file or stdin content.
pub fn get_input_text(args: &TextArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(decode_unicode_escapes(text));
    }

    if let Some(ref text) = args.text_arg {
        return Ok(decode_unicode_escapes(text));
    }

    if let Some(ref path) = args.text_file {
        log::debug!("Reading text from {}", path.display());
        let mut file = File::open(path)?;
        let mut text = String::new();
        file.read_to_string(&mut text)?;
        return Ok(text);
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Decode `\uXXXX` and `\u{X...}` escapes; anything else is kept verbatim
pub fn decode_unicode_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' || chars.peek() != Some(&'u') {
            result.push(ch);
            continue;
        }

        // Work on a copy so a malformed escape can be emitted as typed
        let mut lookahead = chars.clone();
        lookahead.next(); // 'u'

        let mut hex = String::new();
        if lookahead.peek() == Some(&'{') {
            lookahead.next();
            let mut closed = false;
            for c in lookahead.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                hex.push(c);
            }
            if !closed {
                hex.clear();
            }
        } else {
            for _ in 0..4 {
                match lookahead.peek() {
                    Some(c) if c.is_ascii_hexdigit() => {
                        hex.push(*c);
                        lookahead.next();
                    },
                    _ => break,
                }
            }
            if hex.len() != 4 {
                hex.clear();
            }
        }

        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
            Some(decoded) => {
                result.push(decoded);
                chars = lookahead;
            },
            None => result.push(ch),
        }
    }

    result
}
