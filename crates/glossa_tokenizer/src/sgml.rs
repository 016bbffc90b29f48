//! Tag sub-tokenizer.
//!
//! Re-lexes one `<...>` span into its tag name and attribute names.
//! Attribute values are skipped. Unquoted values use a heuristic skip
//! through the next word run, which is not real HTML/XML parsing.

use crate::patterns::{IDENTIFIER, ML_ASSIGN, ML_TAG, QUOTE, QUOTE_END, SQUOTE, SQUOTE_END};
use glossa_scanner::{Pattern, Scanner};

/// Tokens of a single tag span such as `<a href="x">`.
pub fn extract_tag_tokens(span: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    extract_into(span, &mut tokens);
    tokens
}

/// Append the tokens of `span` to `tokens`.
pub(crate) fn extract_into(span: &str, tokens: &mut Vec<String>) {
    let mut s = Scanner::new(span);

    while !s.is_eos() {
        if let Some(tag) = s.scan(&ML_TAG) {
            // `<div` and `</div` both become a closed tag name.
            tokens.push(format!("{tag}>"));
        } else if let Some(assign) = s.scan(&ML_ASSIGN) {
            tokens.push(assign.to_string());
            skip_attribute_value(&mut s);
        } else if let Some(ident) = s.scan(&IDENTIFIER) {
            tokens.push(ident.to_string());
        } else {
            s.get_char();
        }
    }
}

/// Skip the value following `name=`. A quote that is never closed leaves
/// the cursor after the opening quote.
fn skip_attribute_value(s: &mut Scanner<'_>) {
    if s.scan(&QUOTE).is_some() {
        skip_quoted(s, "\"", &QUOTE_END);
    } else if s.scan(&SQUOTE).is_some() {
        skip_quoted(s, "'", &SQUOTE_END);
    } else {
        s.skip_until(&IDENTIFIER);
    }
}

/// Skip a quoted value whose opening `quote` was just consumed.
fn skip_quoted(s: &mut Scanner<'_>, quote: &str, end: &Pattern) {
    if s.peek(1) == quote {
        // Empty value: `end` needs a character before the closing quote.
        s.get_char();
    } else {
        s.skip_until(end);
    }
}
