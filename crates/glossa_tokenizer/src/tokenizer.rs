//! The token extraction loop.
//!
//! Each iteration tries a fixed list of rules at the cursor and runs the
//! first one that matches. Priority decides ties, not match length: a
//! quote is always a string opener and never reaches the operator rule.

use crate::patterns::*;
use crate::sgml;
use crate::shebang;
use glossa_scanner::{Pattern, Scanner};
use tracing::{debug, trace};

/// Prefix of the synthetic token emitted for an interpreter line.
pub const SHEBANG_MARKER: &str = "SHEBANG#!";

/// A rule of the main cascade, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Shebang,
    LineComment,
    BlockComment,
    DoubleQuoted,
    SingleQuoted,
    Number,
    Tag,
    Punctuation,
    Regular,
    Operator,
}

impl Rule {
    /// Every rule, highest priority first. Anything none of them match is
    /// consumed one character at a time and discarded.
    const ALL: [Rule; 10] = [
        Rule::Shebang,
        Rule::LineComment,
        Rule::BlockComment,
        Rule::DoubleQuoted,
        Rule::SingleQuoted,
        Rule::Number,
        Rule::Tag,
        Rule::Punctuation,
        Rule::Regular,
        Rule::Operator,
    ];

    /// Try this rule at the cursor. Returns whether it matched; a rule that
    /// does not match leaves the cursor untouched.
    fn apply(self, s: &mut Scanner<'_>, tokens: &mut Vec<String>) -> bool {
        match self {
            Rule::Shebang => {
                let Some(line) = s.scan(&SHEBANG) else {
                    return false;
                };
                if let Some(name) = shebang::interpreter(line) {
                    trace!(%name, "interpreter line");
                    tokens.push(format!("{SHEBANG_MARKER}{name}"));
                }
            }
            Rule::LineComment => {
                if !s.is_bol() || s.scan(&SINGLE_LINE_COMMENT).is_none() {
                    return false;
                }
                s.skip_until(&END_OF_LINE);
            }
            Rule::BlockComment => {
                let Some(open) = s.scan(&MULTI_LINE_COMMENT) else {
                    return false;
                };
                match closing_delimiter(open) {
                    Some(close) => skip_or_terminate(s, close),
                    None => s.terminate(),
                }
            }
            Rule::DoubleQuoted => {
                if s.scan(&QUOTE).is_none() {
                    return false;
                }
                skip_string(s, "\"", &QUOTE_END);
            }
            Rule::SingleQuoted => {
                if s.scan(&SQUOTE).is_none() {
                    return false;
                }
                skip_string(s, "'", &SQUOTE_END);
            }
            Rule::Number => return s.scan(&NUMBER_LITERAL).is_some(),
            Rule::Tag => {
                let Some(span) = s.scan(&SGML) else {
                    return false;
                };
                sgml::extract_into(span, tokens);
            }
            Rule::Punctuation => return emit(s, &PUNCTUATION, tokens),
            Rule::Regular => return emit(s, &REGULAR_TOKEN, tokens),
            Rule::Operator => return emit(s, &OPERATOR, tokens),
        }
        true
    }
}

/// Extract the classifier tokens from `text`.
///
/// The result is in source order. The same input always yields the same
/// tokens; no state is kept between calls.
pub fn extract_tokens(text: &str) -> Vec<String> {
    let mut s = Scanner::new(text);
    let mut tokens = Vec::new();

    while !s.is_eos() {
        if !Rule::ALL.iter().any(|rule| rule.apply(&mut s, &mut tokens)) {
            s.get_char();
        }
    }

    debug!(bytes = text.len(), tokens = tokens.len(), "extracted tokens");
    tokens
}

/// Scan `pattern` at the cursor and keep the match as a token.
fn emit(s: &mut Scanner<'_>, pattern: &Pattern, tokens: &mut Vec<String>) -> bool {
    match s.scan(pattern) {
        Some(token) => {
            tokens.push(token.to_string());
            true
        }
        None => false,
    }
}

/// Skip a string body whose opening `quote` was just consumed.
fn skip_string(s: &mut Scanner<'_>, quote: &str, end: &Pattern) {
    if s.peek(1) == quote {
        // Empty literal.
        s.get_char();
    } else {
        skip_or_terminate(s, end);
    }
}

/// Skip past the next `pattern`, or to end-of-stream when it never occurs.
fn skip_or_terminate(s: &mut Scanner<'_>, pattern: &Pattern) {
    if s.skip_until(pattern).is_none() {
        s.terminate();
    }
}
