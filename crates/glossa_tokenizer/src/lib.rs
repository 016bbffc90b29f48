//! glossa_tokenizer: Language-agnostic token extraction.
//!
//! Turns source text of unknown language into the token sequence a
//! statistical language classifier consumes. One heuristic grammar is
//! applied to every input:
//! - comments, string contents and numeric literals are dropped
//! - punctuation, operators and word-like runs are kept verbatim
//! - angle-bracket tags are re-lexed into tag names and attribute names
//! - a `#!` interpreter line becomes a `SHEBANG#!<name>` marker
//!
//! The entry point is [`extract_tokens`]. It never fails: unterminated
//! strings or comments simply run to the end of the input.

mod patterns;
mod sgml;
mod shebang;
mod tokenizer;

pub use sgml::extract_tag_tokens;
pub use shebang::interpreter;
pub use tokenizer::{extract_tokens, SHEBANG_MARKER};
