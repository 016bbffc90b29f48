//! Process-wide pattern tables.
//!
//! Character classes are spelled out in ASCII: word is `[0-9A-Za-z_]`,
//! digit is `[0-9]` and space is `[\t\n\f\r ]`. Patterns carry no `^`;
//! anchoring is the scanner's job.

use glossa_scanner::Pattern;
use lazy_static::lazy_static;
use std::collections::HashMap;

fn compile(name: &str, source: &str) -> Pattern {
    Pattern::new(source).unwrap_or_else(|err| panic!("invalid `{name}` pattern: {err}"))
}

lazy_static! {
    // Main loop
    pub(crate) static ref SHEBANG: Pattern = compile("shebang", r"#!.+");
    pub(crate) static ref END_OF_LINE: Pattern = compile("end_of_line", r"\n|\z");
    pub(crate) static ref SINGLE_LINE_COMMENT: Pattern =
        compile("single_line_comment", r#"[\t\n\f\r ]*(?:// |-- |# |% |" )"#);
    pub(crate) static ref MULTI_LINE_COMMENT: Pattern =
        compile("multi_line_comment", r#"/\*|<!--|\{-|\(\*|"""|'''"#);
    pub(crate) static ref QUOTE: Pattern = compile("quote", r#"""#);
    pub(crate) static ref QUOTE_END: Pattern = compile("quote_end", r#"[^\\]""#);
    pub(crate) static ref SQUOTE: Pattern = compile("squote", r"'");
    pub(crate) static ref SQUOTE_END: Pattern = compile("squote_end", r"[^\\]'");
    pub(crate) static ref NUMBER_LITERAL: Pattern =
        compile("number_literal", r"(?:0x)?[0-9][0-9.]*");
    pub(crate) static ref SGML: Pattern = compile("sgml", r"<[^\t\n\f\r <>][^<>]*>");
    pub(crate) static ref PUNCTUATION: Pattern = compile("punctuation", r"[;{}()\[\]]");
    pub(crate) static ref REGULAR_TOKEN: Pattern =
        compile("regular_token", r"[0-9A-Za-z_.@#/*]+");
    pub(crate) static ref OPERATOR: Pattern =
        compile("operator", r"<<?|\+|-|\*|/|%|&&?|\|\|?");

    // Tag sub-tokenizer
    pub(crate) static ref ML_TAG: Pattern = compile("ml_tag", r"</?[^\t\n\f\r >]+");
    pub(crate) static ref ML_ASSIGN: Pattern = compile("ml_assign", r"[0-9A-Za-z_]+=");
    pub(crate) static ref IDENTIFIER: Pattern = compile("identifier", r"[0-9A-Za-z_]+");

    // Shebang extractor
    pub(crate) static ref SHEBANG_PREFIX: Pattern =
        compile("shebang_prefix", r"#![\t\n\f\r ]*");
    pub(crate) static ref SPACE: Pattern = compile("space", r"[\t\n\f\r ]+");
    pub(crate) static ref NON_SPACE: Pattern = compile("non_space", r"[^\t\n\f\r ]+");
    pub(crate) static ref ENV_ASSIGNMENT: Pattern =
        compile("env_assignment", r".*=[^\t\n\f\r ]+[\t\n\f\r ]+");

    /// Opening comment marker to the pattern of its closing marker.
    static ref COMMENT_DELIMITERS: HashMap<&'static str, Pattern> = HashMap::from([
        ("/*", compile("c_comment_end", r"\*/")),
        ("<!--", compile("xml_comment_end", r"-->")),
        ("{-", compile("haskell_comment_end", r"-\}")),
        ("(*", compile("ml_comment_end", r"\*\)")),
        (r#"""""#, compile("python_docstring_end", r#"""""#)),
        ("'''", compile("python_single_docstring_end", r"'''")),
    ]);
}

/// The closing pattern for a multi-line comment opener.
pub(crate) fn closing_delimiter(open: &str) -> Option<&'static Pattern> {
    COMMENT_DELIMITERS.get(open)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_scanner::Scanner;

    #[test]
    fn test_every_opener_has_a_closer() {
        for open in ["/*", "<!--", "{-", "(*", r#"""""#, "'''"] {
            let mut s = Scanner::new(open);
            assert_eq!(s.scan(&MULTI_LINE_COMMENT), Some(open));
            assert!(closing_delimiter(open).is_some(), "no closer for {open}");
        }
    }

    #[test]
    fn test_word_class_is_ascii() {
        let mut s = Scanner::new("naïve");
        assert_eq!(s.scan(&REGULAR_TOKEN), Some("na"));
    }

    #[test]
    #[should_panic(expected = "invalid `broken` pattern")]
    fn test_compile_names_the_bad_pattern() {
        compile("broken", "(unclosed");
    }

    #[test]
    fn test_number_literal_hex_needs_decimal_digit() {
        let mut s = Scanner::new("0xFF");
        assert_eq!(s.scan(&NUMBER_LITERAL), Some("0"));
        let mut s = Scanner::new("0x1F");
        assert_eq!(s.scan(&NUMBER_LITERAL), Some("0x1"));
    }
}
