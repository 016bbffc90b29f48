//! Compiled patterns consumed by the scanner.

use regex::Regex;
use std::fmt;

/// A regular expression compiled twice: once anchored at the start of the
/// haystack and once unanchored.
///
/// The scanner always matches against the remaining text, so the anchored
/// form is what [`Scanner::scan`](crate::Scanner::scan) needs and the
/// unanchored form is what the `*_until` searches need. A failed `scan`
/// does not search the rest of the text.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    anchored: Regex,
    search: Regex,
}

impl Pattern {
    /// Compile a pattern. `source` must not carry its own `^` anchor.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{source})"))?;
        let search = Regex::new(source)?;
        Ok(Self {
            source: source.to_string(),
            anchored,
            search,
        })
    }

    /// The form that only matches at the start of the haystack.
    #[inline]
    pub(crate) fn anchored(&self) -> &Regex {
        &self.anchored
    }

    /// The form that matches anywhere in the haystack.
    #[inline]
    pub(crate) fn search(&self) -> &Regex {
        &self.search
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", self.source)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_form() {
        let pattern = Pattern::new("b+").unwrap();
        assert!(pattern.anchored().find("abb").is_none());
        assert_eq!(pattern.anchored().find("bba").map(|m| m.end()), Some(2));
    }

    #[test]
    fn test_alternation_is_grouped_when_anchored() {
        // Without the group, `^x|y` would let `y` match anywhere.
        let pattern = Pattern::new("x|y").unwrap();
        assert!(pattern.anchored().find("ay").is_none());
        assert_eq!(pattern.search().find("ay").map(|m| m.start()), Some(1));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Pattern::new("(unclosed").is_err());
    }

    #[test]
    fn test_display() {
        let pattern = Pattern::new(r"\n|\z").unwrap();
        assert_eq!(pattern.to_string(), r"\n|\z");
        assert_eq!(format!("{:?}", pattern), r#"Pattern("\\n|\\z")"#);
    }
}
