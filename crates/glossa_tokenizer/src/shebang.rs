//! Interpreter extraction from `#!` lines.

use crate::patterns::{ENV_ASSIGNMENT, NON_SPACE, SHEBANG_PREFIX, SPACE};
use glossa_scanner::Scanner;

/// The interpreter named by a `#!` line, without version digits.
///
/// `#!/usr/bin/python3` and `#!/usr/bin/env python3` both give `python`.
/// Through `env`, one leading `KEY=value` assignment is skipped. Returns
/// `None` when the line names no interpreter.
pub fn interpreter(line: &str) -> Option<String> {
    let mut s = Scanner::new(line);
    s.scan(&SHEBANG_PREFIX)?;
    let path = s.scan(&NON_SPACE)?;

    let mut name = path.rsplit('/').next().unwrap_or(path);
    if name == "env" {
        s.scan(&SPACE);
        s.scan(&ENV_ASSIGNMENT);
        name = s.scan(&NON_SPACE)?;
    }

    Some(strip_version(name).to_string())
}

/// The first run of non-digit characters; empty when there is none.
fn strip_version(name: &str) -> &str {
    name.split(|c: char| c.is_ascii_digit())
        .find(|part| !part.is_empty())
        .unwrap_or("")
}
