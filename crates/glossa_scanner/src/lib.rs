//! glossa_scanner: Cursor-based text scanner.
//!
//! A small string scanner in the style of Ruby's `StringScanner`. It holds
//! an immutable buffer and a byte cursor, and exposes:
//! - anchored matching at the cursor (`scan`)
//! - unanchored searching from the cursor (`scan_until`, `skip_until`)
//! - single character consumption and lookahead (`get_char`, `peek`)
//! - position queries (`is_eos`, `is_bol`) and `terminate`
//!
//! Every primitive reports failure through `Option` and only ever moves
//! the cursor forward, except `terminate` which jumps to the end.

mod pattern;
mod scanner;

pub use pattern::Pattern;
pub use scanner::Scanner;
