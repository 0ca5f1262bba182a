//! Type conversions between LSP and core positions

use namesake_core::symbol::{Cursor, Target};
use tower_lsp::lsp_types::{Position, Range};

/// Convert an LSP position to a core cursor
pub fn cursor_from_position(position: Position) -> Cursor {
    Cursor {
        line: position.line,
        column: position.character,
    }
}

/// Interpret a request range: a collapsed range means "the cursor",
/// anything else is an explicit selection.
pub fn target_from_range(range: Range) -> Target {
    if range.start == range.end {
        Target::Cursor(cursor_from_position(range.start))
    } else {
        Target::Span {
            start: cursor_from_position(range.start),
            end: cursor_from_position(range.end),
        }
    }
}
