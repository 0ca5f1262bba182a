//! Symbol extraction from document text
//!
//! The "symbol" is the literal word or selection at the interaction point,
//! not a semantically resolved identifier. Word boundaries follow the usual
//! identifier rule: contiguous runs of alphanumerics and underscores.

/// Zero-based line/column location in a document. Columns count characters,
/// not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: u32,
    pub column: u32,
}

/// Where to look for the symbol: a collapsed cursor or an explicit span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Cursor(Cursor),
    Span { start: Cursor, end: Cursor },
}

/// Why extraction produced no usable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSymbol {
    /// No word range encloses the position.
    NotFound,
    /// A range existed but its text trims to nothing.
    Empty,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the word at a given position in the source.
pub fn word_at(text: &str, cursor: Cursor) -> Option<String> {
    let line = text.lines().nth(cursor.line as usize)?;
    let chars: Vec<char> = line.chars().collect();
    let col = cursor.column as usize;

    if col > chars.len() {
        return None;
    }

    // Find word boundaries around the cursor
    let start = chars[..col]
        .iter()
        .rposition(|c| !is_word_char(*c))
        .map(|i| i + 1)
        .unwrap_or(0);

    let end = chars[col..]
        .iter()
        .position(|c| !is_word_char(*c))
        .map(|i| col + i)
        .unwrap_or(chars.len());

    if start >= end {
        return None;
    }

    Some(chars[start..end].iter().collect())
}

/// Extract the text covered by a span, clamped to the document.
pub fn span_text(text: &str, start: Cursor, end: Cursor) -> String {
    let lines: Vec<&str> = text.lines().collect();

    if start.line == end.line {
        let Some(line) = lines.get(start.line as usize) else {
            return String::new();
        };
        let chars: Vec<char> = line.chars().collect();
        let from = (start.column as usize).min(chars.len());
        let to = (end.column as usize).min(chars.len());
        return chars[from..to.max(from)].iter().collect();
    }

    let mut result = String::new();
    for line_num in start.line..=end.line {
        let Some(line) = lines.get(line_num as usize) else {
            break;
        };
        let chars: Vec<char> = line.chars().collect();
        if line_num == start.line {
            let from = (start.column as usize).min(chars.len());
            result.extend(&chars[from..]);
        } else if line_num == end.line {
            let to = (end.column as usize).min(chars.len());
            result.extend(&chars[..to]);
            break;
        } else {
            result.push_str(line);
        }
        result.push('\n');
    }
    result
}

/// Determine the symbol text at the target.
///
/// An explicit non-empty span yields its content; a collapsed position
/// yields the enclosing word. The result is trimmed and never empty.
pub fn extract_symbol(text: &str, target: Target) -> Result<String, NoSymbol> {
    let raw = match target {
        Target::Span { start, end } if start != end => span_text(text, start, end),
        Target::Span { start, .. } => word_at(text, start).ok_or(NoSymbol::NotFound)?,
        Target::Cursor(cursor) => word_at(text, cursor).ok_or(NoSymbol::NotFound)?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NoSymbol::Empty);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(line: u32, column: u32) -> Cursor {
        Cursor { line, column }
    }

    #[test]
    fn word_in_the_middle_of_a_line() {
        let text = "fn handle_request(req: Request) {}";
        assert_eq!(word_at(text, at(0, 5)).as_deref(), Some("handle_request"));
    }

    #[test]
    fn cursor_at_word_start_and_end() {
        let text = "UserProfile";
        assert_eq!(word_at(text, at(0, 0)).as_deref(), Some("UserProfile"));
        assert_eq!(word_at(text, at(0, 11)).as_deref(), Some("UserProfile"));
    }

    #[test]
    fn cursor_just_after_a_word_attaches_to_it() {
        let text = "foo bar";
        assert_eq!(word_at(text, at(0, 3)).as_deref(), Some("foo"));
    }

    #[test]
    fn no_word_in_whitespace() {
        assert_eq!(word_at("foo  bar", at(0, 4)), None);
        assert_eq!(word_at("   ", at(0, 1)), None);
    }

    #[test]
    fn positions_outside_the_document() {
        assert_eq!(word_at("one line", at(5, 0)), None);
        assert_eq!(word_at("short", at(0, 99)), None);
    }

    #[test]
    fn words_are_not_split_on_underscores_or_digits() {
        assert_eq!(word_at("v2_final ", at(0, 3)).as_deref(), Some("v2_final"));
    }

    #[test]
    fn span_on_a_single_line() {
        let text = "let answer = 42;";
        assert_eq!(span_text(text, at(0, 4), at(0, 10)), "answer");
    }

    #[test]
    fn span_across_lines() {
        let text = "first\nsecond\nthird";
        assert_eq!(span_text(text, at(0, 3), at(2, 2)), "st\nsecond\nth");
    }

    #[test]
    fn span_clamps_to_line_length() {
        assert_eq!(span_text("ab", at(0, 0), at(0, 99)), "ab");
    }

    #[test]
    fn extract_prefers_the_selection() {
        let text = "one two three";
        let target = Target::Span {
            start: at(0, 4),
            end: at(0, 7),
        };
        assert_eq!(extract_symbol(text, target), Ok("two".to_string()));
    }

    #[test]
    fn extract_trims_the_selection() {
        let text = "  padded  ";
        let target = Target::Span {
            start: at(0, 0),
            end: at(0, 10),
        };
        assert_eq!(extract_symbol(text, target), Ok("padded".to_string()));
    }

    #[test]
    fn whitespace_only_selection_is_rejected() {
        let text = "a     b";
        let target = Target::Span {
            start: at(0, 2),
            end: at(0, 5),
        };
        assert_eq!(extract_symbol(text, target), Err(NoSymbol::Empty));
    }

    #[test]
    fn collapsed_span_falls_back_to_the_word() {
        let text = "rename_me()";
        let target = Target::Span {
            start: at(0, 3),
            end: at(0, 3),
        };
        assert_eq!(extract_symbol(text, target), Ok("rename_me".to_string()));
    }

    #[test]
    fn cursor_with_no_adjacent_word_is_not_found() {
        let text = "x  +  y";
        assert_eq!(
            extract_symbol(text, Target::Cursor(at(0, 4))),
            Err(NoSymbol::NotFound)
        );
    }
}
