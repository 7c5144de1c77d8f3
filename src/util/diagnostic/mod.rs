//! Diagnostic rendering
//!
//! Parser errors carry a snapshot of the source surrounding the offending
//! token so that the message is self-contained:
//!
//! ```text
//! 0011: type WidgetLike interface {
//! 0012:     // Methods
//!  >>>─────⌃
//! 0013:     Resize(width int, height int)
//! ```

use crate::util::span::Position;

/// Number of columns a tab occupies in a rendered source line
pub const TAB_WIDTH: usize = 4;

/// Render the line before, the line containing `position`, a caret row and
/// the line after.
pub fn render_context(
    source: &str,
    position: Position,
) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let line = position.line;
    let mut output = String::new();

    if line == 0 || line > lines.len() {
        return output;
    }

    if line > 1 {
        output.push_str(&numbered(line - 1, lines[line - 2]));
    }
    output.push_str(&numbered(line, lines[line - 1]));

    output.push_str(" >>>─");
    let width = display_width(lines[line - 1], position.column.saturating_sub(1));
    for _ in 0..=width {
        output.push('─');
    }
    output.push_str("⌃\n");

    if line < lines.len() {
        output.push_str(&numbered(line + 1, lines[line]));
    }
    output.push('\n');
    output
}

fn numbered(
    number: usize,
    text: &str,
) -> String {
    format!("{:04}: {}\n", number, expand_tabs(text))
}

/// Replace tabs with spaces so that rendered lines and the caret row agree
pub fn expand_tabs(text: &str) -> String {
    text.replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Rendered width of the first `count` characters of `text`
fn display_width(
    text: &str,
    count: usize,
) -> usize {
    text.chars()
        .take(count)
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
