//! Line splitting and joining for documents.
//!
//! Input may use LF, CRLF or a mix of both. Output always uses LF.

/// Line terminators found in a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
    Mixed,
}

/// Classify the terminators of `content`; text without any counts as LF.
pub fn detect_line_ending(content: &str) -> LineEnding {
    let crlf = content.matches("\r\n").count();
    let lf = content.matches('\n').count();

    match (crlf, lf - crlf) {
        (0, _) => LineEnding::Lf,
        (_, 0) => LineEnding::Crlf,
        _ => LineEnding::Mixed,
    }
}

/// A document broken into lines, without line terminators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitText {
    pub lines: Vec<String>,
    /// Whether the source ended with a line terminator
    pub trailing_newline: bool,
}

/// Split content into lines, dropping `\n` / `\r\n` terminators.
///
/// A trailing terminator does not produce an extra empty line; it is
/// recorded in [`SplitText::trailing_newline`] instead.
pub fn split_lines(content: &str) -> SplitText {
    let trailing_newline = content.ends_with('\n');
    let lines = content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect();

    SplitText {
        lines,
        trailing_newline,
    }
}

/// Join lines with LF, optionally terminating the last one.
pub fn join_lines<S: AsRef<str>>(lines: &[S], trailing_newline: bool) -> String {
    let capacity = lines.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut result = String::with_capacity(capacity);

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(line.as_ref());
    }

    if trailing_newline && !lines.is_empty() {
        result.push('\n');
    }

    result
}
