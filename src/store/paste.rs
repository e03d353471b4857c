//! Clipboard text expansion into list entries.

use crate::constants::MAX_TODO_IDENT;

/// A todo parsed from one pasted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastedTodo {
    pub text: String,
    pub is_completed: bool,
    /// Indentation relative to the least indented pasted line
    pub depth: u32,
}

fn raw_lines(clipboard: &str) -> impl Iterator<Item = &str> {
    clipboard.split(['\n', '\r']).filter(|line| !line.trim().is_empty())
}

/// Whether pasted text spans more than one line
pub fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

/// One trimmed URI per non-blank line
pub fn split_bookmarks(clipboard: &str) -> Vec<String> {
    raw_lines(clipboard).map(|line| line.trim().to_string()).collect()
}

/// One todo per non-blank line, keeping checklist state and nesting
pub fn split_todos(clipboard: &str) -> Vec<PastedTodo> {
    let parsed: Vec<(u32, &str)> = raw_lines(clipboard).map(leading_depth).collect();
    let base = parsed.iter().map(|(depth, _)| *depth).min().unwrap_or(0);

    parsed
        .into_iter()
        .filter_map(|(depth, rest)| {
            let (text, is_completed) = strip_checklist(rest.trim_end());
            if text.is_empty() {
                return None;
            }
            Some(PastedTodo {
                text: text.to_string(),
                is_completed,
                depth: (depth - base).min(MAX_TODO_IDENT),
            })
        })
        .collect()
}

/// Tabs count as one level, spaces as half a level each
fn leading_depth(line: &str) -> (u32, &str) {
    let mut spaces = 0u32;
    let mut tabs = 0u32;
    let mut consumed = 0;
    for ch in line.chars() {
        match ch {
            ' ' => spaces += 1,
            '\t' => tabs += 1,
            _ => break,
        }
        consumed += ch.len_utf8();
    }
    (tabs + spaces / 2, &line[consumed..])
}

fn strip_checklist(line: &str) -> (&str, bool) {
    let mut rest = line;
    for bullet in ['-', '*', '+'] {
        if let Some(stripped) = rest.strip_prefix(bullet) {
            if stripped.is_empty() || stripped.starts_with(' ') {
                rest = stripped.trim_start();
                break;
            }
        }
    }

    for (marker, completed) in [("[ ]", false), ("[x]", true), ("[X]", true)] {
        if let Some(stripped) = rest.strip_prefix(marker) {
            if stripped.is_empty() || stripped.starts_with(' ') {
                return (stripped.trim_start(), completed);
            }
        }
    }

    (rest.trim_start(), false)
}
