use std::fs;
use std::io;
use std::path::Path;

/// Source of normalized file content for the comparison driver.
pub trait Normalizer {
    fn normalize(&self, path: &Path) -> io::Result<String>;
}

/// Reads the file from disk on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileNormalizer;

impl Normalizer for FileNormalizer {
    fn normalize(&self, path: &Path) -> io::Result<String> {
        normalize_file(path)
    }
}

impl<F> Normalizer for F
where
    F: Fn(&Path) -> io::Result<String>,
{
    fn normalize(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// Reads a UTF-8 file, collapses whitespace runs in each line and joins the
/// lines with a single space.
pub fn normalize_file(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(normalize_text(&text))
}

/// Same transform as [`normalize_file`] over in-memory text.
pub fn normalize_text(text: &str) -> String {
    split_lines(text)
        .into_iter()
        .map(collapse_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A terminator at the very end does
/// not start another line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_collapsible(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_run = false;
    for c in line.chars() {
        if is_collapsible(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
