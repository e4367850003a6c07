use same_same::config::split_filter_list;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const DIR_PROMPT: &str =
    "Enter the file's directory. The program will scan subdirectories as well: ";
pub const EXTENSIONS_PROMPT: &str =
    "Enter space delimited file extensions or leave blank for all";
pub const NAMES_PROMPT: &str = "Enter space delimited file names or leave blank for all";

/// Asks for a directory until an existing one is entered.
pub fn prompt_dir<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<PathBuf> {
    loop {
        write!(out, "{}", DIR_PROMPT)?;
        out.flush()?;

        let answer = read_answer(input)?;
        let path = PathBuf::from(&answer);
        if !answer.is_empty() && path.is_dir() {
            return Ok(path);
        }

        writeln!(out, "'{}' is not a valid directory", answer)?;
    }
}

/// Asks for a space delimited list. A blank answer yields `[".*"]`.
pub fn prompt_space_delimited<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Vec<String>> {
    write!(out, "{}: ", message)?;
    out.flush()?;

    let answer = read_answer(input)?;
    Ok(split_filter_list(&answer))
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
