use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the text to translate from a file or from piped stdin.
pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when no path is given.
    ///
    /// Trailing line breaks are dropped so `echo hello | gtl` sends `hello`.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        let text = match file_path {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
                read_limited(file, "file").with_context(|| format!("Failed to read file: {path}"))?
            }
            None => read_limited(io::stdin().lock(), "input").context("Failed to read stdin")?,
        };
        Ok(strip_trailing_newlines(&text).to_string())
    }
}

/// Reads at most [`MAX_INPUT_SIZE`] bytes of UTF-8 text.
fn read_limited(reader: impl Read, what: &str) -> Result<String> {
    let mut buffer = Vec::new();
    // One byte past the limit tells "exactly at the limit" from "over it".
    reader
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)?;

    if buffer.len() > MAX_INPUT_SIZE {
        bail!(
            "Input exceeds the maximum allowed size (1 MB).\n\n\
             Consider splitting the {what} into smaller parts."
        );
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

fn strip_trailing_newlines(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}
