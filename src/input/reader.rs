use anyhow::{Context, Result, bail};
use inquire::Text;
use std::io::{self, IsTerminal, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Prompt shown when reading from a terminal.
pub const INPUT_PROMPT: &str = "请输入待翻译的英文内容：";

/// Supplies the text to translate. Callers trim and validate it.
pub trait InputSource {
    fn read_input(&mut self) -> Result<String>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_input(&mut self) -> Result<String> {
        (**self).read_input()
    }
}

/// Text already known up front (command-line arguments, tests).
#[derive(Debug, Clone)]
pub struct GivenText(pub String);

impl InputSource for GivenText {
    fn read_input(&mut self) -> Result<String> {
        Ok(std::mem::take(&mut self.0))
    }
}

/// Standard input: an interactive one-line prompt on a terminal, or the
/// whole piped stream otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_input(&mut self) -> Result<String> {
        if io::stdin().is_terminal() {
            Ok(Text::new(INPUT_PROMPT).prompt()?)
        } else {
            read_bounded(io::stdin().lock())
        }
    }
}

/// Reads `reader` to the end, rejecting inputs over 1 MB or invalid UTF-8.
pub fn read_bounded(mut reader: impl Read) -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut chunk)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the input into smaller parts.",
                buffer.len() as f64 / 1024.0 / 1024.0
            );
        }
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_bounded() {
        let content = read_bounded(Cursor::new("Hello, World!\n")).unwrap();
        assert_eq!(content, "Hello, World!\n");
    }

    #[test]
    fn test_read_bounded_multiline_unicode() {
        let text = "Line 1\nこんにちは\n🌍";
        assert_eq!(read_bounded(Cursor::new(text)).unwrap(), text);
    }

    #[test]
    fn test_read_bounded_empty() {
        assert!(read_bounded(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_read_bounded_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let result = read_bounded(Cursor::new(content)).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_bounded_exceeds_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = read_bounded(Cursor::new(content));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_bounded_invalid_utf8() {
        let result = read_bounded(Cursor::new(vec![0xff, 0xfe, 0xfd]));
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }

    #[test]
    fn test_given_text_is_consumed_once() {
        let mut input = GivenText("hello".to_string());
        assert_eq!(input.read_input().unwrap(), "hello");
        assert_eq!(input.read_input().unwrap(), "");
    }
}
