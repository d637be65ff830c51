//! Reading the text to translate.

mod reader;

pub use reader::{GivenText, INPUT_PROMPT, InputSource, StdinInput, read_bounded};
