use serde::Serialize;
use std::borrow::Cow;

use super::classify::{Mode, classify};

pub const DICTIONARY_PROMPT: &str = "你是英译中词典。用户输入一个英文单词时，只输出中文释义。\
     给出常见词性与简明释义，多词性分行，例如：\n\
     n. 释义\nv. 释义\nadj. 释义\n\
     不要给例句、不要解释、不要多余文本。";

pub const TRANSLATION_PROMPT: &str = "你是英译中翻译器。用户输入英文句子或段落时，\
     只输出流畅准确的中文翻译，不要解释、不要附加内容。";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

// Use Cow so the user's text is borrowed rather than cloned for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message<'a> {
    pub role: Role,
    pub content: Cow<'a, str>,
}

/// The instruction that steers the model for the given mode.
pub const fn system_prompt(mode: Mode) -> &'static str {
    match mode {
        Mode::Dictionary => DICTIONARY_PROMPT,
        Mode::Translation => TRANSLATION_PROMPT,
    }
}

/// Builds the ordered `[system, user]` pair. The user content is `text`
/// verbatim.
pub fn build_messages(text: &str) -> [Message<'_>; 2] {
    build_messages_for(classify(text), text)
}

pub const fn build_messages_for(mode: Mode, text: &str) -> [Message<'_>; 2] {
    [
        Message {
            role: Role::System,
            content: Cow::Borrowed(system_prompt(mode)),
        },
        Message {
            role: Role::User,
            content: Cow::Borrowed(text),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_uses_dictionary_prompt() {
        let [system, user] = build_messages("serendipity");
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, DICTIONARY_PROMPT);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "serendipity");
    }

    #[test]
    fn test_sentence_uses_translation_prompt() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let [system, user] = build_messages(text);
        assert_eq!(system.content, TRANSLATION_PROMPT);
        assert_eq!(user.content, text);
    }

    #[test]
    fn test_user_content_is_verbatim() {
        let text = "Line one.\n\n  Line two, with  spacing.";
        let [_, user] = build_messages(text);
        assert_eq!(user.content, text);
    }

    #[test]
    fn test_dictionary_prompt_lists_part_of_speech_tags() {
        assert!(DICTIONARY_PROMPT.contains("n. 释义"));
        assert!(DICTIONARY_PROMPT.contains("v. 释义"));
        assert!(DICTIONARY_PROMPT.contains("adj. 释义"));
        assert!(DICTIONARY_PROMPT.contains("不要给例句"));
    }

    #[test]
    fn test_messages_serialize_with_lowercase_roles() {
        let messages = build_messages("hello");
        let json = serde_json::to_value(&messages).unwrap();
        assert_eq!(json[0]["role"], "system");
        assert_eq!(json[1]["role"], "user");
        assert_eq!(json[1]["content"], "hello");
    }
}
