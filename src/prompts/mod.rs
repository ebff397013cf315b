/*!
 * Prompt builders for translation and polishing.
 *
 * This module provides:
 * - Chinese to English and English to Chinese translation prompts that ask
 *   for a JSON reply (translation, phonetic, definitions, examples)
 * - A polishing prompt that asks for plain rewritten text
 * - `PromptRequest`, a single entry point over all three
 *
 * The JSON shape inside the translation prompts is illustrative text for the
 * model. Nothing here parses or checks what the model sends back.
 */

pub mod chinese_to_english;
pub mod english_to_chinese;
pub mod polish;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::errors::PromptError;
use crate::language_utils::PolishLanguage;

// Re-export main builders
pub use chinese_to_english::build_chinese_to_english_prompt;
pub use english_to_chinese::build_english_to_chinese_prompt;
pub use polish::{build_polish_prompt, build_polish_prompt_for};

/// The kinds of prompt this crate can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[serde(rename = "zh2en")]
    ChineseToEnglish,
    #[serde(rename = "en2zh")]
    EnglishToChinese,
    Polish,
}

impl PromptKind {
    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChineseToEnglish => "zh2en",
            Self::EnglishToChinese => "en2zh",
            Self::Polish => "polish",
        }
    }

    /// Whether the model is asked to answer in JSON
    pub fn expects_json(&self) -> bool {
        !matches!(self, Self::Polish)
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh2en" => Ok(Self::ChineseToEnglish),
            "en2zh" => Ok(Self::EnglishToChinese),
            "polish" => Ok(Self::Polish),
            _ => Err(PromptError::UnknownPromptKind(s.to_string())),
        }
    }
}

/// A fully specified prompt, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PromptRequest {
    #[serde(rename = "zh2en")]
    ChineseToEnglish { text: String },
    #[serde(rename = "en2zh")]
    EnglishToChinese { text: String },
    Polish {
        text: String,
        language: PolishLanguage,
    },
}

impl PromptRequest {
    pub fn kind(&self) -> PromptKind {
        match self {
            Self::ChineseToEnglish { .. } => PromptKind::ChineseToEnglish,
            Self::EnglishToChinese { .. } => PromptKind::EnglishToChinese,
            Self::Polish { .. } => PromptKind::Polish,
        }
    }

    /// The caller's text, as it will be embedded
    pub fn text(&self) -> &str {
        match self {
            Self::ChineseToEnglish { text }
            | Self::EnglishToChinese { text }
            | Self::Polish { text, .. } => text,
        }
    }

    /// Render the prompt string.
    pub fn build(&self) -> String {
        let prompt = match self {
            Self::ChineseToEnglish { text } => build_chinese_to_english_prompt(text),
            Self::EnglishToChinese { text } => build_english_to_chinese_prompt(text),
            Self::Polish { text, language } => build_polish_prompt_for(text, *language),
        };

        trace!(
            "Built {} prompt: {} chars of input, {} chars total",
            self.kind(),
            self.text().chars().count(),
            prompt.chars().count()
        );

        prompt
    }
}
