//! Language utilities for the polish prompt
//!
//! The polish prompt only knows two languages. `PolishLanguage::from_tag`
//! keeps the permissive two-way mapping callers rely on, while
//! `PolishLanguage::parse_strict` goes through ISO 639 normalization and
//! reports anything it cannot map.

use isolang::Language;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::PromptError;

/// ISO 639-2/B codes that differ from their ISO 639-2/T counterpart
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("dut", "nld"),
    ("fre", "fra"),
    ("geo", "kat"),
    ("ger", "deu"),
    ("gre", "ell"),
    ("ice", "isl"),
    ("mac", "mkd"),
    ("may", "msa"),
    ("per", "fas"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String, PromptError> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 => {
            if let Some(lang) = Language::from_639_1(&normalized_code) {
                return Ok(lang.to_639_3().to_string());
            }
        }
        3 => {
            if Language::from_639_3(&normalized_code).is_some() {
                return Ok(normalized_code);
            }
            if let Some((_, part2t)) = PART2B_TO_PART2T
                .iter()
                .find(|(part2b, _)| *part2b == normalized_code)
            {
                return Ok((*part2t).to_string());
            }
        }
        _ => {}
    }

    Err(PromptError::InvalidLanguageCode(code.to_string()))
}

/// Check if two language codes represent the same language
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(normalized1), Ok(normalized2)) => normalized1 == normalized2,
        _ => false,
    }
}

/// Get the English language name for a code
pub fn get_language_name(code: &str) -> Result<String, PromptError> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| PromptError::InvalidLanguageCode(code.to_string()))?;

    Ok(lang.to_name().to_string())
}

/// Language of the text handed to the polish prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolishLanguage {
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "en")]
    English,
}

impl PolishLanguage {
    /// Resolve a tag the permissive way: `"zh"` is Chinese, every other
    /// value is English. Never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "zh" => Self::Chinese,
            "en" => Self::English,
            other => {
                debug!(
                    "Unrecognized polish language tag '{}', falling back to {}",
                    other,
                    Self::English.display_name()
                );
                Self::English
            }
        }
    }

    /// Resolve a tag through ISO 639 normalization, reporting tags that are
    /// malformed or name a language other than Chinese or English.
    pub fn parse_strict(tag: &str) -> Result<Self, PromptError> {
        let part2t = normalize_to_part2t(tag)?;

        match Language::from_639_3(&part2t) {
            Some(Language::Zho) => Ok(Self::Chinese),
            Some(Language::Eng) => Ok(Self::English),
            Some(other) => Err(PromptError::UnsupportedLanguage {
                code: tag.to_string(),
                name: other.to_name().to_string(),
            }),
            None => Err(PromptError::InvalidLanguageCode(tag.to_string())),
        }
    }

    /// Name of the language as it appears inside the prompt
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Chinese => "中文",
            Self::English => "英文",
        }
    }

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
        }
    }
}

impl std::fmt::Display for PolishLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for PolishLanguage {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_strict(s)
    }
}
