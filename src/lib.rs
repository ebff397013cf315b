/*!
 * # fanyi - prompt builders for AI translation and polishing
 *
 * A Rust library that assembles the instructions sent to an AI
 * text-generation service for Chinese/English translation and for
 * rewriting text more clearly.
 *
 * ## Features
 *
 * - Chinese to English translation prompt (JSON reply with translation,
 *   IPA phonetic, definitions and examples)
 * - English to Chinese translation prompt (same reply shape)
 * - Polish prompt for Chinese or English text (plain text reply)
 * - Permissive and strict resolution of the polish language tag
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `prompts`: The prompt builders:
 *   - `prompts::chinese_to_english`: Chinese to English translation
 *   - `prompts::english_to_chinese`: English to Chinese translation
 *   - `prompts::polish`: Text polishing
 * - `language_utils`: ISO language code utilities and `PolishLanguage`
 * - `app_config`: Configuration for the command line tool
 * - `errors`: Custom error types for the application
 *
 * The builders are pure: no network access, no state, and no failure path.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod prompts;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, PromptError};
pub use language_utils::PolishLanguage;
pub use prompts::{
    build_chinese_to_english_prompt, build_english_to_chinese_prompt, build_polish_prompt,
    build_polish_prompt_for, PromptKind, PromptRequest,
};
