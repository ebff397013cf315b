/*!
 * Text polishing prompt.
 *
 * The reply is expected to be plain rewritten text, not JSON.
 */

use crate::language_utils::PolishLanguage;

/// Placeholders: `{language}`, `{text}`
pub const POLISH: &str = r#"请对以下{language}文本进行润色，以易于理解但保留适当专业性的风格重写。

要润色的内容: {text}

要求:
1. 保持原文的核心含义和专业性
2. 使表达更清晰、流畅、易懂
3. 改善语法和用词的准确性
4. 保持适当的语气（正式/非正式根据原文判断）
5. 仅返回润色后的文本，不要添加任何其他文字或解释
6. 不要使用markdown代码块，直接返回纯文本

直接返回润色后的文本。"#;

/// Build the polish prompt for `text` written in the language tagged `lang`.
///
/// `"zh"` selects Chinese; any other tag falls back to English.
pub fn build_polish_prompt(text: &str, lang: &str) -> String {
    build_polish_prompt_for(text, PolishLanguage::from_tag(lang))
}

/// Build the polish prompt for an already resolved language.
pub fn build_polish_prompt_for(text: &str, language: PolishLanguage) -> String {
    // The language goes in first so placeholders inside `text` stay untouched.
    POLISH
        .replacen("{language}", language.display_name(), 1)
        .replacen("{text}", text, 1)
}
