//! Name derivations shared by the loader and the README builder.

use regex::Regex;
use std::sync::LazyLock;

// "JSONParser" -> "JSON-Parser"
static RE_ACRONYM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

// "helloWorld" -> "hello-World"
static RE_CAMEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_.\-]+").unwrap());

/// Folder-name tokens that read as symbols in a language name.
const SYMBOL_TOKENS: &[(&str, &str)] = &[("plus", "+"), ("sharp", "#"), ("star", "*")];

/// Human-facing program name: `"two-fer"` → `"Two Fer"`.
pub fn display_name(normalized: &str) -> String {
    normalized
        .replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-facing language name from its folder name.
///
/// `"c-plus-plus"` → `"C++"`, `"c-sharp"` → `"C#"`, `"visual-basic"` → `"Visual Basic"`
pub fn readable_language_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for token in name.split('-').filter(|t| !t.is_empty()) {
        match SYMBOL_TOKENS.iter().find(|(word, _)| *word == token) {
            Some((_, symbol)) => out.push_str(symbol),
            None => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&capitalize(token));
            }
        }
    }
    out
}

/// Normalize a program file stem into hyphen-delimited lowercase tokens.
///
/// `"HelloWorld"`, `"hello_world"` and `"hello-world"` all become `"hello-world"`.
pub fn normalize_program_name(stem: &str) -> String {
    let split = RE_ACRONYM.replace_all(stem, "${1}-${2}");
    let split = RE_CAMEL.replace_all(&split, "${1}-${2}");
    RE_SEPARATORS
        .replace_all(&split, "-")
        .trim_matches('-')
        .to_lowercase()
}

/// Title-case a word: a letter is upper-cased when it does not follow
/// another letter, so `"l33t"` becomes `"L33T"`.
fn capitalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
