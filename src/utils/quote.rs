//! Shell quoting for displayed commands
//!
//! Commands are always spawned from an argument vector; quoting only
//! affects the line echoed to the user, which must paste back into a
//! POSIX shell unchanged.

use regex::Regex;
use std::sync::LazyLock;

static SAFE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_@%+=:,./-]+$").unwrap());

/// Quote a single word for a POSIX shell
pub fn quote(word: &str) -> String {
    if SAFE_WORD.is_match(word) {
        return word.to_string();
    }
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Quote and join a whole command line
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| quote(w.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_words_stay_bare() {
        assert_eq!(quote("find"), "find");
        assert_eq!(quote("./src/lib.rs"), "./src/lib.rs");
        assert_eq!(quote("-type"), "-type");
    }

    #[test]
    fn test_special_words_are_quoted() {
        assert_eq!(quote("*.py"), "'*.py'");
        assert_eq!(quote("{}"), "'{}'");
        assert_eq!(quote(";"), "';'");
        assert_eq!(quote("two words"), "'two words'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_embedded_single_quote() {
        assert_eq!(quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["grep", "-e", "a b"]), "grep -e 'a b'");
    }
}
