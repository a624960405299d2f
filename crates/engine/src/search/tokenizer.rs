//! Text tokenizer for search operations
//!
//! Tokens are maximal runs of characters outside a fixed delimiter set.
//! Empty runs produce no token. Case folding is a separate step so callers
//! can compose the two as needed: word matching folds then tokenizes,
//! phrase matching folds without tokenizing.

/// Characters that separate tokens: whitespace and ASCII punctuation.
pub const DELIMITERS: &[char] = &[
    ' ', '\t', '\r', '\n', ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '<', '>',
    '"', '\'', '/', '-', '_', '\\', '|', '@', '#', '%', '^', '&', '*', '+', '=', '~', '`',
];

/// Check if a character separates tokens.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    // Linear scan over 35 chars; every entry is ASCII.
    c.is_ascii() && DELIMITERS.contains(&c)
}

/// Lazy iterator over the tokens of a string.
///
/// Cloning restarts nothing: a clone continues from the same position.
/// Call [`tokens`] again to restart from the beginning.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some(start) = self.rest.find(|c: char| !is_delimiter(c)) else {
            self.rest = "";
            return None;
        };
        let rest = &self.rest[start..];
        let end = rest.find(is_delimiter).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = tail;
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Split text into tokens without allocating.
///
/// # Example
///
/// ```
/// use minisearch_engine::search::tokenizer::tokens;
///
/// let words: Vec<&str> = tokens("The cat sat.").collect();
/// assert_eq!(words, vec!["The", "cat", "sat"]);
/// ```
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Count the tokens in a line.
pub fn count_tokens(text: &str) -> usize {
    tokens(text).count()
}

/// ASCII-lowercase a string. Non-ASCII characters are left unchanged.
///
/// # Example
///
/// ```
/// use minisearch_engine::search::tokenizer::fold_case;
///
/// assert_eq!(fold_case("Quick, BROWN"), "quick, brown");
/// ```
pub fn fold_case(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Fold `text` into a reusable buffer, replacing its previous contents.
#[inline]
pub fn fold_case_into(text: &str, buf: &mut String) {
    buf.clear();
    buf.push_str(text);
    buf.make_ascii_lowercase();
}
