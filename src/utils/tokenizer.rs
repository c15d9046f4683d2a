/// Split text into whitespace-delimited words
///
/// Runs of Unicode whitespace are separators; punctuation stays attached to
/// its word ("be," is a single word).
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Query normalized for case-insensitive word comparison
#[derive(Debug, Clone)]
pub struct FoldedWord {
    folded: Vec<char>,
}

impl FoldedWord {
    pub fn new(word: &str) -> Self {
        Self {
            folded: fold(word).collect(),
        }
    }

    /// Case-insensitive equality with `word` under simple case folding
    pub fn matches(&self, word: &str) -> bool {
        fold(word).eq(self.folded.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().map(fold_char)
}

/// Map `c` to one representative of its simple case-folding orbit
///
/// Every member of an orbit (`ς`, `σ`, `Σ` or `ſ`, `s`, `S`) maps to the same
/// char. Only one-to-one mappings are followed, so `ß` never becomes "ss" and
/// a word folds to the same number of chars.
fn fold_char(c: char) -> char {
    // Dotless i only case-maps under Turkic rules; it has no simple fold
    if c == '\u{0131}' {
        return c;
    }
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
