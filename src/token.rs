//! At the heart of a [`Chain`](crate::Chain) is a [`Token`]. In fact, this is just a String. But we
//! make a distinction here: A Token is a run of non-whitespace characters from the source text,
//! after every period has been turned into the [`EOS`] marker.
//!
//! Only the period is special. Commas, question marks, quotes and everything else stay glued to
//! the word next to them, so `"Hello,"` and `"Hello"` are two different tokens.

/// Representation of a word.
pub type Token = String;

/// A borrowed version of [`Token`]; if [`Token`] is [`String`], then [`TokenRef`] is `&str`.
pub type TokenRef<'a> = &'a str;

/// The end of sentence marker. It replaces every `.` in the source text, and is what the chain
/// falls back to whenever a word has no successor.
pub const EOS: TokenRef<'static> = "<EOS>";

/// A [`Token`] together with its zero based position in the corpus.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionedToken {
    pub token: Token,
    pub position: usize,
}

impl PositionedToken {
    pub fn as_ref(&self) -> (TokenRef<'_>, usize) {
        (&self.token, self.position)
    }
}

impl PartialEq<(&str, usize)> for PositionedToken {
    fn eq(&self, other: &(&str, usize)) -> bool {
        self.token == other.0 && self.position == other.1
    }
}

/// Splits `text` into tokens.
///
/// Every `.` becomes a standalone [`EOS`] token, then the text is split on runs of whitespace.
/// Quotation marks are left as they are.
///
/// ```
/// # use wordwalk::token::tokenize;
/// assert_eq!(
///     tokenize("The cat sat. The dog ran."),
///     vec!["The", "cat", "sat", "<EOS>", "The", "dog", "ran", "<EOS>"],
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let marked = text.replace('.', &format!(" {EOS} "));
    marked.split_whitespace().map(str::to_string).collect()
}

/// Gives every token its position, in the order they appear.
pub fn index<I>(tokens: I) -> Vec<PositionedToken>
where
    I: IntoIterator<Item = Token>,
{
    tokens
        .into_iter()
        .enumerate()
        .map(|(position, token)| PositionedToken { token, position })
        .collect()
}
