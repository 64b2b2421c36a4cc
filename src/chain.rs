//! See the top level crate documentation for information about the [`Chain`] type.

use std::iter::FusedIterator;

use hashbrown::HashMap;
use rand::Rng;
use tracing::{debug, trace, warn};

use crate::distribution::Occurrences;
use crate::error::{CorpusError, GenerateError};
use crate::io::corpus_text;
use crate::token::{index, tokenize, Token, TokenRef, EOS};

/// Simple first order Markov chain over the words of a corpus.
///
/// The chain remembers the whole corpus in order. Asking for the word after `w` picks one
/// occurrence of `w` at random and returns whatever comes right after it, or [`EOS`] if nothing
/// does.
///
/// ```
/// # use wordwalk::{Chain, EOS};
/// # use rand::thread_rng;
/// let chain = Chain::from_text("Only one sentence.");
///
/// assert_eq!(chain.next_word(&mut thread_rng(), "one"), "sentence");
/// assert_eq!(chain.next_word(&mut thread_rng(), "sentence"), EOS);
///
/// // Never seen, so there is nowhere to go
/// assert_eq!(chain.next_word(&mut thread_rng(), "two"), EOS);
///
/// assert_eq!(
///     chain.generate_chain(&mut thread_rng(), "Only"),
///     vec!["Only", "one", "sentence"]
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Chain {
    /// Position to token.
    tokens: Vec<Token>,
    /// Token to every position it occurs at.
    occurrences: HashMap<Token, Occurrences>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Builds a chain out of a single text.
    pub fn from_text(text: &str) -> Self {
        let mut cb = ChainBuilder::new();
        cb.feed_str(text);
        cb.build()
    }

    /// Number of tokens in the corpus.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of distinct tokens in the corpus.
    pub fn distinct_tokens(&self) -> usize {
        self.occurrences.len()
    }

    pub fn token_at(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// Every position `word` occurs at, in corpus order. Empty if it never does.
    pub fn positions(&self, word: TokenRef<'_>) -> &[usize] {
        self.occurrences
            .get(word)
            .map(Occurrences::positions)
            .unwrap_or_default()
    }

    /// The corpus as `(position, token)` pairs.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Token)> + '_ {
        self.tokens.iter().enumerate()
    }

    /// All tokens of the corpus, in order.
    pub fn tokens(&self) -> impl Iterator<Item = TokenRef<'_>> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// The word following each occurrence of `word`, one entry per occurrence. An occurrence at
    /// the very end of the corpus is followed by [`EOS`].
    pub fn successors<'a>(
        &'a self,
        word: TokenRef<'_>,
    ) -> impl Iterator<Item = TokenRef<'a>> + 'a {
        self.occurrences
            .get(word)
            .into_iter()
            .flat_map(Occurrences::successor_positions)
            .map(|p| self.resolve(p))
    }

    fn resolve(&self, position: usize) -> TokenRef<'_> {
        self.token_at(position).map(String::as_str).unwrap_or(EOS)
    }

    /// Generates a random word to follow `word`.
    ///
    /// Words that are never seen, or only seen as the very last token, give [`EOS`].
    pub fn next_word(&self, rng: &mut impl Rng, word: TokenRef<'_>) -> TokenRef<'_> {
        let Some(position) = self
            .occurrences
            .get(word)
            .and_then(|occ| occ.get_random_successor(rng))
        else {
            trace!(word, "no occurrences");
            return EOS;
        };

        let next = self.resolve(position);
        trace!(word, position, next, "resolved successor");
        next
    }

    /// Walks the chain from `seed`, one word at a time, until [`EOS`] comes up. The [`EOS`]
    /// itself is never yielded; a walk starting at [`EOS`] yields nothing.
    ///
    /// There is no limit on how long a walk may get. Use [`Iterator::take()`] or
    /// [`Chain::generate_bounded()`] if you need one.
    pub fn walk<'a, 'r, R: Rng>(
        &'a self,
        rng: &'r mut R,
        seed: TokenRef<'a>,
    ) -> Walk<'a, 'r, R> {
        Walk {
            chain: self,
            rng,
            current: seed,
        }
    }

    /// Generates words starting with `seed` until [`EOS`] comes up. The result starts with `seed`
    /// (unless it is [`EOS`]) and never contains [`EOS`].
    pub fn generate_chain<'a>(
        &'a self,
        rng: &mut impl Rng,
        seed: TokenRef<'a>,
    ) -> Vec<TokenRef<'a>> {
        self.walk(rng, seed).collect()
    }

    /// Like [`Chain::generate_chain()`], but gives up once the chain would grow past `limit`
    /// words. A chain of exactly `limit` words is fine.
    pub fn generate_bounded<'a>(
        &'a self,
        rng: &mut impl Rng,
        seed: TokenRef<'a>,
        limit: usize,
    ) -> Result<Vec<TokenRef<'a>>, GenerateError> {
        let mut res = Vec::new();
        for word in self.walk(rng, seed) {
            if res.len() == limit {
                warn!(seed, limit, "chain exceeded word limit");
                return Err(GenerateError::LengthExceeded { limit });
            }
            res.push(word);
        }

        Ok(res)
    }
}

/// Iterator returned by [`Chain::walk()`].
#[derive(Debug)]
pub struct Walk<'a, 'r, R> {
    chain: &'a Chain,
    rng: &'r mut R,
    current: TokenRef<'a>,
}

impl<'a, R: Rng> Iterator for Walk<'a, '_, R> {
    type Item = TokenRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == EOS {
            return None;
        }

        let (chain, word) = (self.chain, self.current);
        self.current = chain.next_word(&mut *self.rng, word);
        Some(word)
    }
}

impl<R: Rng> FusedIterator for Walk<'_, '_, R> {}

/// Builds a Chain by being fed strings. Everything fed is treated as one long text, in the order
/// it was fed.
#[derive(Clone, Debug, Default)]
pub struct ChainBuilder {
    tokens: Vec<Token>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Uses up the builder and creates a new chain. An empty builder gives an empty chain, in
    /// which every word is followed by [`EOS`].
    pub fn build(self) -> Chain {
        let positioned = index(self.tokens);
        let mut tokens = Vec::with_capacity(positioned.len());
        let mut occurrences: HashMap<Token, Occurrences> = HashMap::new();

        for pt in positioned {
            match occurrences.get_mut(pt.token.as_str()) {
                Some(occ) => {
                    occ.add_position(pt.position);
                }
                None => {
                    let mut occ = Occurrences::new();
                    occ.add_position(pt.position);
                    occurrences.insert(pt.token.clone(), occ);
                }
            }
            tokens.push(pt.token);
        }

        debug!(
            tokens = tokens.len(),
            distinct = occurrences.len(),
            "built chain"
        );
        Chain {
            tokens,
            occurrences,
        }
    }

    /// Feeds the chain builder with more text.
    ///
    /// The tokens are from [`tokenize()`](crate::token::tokenize).
    pub fn feed_str(&mut self, content: &str) {
        self.tokens.extend(tokenize(content));
    }

    /// Like [`ChainBuilder::feed_str()`], but for raw bytes that first have to pass as text.
    pub fn feed_bytes(&mut self, content: &[u8]) -> Result<(), CorpusError> {
        self.feed_str(corpus_text(content)?);
        Ok(())
    }

    /// Feeds already split tokens, for when [`tokenize()`](crate::token::tokenize) does not fit.
    pub fn feed_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        self.tokens.extend(tokens.into_iter().map(Into::into));
    }
}
