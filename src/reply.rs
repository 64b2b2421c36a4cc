//! Turning a corpus into a single generated sentence.

use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use crate::chain::Chain;
use crate::error::{GenerateError, InputError};
use crate::key::{choose_key, prompt_options};
use crate::token::TokenRef;

/// Where the starting word comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeySource<'a> {
    /// One of [`DEFAULT_OPTIONS`](crate::key::DEFAULT_OPTIONS).
    #[default]
    Defaults,
    /// One of the whitespace separated words of a prompt.
    Prompt(&'a str),
    /// Any token of the corpus itself, [`EOS`](crate::EOS) included.
    Corpus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplyOptions<'a> {
    pub keys: KeySource<'a>,
    /// Longest chain allowed, in words. `None` lets the chain run until it ends on its own.
    pub max_words: Option<usize>,
}

/// Generates one sentence from `corpus`: builds the chain, picks a starting word according to
/// `options`, walks the chain, and joins the words with single spaces.
///
/// ```
/// # use wordwalk::{generate_reply, KeySource, ReplyOptions};
/// # use rand::thread_rng;
/// let options = ReplyOptions {
///     keys: KeySource::Prompt("Only"),
///     max_words: Some(100),
/// };
/// let reply = generate_reply(&mut thread_rng(), Some("Only one sentence."), &options).unwrap();
/// assert_eq!(reply, "Only one sentence");
/// ```
///
/// # Errors
///
/// - [`InputError::MissingCorpus`] if `corpus` is `None`
/// - [`GenerateError::LengthExceeded`] if the chain grows past `options.max_words`
pub fn generate_reply(
    rng: &mut impl Rng,
    corpus: Option<&str>,
    options: &ReplyOptions<'_>,
) -> Result<String, GenerateError> {
    let corpus = corpus.ok_or(InputError::MissingCorpus)?;
    let chain = Chain::from_text(corpus);

    let key_options: Vec<TokenRef<'_>> = match options.keys {
        KeySource::Defaults => prompt_options(None),
        KeySource::Prompt(prompt) => prompt_options(Some(prompt)),
        KeySource::Corpus => chain.tokens().collect(),
    };
    let seed = choose_key(rng, &key_options);

    let words = match options.max_words {
        Some(limit) => chain.generate_bounded(rng, seed, limit)?,
        None => chain.generate_chain(rng, seed),
    };
    debug!(seed, words = words.len(), "generated reply");

    Ok(words.into_iter().join(" "))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn missing_corpus_fails_fast() {
        let res = generate_reply(&mut rng(), None, &ReplyOptions::default());
        assert!(matches!(
            res,
            Err(GenerateError::Input(InputError::MissingCorpus))
        ));
    }

    #[test]
    fn prompt_seeds_the_chain() {
        let options = ReplyOptions {
            keys: KeySource::Prompt("Only"),
            max_words: None,
        };
        let reply = generate_reply(&mut rng(), Some("Only one sentence."), &options).unwrap();
        assert_eq!(reply, "Only one sentence");
    }

    #[test]
    fn default_keys_start_with_an_article() {
        let corpus = "The cat sat. A dog ran. The bird flew.";
        let mut rng = rng();
        for _ in 0..50 {
            let reply = generate_reply(&mut rng, Some(corpus), &ReplyOptions::default()).unwrap();
            assert!(
                reply.starts_with("The ") || reply.starts_with("A "),
                "unexpected reply {reply:?}"
            );
            assert!(!reply.contains("<EOS>"));
        }
    }

    #[test]
    fn empty_corpus_echoes_the_key() {
        let reply = generate_reply(&mut rng(), Some(""), &ReplyOptions::default()).unwrap();
        assert!(reply == "A" || reply == "The");
    }

    #[test]
    fn corpus_keys_may_give_empty_reply() {
        let options = ReplyOptions {
            keys: KeySource::Corpus,
            max_words: None,
        };
        let mut rng = rng();
        for _ in 0..20 {
            let reply = generate_reply(&mut rng, Some("Hi."), &options).unwrap();
            assert!(reply == "Hi" || reply.is_empty(), "unexpected reply {reply:?}");
        }
    }

    #[test]
    fn word_limit_is_enforced() {
        let options = ReplyOptions {
            keys: KeySource::Prompt("a"),
            max_words: Some(2),
        };
        assert!(matches!(
            generate_reply(&mut rng(), Some("a b c"), &options),
            Err(GenerateError::LengthExceeded { limit: 2 })
        ));

        let options = ReplyOptions {
            max_words: Some(3),
            ..options
        };
        assert_eq!(
            generate_reply(&mut rng(), Some("a b c"), &options).unwrap(),
            "a b c"
        );
    }

    #[test]
    fn same_seed_same_reply() {
        let corpus = "The cat sat on the mat. The dog sat on the cat. The end.";
        let a = generate_reply(&mut rng(), Some(corpus), &ReplyOptions::default()).unwrap();
        let b = generate_reply(&mut rng(), Some(corpus), &ReplyOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
