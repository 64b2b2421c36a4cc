//! Picking the word a chain starts from.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::token::TokenRef;

/// Used when there is nothing to choose from.
pub const DEFAULT_KEY: TokenRef<'static> = "A";

/// Options used when no prompt is given.
pub const DEFAULT_OPTIONS: [TokenRef<'static>; 2] = ["A", "The"];

/// Chooses one of `options` uniformly at random, or [`DEFAULT_KEY`] if there are none.
///
/// ```
/// # use wordwalk::key::choose_key;
/// # use rand::thread_rng;
/// assert_eq!(choose_key(&mut thread_rng(), &[]), "A");
/// assert_eq!(choose_key(&mut thread_rng(), &["Once"]), "Once");
/// ```
pub fn choose_key<'a>(rng: &mut impl Rng, options: &[TokenRef<'a>]) -> TokenRef<'a> {
    options.choose(rng).copied().unwrap_or(DEFAULT_KEY)
}

/// The words of `prompt`, split on whitespace. Without a prompt this is [`DEFAULT_OPTIONS`].
pub fn prompt_options(prompt: Option<&str>) -> Vec<TokenRef<'_>> {
    match prompt {
        Some(p) => p.split_whitespace().collect(),
        None => DEFAULT_OPTIONS.to_vec(),
    }
}
