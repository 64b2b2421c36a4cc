//! Dead simple sentence generation using markov chains.
//!
//! The generator is a first order Markov chain over words: it looks at one word at a time and
//! guesses what the next one might be, by picking a random place in the source text where that
//! word appears and taking whatever word comes right after it. Words that follow often are picked
//! often, simply because there are more places to land on.
//!
//! Every period in the source text becomes an end of sentence marker, [`EOS`]. Generation starts
//! at some word and keeps going until it lands on [`EOS`], which is not part of the output.
//!
//! ```
//! # use wordwalk::{Chain, EOS};
//! # use rand::thread_rng;
//! let chain = Chain::from_text("The cat sat. The dog ran.");
//!
//! let sentence = chain.generate_chain(&mut thread_rng(), "The");
//! assert!(sentence == ["The", "cat", "sat"] || sentence == ["The", "dog", "ran"]);
//! ```
//!
//! For a one-shot "text in, sentence out" call, see [`generate_reply()`].

pub mod chain;
pub mod distribution;
pub mod error;
pub mod io;
pub mod key;
pub mod reply;
pub mod token;

pub use chain::{Chain, ChainBuilder, Walk};
pub use error::{CorpusError, GenerateError, InputError};
pub use reply::{generate_reply, KeySource, ReplyOptions};
pub use token::{PositionedToken, Token, TokenRef, EOS};
