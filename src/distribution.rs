//! [`Occurrences`] keep track of where a [`Token`](crate::token::Token) shows up in the corpus, and
//! are paired up with that token in a [`Chain`](crate::Chain).

use rand::seq::SliceRandom;
use rand::Rng;

/// Every position a single token occurs at, in corpus order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    positions: Vec<usize>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Add an occurrence at `position`.
    pub fn add_position(&mut self, position: usize) {
        self.positions.push(position);
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions directly after each occurrence. The last one may point one past the end of the
    /// corpus.
    pub fn successor_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().map(|p| p + 1)
    }

    /// Picks one occurrence uniformly at random and returns the position right after it.
    ///
    /// Every occurrence is one equally likely draw, so a successor seen three times is three
    /// times as likely as one seen once. Returns `None` if there are no occurrences.
    pub fn get_random_successor(&self, rng: &mut impl Rng) -> Option<usize> {
        self.positions.choose(rng).map(|p| p + 1)
    }
}
