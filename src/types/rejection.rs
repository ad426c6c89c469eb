// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::ErrorReport;
use crate::types::card::MAX_WORDS;

/// Which face of a card a piece of text belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Front,
    Back,
}

/// Why an operation declined to do anything.
///
/// A rejected operation leaves every piece of state exactly as it was.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Rejection {
    /// The set name is empty after trimming.
    EmptyName,
    /// One side of a card is over the word limit.
    TextTooLong { side: Side, words: usize },
    /// No set is selected, or the selected set no longer exists.
    NoActiveSet,
    /// An identifier prefix names more than one set.
    AmbiguousSet { matches: usize },
    /// The set has no cards.
    EmptySet,
    /// There is no card at the given zero-based index.
    CardNotFound { index: usize },
    /// A study action was attempted outside a study session.
    NotStudying,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Front => write!(f, "front"),
            Side::Back => write!(f, "back"),
        }
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::EmptyName => write!(f, "set name must not be empty."),
            Rejection::TextTooLong { side, words } => write!(
                f,
                "{side} text has {words} words, the limit is {MAX_WORDS}."
            ),
            Rejection::NoActiveSet => write!(f, "no such set."),
            Rejection::AmbiguousSet { matches } => {
                write!(f, "{matches} sets match that identifier prefix.")
            }
            Rejection::EmptySet => write!(f, "the set has no cards."),
            Rejection::CardNotFound { index } => {
                write!(f, "no card at position {}.", index.saturating_add(1))
            }
            Rejection::NotStudying => write!(f, "not in a study session."),
        }
    }
}

impl From<Rejection> for ErrorReport {
    fn from(value: Rejection) -> Self {
        ErrorReport::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_long_message() {
        let r = Rejection::TextTooLong {
            side: Side::Back,
            words: 81,
        };
        assert_eq!(r.to_string(), "back text has 81 words, the limit is 80.");
    }

    #[test]
    fn test_card_positions_are_one_based() {
        let r = Rejection::CardNotFound { index: 2 };
        assert_eq!(r.to_string(), "no card at position 3.");
        let r = Rejection::CardNotFound { index: usize::MAX };
        assert_eq!(r.to_string(), format!("no card at position {}.", usize::MAX));
    }

    #[test]
    fn test_ambiguous_message() {
        let r = Rejection::AmbiguousSet { matches: 2 };
        assert_eq!(r.to_string(), "2 sets match that identifier prefix.");
    }

    #[test]
    fn test_into_error_report() {
        let err: ErrorReport = Rejection::EmptySet.into();
        assert_eq!(err.to_string(), "error: the set has no cards.");
    }
}
