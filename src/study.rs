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

use rand::Rng;

use crate::library::Library;
use crate::library::Outcome;
use crate::storage::BlobStore;
use crate::types::rejection::Rejection;
use crate::types::rejection::Side;
use crate::types::set::FlashcardSet;

/// A pass through one set's cards, in order, one card at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Study {
    #[default]
    Idle,
    Studying {
        /// Position of the card being shown. Always less than the number of
        /// cards in the set.
        index: usize,
        /// Whether the back is showing.
        flipped: bool,
    },
}

impl Study {
    /// Shuffle the active set and begin on its first card, front up.
    pub fn start<B: BlobStore, R: Rng + ?Sized>(
        library: &mut Library<B>,
        rng: &mut R,
    ) -> Outcome<Self> {
        match library.active() {
            Ok(set) if set.is_empty() => return Ok(Err(Rejection::EmptySet)),
            Ok(_) => {}
            Err(r) => return Ok(Err(r)),
        }
        if let Err(r) = library.shuffle(rng)? {
            return Ok(Err(r));
        }
        Ok(Ok(Study::Studying {
            index: 0,
            flipped: false,
        }))
    }

    /// Turn the current card over.
    pub fn flip(&mut self) -> Result<(), Rejection> {
        match self {
            Study::Idle => Err(Rejection::NotStudying),
            Study::Studying { flipped, .. } => {
                *flipped = !*flipped;
                Ok(())
            }
        }
    }

    /// Move to the next card, front up. Past the last card the session
    /// ends.
    pub fn next(&mut self, set: &FlashcardSet) -> Result<(), Rejection> {
        match *self {
            Study::Idle => Err(Rejection::NotStudying),
            Study::Studying { index, .. } => {
                *self = if index + 1 < set.cards().len() {
                    Study::Studying {
                        index: index + 1,
                        flipped: false,
                    }
                } else {
                    Study::Idle
                };
                Ok(())
            }
        }
    }

    /// Whether the card being shown is the last one.
    pub fn on_last_card(&self, set: &FlashcardSet) -> bool {
        match self {
            Study::Idle => false,
            Study::Studying { index, .. } => index + 1 >= set.cards().len(),
        }
    }

    /// The text currently facing up.
    pub fn current<'a>(&self, set: &'a FlashcardSet) -> Option<&'a str> {
        match self {
            Study::Idle => None,
            Study::Studying { index, flipped } => {
                let side = if *flipped { Side::Back } else { Side::Front };
                set.cards().get(*index).map(|card| card.face(side))
            }
        }
    }
}
