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

use serde::Deserialize;
use serde::Serialize;

use crate::types::id::CardId;
use crate::types::rejection::Rejection;
use crate::types::rejection::Side;

/// The maximum number of words on either side of a card.
pub const MAX_WORDS: usize = 80;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Absent from snapshots written before cards had identifiers.
    #[serde(default = "CardId::generate")]
    id: CardId,
    front: String,
    back: String,
}

impl Card {
    /// Create a card, rejecting text over the word limit. The text is stored
    /// as given.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Result<Self, Rejection> {
        let front: String = front.into();
        let back: String = back.into();
        check_length(Side::Front, &front)?;
        check_length(Side::Back, &back)?;
        Ok(Self {
            id: CardId::generate(),
            front,
            back,
        })
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn face(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// Replace both sides, keeping the card's identity. Nothing changes if
    /// either side is over the word limit.
    pub fn replace(
        &mut self,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Result<(), Rejection> {
        let front: String = front.into();
        let back: String = back.into();
        check_length(Side::Front, &front)?;
        check_length(Side::Back, &back)?;
        self.front = front;
        self.back = back;
        Ok(())
    }
}

/// The number of whitespace-delimited words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn check_length(side: Side, text: &str) -> Result<(), Rejection> {
    let words = word_count(text);
    if words > MAX_WORDS {
        Err(Rejection::TextTooLong { side, words })
    } else {
        Ok(())
    }
}
