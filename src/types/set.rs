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

use crate::types::card::Card;
use crate::types::id::SetId;

/// A named, ordered collection of cards.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FlashcardSet {
    #[serde(default = "SetId::generate")]
    id: SetId,
    name: String,
    #[serde(default)]
    pub(crate) cards: Vec<Card>,
}

impl FlashcardSet {
    /// Create an empty set. The caller is responsible for validating the
    /// name.
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: SetId::generate(),
            name,
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> SetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
