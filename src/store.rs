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
use rand::seq::SliceRandom;

use crate::types::card::Card;
use crate::types::id::CardId;
use crate::types::id::SetId;
use crate::types::rejection::Rejection;
use crate::types::set::FlashcardSet;

/// The in-memory collection of sets. Pure data and operations: nothing here
/// touches storage.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Store {
    sets: Vec<FlashcardSet>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(sets: Vec<FlashcardSet>) -> Self {
        Self { sets }
    }

    pub fn snapshot(&self) -> &[FlashcardSet] {
        &self.sets
    }

    pub fn sets(&self) -> impl Iterator<Item = &FlashcardSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, id: SetId) -> Result<&FlashcardSet, Rejection> {
        self.sets
            .iter()
            .find(|set| set.id() == id)
            .ok_or(Rejection::NoActiveSet)
    }

    fn get_mut(&mut self, id: SetId) -> Result<&mut FlashcardSet, Rejection> {
        self.sets
            .iter_mut()
            .find(|set| set.id() == id)
            .ok_or(Rejection::NoActiveSet)
    }

    /// The zero-based position of a set in the list.
    pub fn position(&self, id: SetId) -> Option<usize> {
        self.sets.iter().position(|set| set.id() == id)
    }

    /// Find a set from user input: either a 1-based position in the list, or
    /// a prefix of the set's identifier that matches exactly one set. Input
    /// made only of digits is always read as a position.
    pub fn resolve(&self, selector: &str) -> Result<SetId, Rejection> {
        let selector = selector.trim();
        if let Ok(position) = selector.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| self.sets.get(i))
                .map(|set| set.id())
                .ok_or(Rejection::NoActiveSet);
        }
        let matches: Vec<&FlashcardSet> = self
            .sets
            .iter()
            .filter(|set| set.id().matches_prefix(selector))
            .collect();
        match matches.as_slice() {
            [] => Err(Rejection::NoActiveSet),
            [set] => Ok(set.id()),
            _ => Err(Rejection::AmbiguousSet {
                matches: matches.len(),
            }),
        }
    }

    /// Append a new, empty set. The name is stored trimmed.
    pub fn create_set(&mut self, name: &str) -> Result<SetId, Rejection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Rejection::EmptyName);
        }
        let set = FlashcardSet::new(name.to_string());
        let id = set.id();
        self.sets.push(set);
        Ok(id)
    }

    /// Remove a set. Every set after it moves up one position.
    pub fn delete_set(&mut self, id: SetId) -> Result<FlashcardSet, Rejection> {
        let position = self.position(id).ok_or(Rejection::NoActiveSet)?;
        Ok(self.sets.remove(position))
    }

    /// Append a card to the end of a set.
    pub fn add_card(&mut self, id: SetId, front: &str, back: &str) -> Result<CardId, Rejection> {
        let set = self.get_mut(id)?;
        let card = Card::new(front, back)?;
        let card_id = card.id();
        set.cards.push(card);
        Ok(card_id)
    }

    /// Remove the card at `index`. Every card after it moves up one position.
    pub fn delete_card(&mut self, id: SetId, index: usize) -> Result<Card, Rejection> {
        let set = self.get_mut(id)?;
        if index >= set.cards.len() {
            return Err(Rejection::CardNotFound { index });
        }
        Ok(set.cards.remove(index))
    }

    /// Replace the text of the card at `index`.
    pub fn update_card(
        &mut self,
        id: SetId,
        index: usize,
        front: &str,
        back: &str,
    ) -> Result<(), Rejection> {
        let set = self.get_mut(id)?;
        let card = set
            .cards
            .get_mut(index)
            .ok_or(Rejection::CardNotFound { index })?;
        card.replace(front, back)
    }

    /// Put the set's cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, id: SetId, rng: &mut R) -> Result<(), Rejection> {
        let set = self.get_mut(id)?;
        set.cards.shuffle(rng);
        Ok(())
    }
}
