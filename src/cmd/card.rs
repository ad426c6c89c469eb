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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::rejection::Rejection;

/// Card positions on the command line start at one.
fn index(position: u64) -> Result<usize, Rejection> {
    usize::try_from(position)
        .map(|p| p.saturating_sub(1))
        .map_err(|_| Rejection::CardNotFound { index: usize::MAX })
}

pub fn add_card(
    directory: Option<String>,
    set: String,
    front: String,
    back: String,
) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    coll.library.add_card(&front, &back)??;
    let count = coll.library.active()?.cards().len();
    println!("Added card {count}.");
    Ok(())
}

pub fn edit_card(
    directory: Option<String>,
    set: String,
    position: u64,
    front: String,
    back: String,
) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    coll.library.update_card(index(position)?, &front, &back)??;
    println!("Updated card {position}.");
    Ok(())
}

pub fn delete_card(directory: Option<String>, set: String, position: u64) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    let removed: Card = coll.library.delete_card(index(position)?)??;
    println!("Deleted card {position}: {}", removed.front());
    Ok(())
}

pub fn list_cards(directory: Option<String>, set: String) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    let set = coll.library.active()?;
    println!("Flashcards in set: {}", set.name());
    for (i, card) in set.cards().iter().enumerate() {
        println!("{}. {} / {}", i + 1, card.front(), card.back());
    }
    Ok(())
}
