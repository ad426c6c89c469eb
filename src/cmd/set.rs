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

use crate::cmd::card_count;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::set::FlashcardSet;

pub fn create_set(directory: Option<String>, name: String) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    let id = coll.library.create_set(&name)??;
    let position = coll.library.store().len();
    println!("Created set {position} [{}].", id.short());
    Ok(())
}

pub fn delete_set(directory: Option<String>, set: String) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    let id = coll.library.store().resolve(&set)?;
    let removed: FlashcardSet = coll.library.delete_set(id)??;
    println!(
        "Deleted set {} ({} cards).",
        removed.name(),
        removed.cards().len()
    );
    Ok(())
}

pub fn list_sets(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    if coll.library.store().is_empty() {
        println!("No flashcard sets yet!");
        return Ok(());
    }
    for (i, set) in coll.library.store().sets().enumerate() {
        println!("{}", summary(i + 1, set));
    }
    Ok(())
}

fn summary(position: usize, set: &FlashcardSet) -> String {
    format!(
        "{position}. {} ({}) [{}]",
        set.name(),
        card_count(set.cards().len()),
        set.id().short()
    )
}
