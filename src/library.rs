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

use crate::error::Fallible;
use crate::storage::BlobStore;
use crate::store::Store;
use crate::types::card::Card;
use crate::types::id::CardId;
use crate::types::id::SetId;
use crate::types::rejection::Rejection;
use crate::types::set::FlashcardSet;

/// The key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "flashcardSets";

/// Where an unreadable snapshot is copied before it is replaced.
pub const CORRUPT_KEY: &str = "flashcardSets.corrupt";

/// Binds a [`Store`] to persistent storage and tracks the active set.
///
/// Every mutation that succeeds writes the whole snapshot back to the blob
/// store before returning. Rejected mutations write nothing.
pub struct Library<B: BlobStore> {
    blobs: B,
    store: Store,
    active: Option<SetId>,
}

/// The outer layer is an I/O failure, the inner one a declined precondition.
pub type Outcome<T> = Fallible<Result<T, Rejection>>;

impl<B: BlobStore> Library<B> {
    /// Load the snapshot from `blobs`. A missing snapshot means an empty
    /// library. An unreadable one is set aside under [`CORRUPT_KEY`] and the
    /// library starts empty.
    pub fn open(mut blobs: B) -> Fallible<Self> {
        let (store, normalize) = match blobs.get(SNAPSHOT_KEY)? {
            None => {
                log::debug!("No snapshot found, starting empty.");
                (Store::new(), false)
            }
            Some(raw) => match serde_json::from_str::<Vec<FlashcardSet>>(&raw) {
                Ok(sets) => {
                    log::debug!("Loaded {} sets.", sets.len());
                    // Snapshots written before identifiers existed are
                    // rewritten with the ones just generated.
                    let normalize = serde_json::to_string(&sets)? != raw;
                    (Store::from_snapshot(sets), normalize)
                }
                Err(e) => {
                    log::warn!("Snapshot is unreadable ({e}), starting empty.");
                    blobs.set(CORRUPT_KEY, &raw)?;
                    (Store::new(), false)
                }
            },
        };
        let mut library = Self {
            blobs,
            store,
            active: None,
        };
        if normalize {
            log::debug!("Rewriting snapshot in the current format.");
            library.sync()?;
        }
        Ok(library)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    #[cfg(test)]
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Make a set the active one.
    pub fn select(&mut self, id: SetId) -> Result<(), Rejection> {
        self.store.get(id)?;
        self.active = Some(id);
        Ok(())
    }

    /// Resolve a position or identifier prefix and make that set active.
    pub fn select_by(&mut self, selector: &str) -> Result<SetId, Rejection> {
        let id = self.store.resolve(selector)?;
        self.select(id)?;
        Ok(id)
    }

    /// The active set, or [`Rejection::NoActiveSet`] if none is selected or
    /// the selected one has since been deleted.
    pub fn active(&self) -> Result<&FlashcardSet, Rejection> {
        let id = self.active.ok_or(Rejection::NoActiveSet)?;
        self.store.get(id)
    }

    fn active_id(&self) -> Result<SetId, Rejection> {
        self.active().map(|set| set.id())
    }

    pub fn create_set(&mut self, name: &str) -> Outcome<SetId> {
        self.apply(|store| store.create_set(name))
    }

    /// Delete a set. If it was the active set, nothing is active afterwards.
    pub fn delete_set(&mut self, id: SetId) -> Outcome<FlashcardSet> {
        let outcome = self.apply(|store| store.delete_set(id))?;
        if outcome.is_ok() && self.active == Some(id) {
            self.active = None;
        }
        Ok(outcome)
    }

    pub fn add_card(&mut self, front: &str, back: &str) -> Outcome<CardId> {
        let id = match self.active_id() {
            Ok(id) => id,
            Err(r) => return Ok(Err(r)),
        };
        self.apply(|store| store.add_card(id, front, back))
    }

    pub fn delete_card(&mut self, index: usize) -> Outcome<Card> {
        let id = match self.active_id() {
            Ok(id) => id,
            Err(r) => return Ok(Err(r)),
        };
        self.apply(|store| store.delete_card(id, index))
    }

    pub fn update_card(&mut self, index: usize, front: &str, back: &str) -> Outcome<()> {
        let id = match self.active_id() {
            Ok(id) => id,
            Err(r) => return Ok(Err(r)),
        };
        self.apply(|store| store.update_card(id, index, front, back))
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome<()> {
        let id = match self.active_id() {
            Ok(id) => id,
            Err(r) => return Ok(Err(r)),
        };
        self.apply(|store| store.shuffle(id, rng))
    }

    fn apply<T>(&mut self, op: impl FnOnce(&mut Store) -> Result<T, Rejection>) -> Outcome<T> {
        let outcome = op(&mut self.store);
        if outcome.is_ok() {
            self.sync()?;
        }
        Ok(outcome)
    }

    /// Write the whole snapshot to the blob store.
    pub fn sync(&mut self) -> Fallible<()> {
        let json: String = serde_json::to_string(self.store.snapshot())?;
        log::debug!("Syncing {} sets.", self.store.len());
        self.blobs.set(SNAPSHOT_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::storage::MemoryStore;

    fn reopen(library: Library<MemoryStore>) -> Fallible<Library<MemoryStore>> {
        Library::open(library.blobs)
    }

    #[test]
    fn test_open_empty() -> Fallible<()> {
        let library = Library::open(MemoryStore::new())?;
        assert!(library.store().is_empty());
        assert_eq!(library.blobs().writes(), 0);
        assert_eq!(library.active().err(), Some(Rejection::NoActiveSet));
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        let a = library.create_set("Three")??;
        library.create_set("Zero")??;
        library.select(a)?;
        for i in 0..3 {
            library.add_card(&format!("q{i}"), &format!("a{i}"))??;
        }
        let before: Store = library.store().clone();
        let library = reopen(library)?;
        assert_eq!(library.store(), &before);
        let sizes: Vec<usize> = library.store().sets().map(|s| s.cards().len()).collect();
        assert_eq!(sizes, vec![3, 0]);
        Ok(())
    }

    #[test]
    fn test_every_mutation_syncs() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        let id = library.create_set("s")??;
        library.select(id)?;
        library.add_card("q", "a")??;
        library.update_card(0, "q2", "a2")??;
        library.shuffle(&mut StdRng::seed_from_u64(3))??;
        library.delete_card(0)??;
        library.delete_set(id)??;
        assert_eq!(library.blobs().writes(), 6);
        let library = reopen(library)?;
        assert!(library.store().is_empty());
        Ok(())
    }

    #[test]
    fn test_rejections_do_not_sync() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        assert_eq!(library.create_set("   ")?, Err(Rejection::EmptyName));
        assert_eq!(library.add_card("q", "a")?, Err(Rejection::NoActiveSet));
        let id = library.create_set("s")??;
        library.select(id)?;
        assert_eq!(
            library.delete_card(0)?,
            Err(Rejection::CardNotFound { index: 0 })
        );
        let long = vec!["w"; 81].join(" ");
        assert!(library.add_card(&long, "a")?.is_err());
        assert_eq!(library.blobs().writes(), 1);
        Ok(())
    }

    #[test]
    fn test_deleting_active_set_clears_it() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        let a = library.create_set("a")??;
        let b = library.create_set("b")??;
        library.select(b)?;
        library.delete_set(a)??;
        assert_eq!(library.active()?.id(), b);
        library.delete_set(b)??;
        assert_eq!(library.active().err(), Some(Rejection::NoActiveSet));
        assert_eq!(library.add_card("q", "a")?, Err(Rejection::NoActiveSet));
        Ok(())
    }

    #[test]
    fn test_select_by() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        library.create_set("a")??;
        let b = library.create_set("b")??;
        assert_eq!(library.select_by("2")?, b);
        assert_eq!(library.active()?.name(), "b");
        assert_eq!(library.select_by("9"), Err(Rejection::NoActiveSet));
        assert_eq!(library.active()?.name(), "b");
        assert_eq!(library.select(SetId::generate()), Err(Rejection::NoActiveSet));
        Ok(())
    }

    #[test]
    fn test_open_legacy_snapshot() -> Fallible<()> {
        let mut blobs = MemoryStore::new();
        blobs.set(
            SNAPSHOT_KEY,
            r#"[{"name":"Capitals","cards":[{"front":"France","back":"Paris"}]},{"name":"Empty","cards":[]}]"#,
        )?;
        let library = Library::open(blobs)?;
        assert_eq!(library.store().len(), 2);
        let set = library.store().resolve("1")?;
        let set = library.store().get(set)?;
        assert_eq!(set.name(), "Capitals");
        assert_eq!(set.cards()[0].back(), "Paris");
        // The generated identifiers were written back.
        assert_eq!(library.blobs().writes(), 2);
        let expected: Store = library.store().clone();
        let library = reopen(library)?;
        assert_eq!(library.store(), &expected);
        assert_eq!(library.blobs().writes(), 2);
        Ok(())
    }

    #[test]
    fn test_open_corrupt_snapshot() -> Fallible<()> {
        let mut blobs = MemoryStore::new();
        blobs.set(SNAPSHOT_KEY, r#"{"not": "a list"}"#)?;
        let library = Library::open(blobs)?;
        assert!(library.store().is_empty());
        assert_eq!(
            library.blobs().get(CORRUPT_KEY)?,
            Some(r#"{"not": "a list"}"#.to_string())
        );
        Ok(())
    }
}
