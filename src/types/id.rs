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

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// The number of hex digits shown when an identifier is abbreviated.
const SHORT_LEN: usize = 8;

/// Stable identifier of a flashcard set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(Uuid);

/// Stable identifier of a card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl SetId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The abbreviated form printed in set listings.
    pub fn short(&self) -> String {
        let mut s = self.to_string();
        s.truncate(SHORT_LEN);
        s
    }

    /// Whether `prefix` is a case-insensitive prefix of the hyphenated form.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.to_string().starts_with(&prefix.to_ascii_lowercase())
    }
}

impl CardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for SetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(SetId::generate(), SetId::generate());
        assert_ne!(CardId::generate(), CardId::generate());
    }

    #[test]
    fn test_short_id() {
        let id = SetId::generate();
        let short = id.short();
        assert_eq!(short.len(), SHORT_LEN);
        assert!(id.to_string().starts_with(&short));
    }

    #[test]
    fn test_matches_prefix() {
        let id = SetId::generate();
        let short = id.short();
        assert!(id.matches_prefix(&short));
        assert!(id.matches_prefix(&short.to_ascii_uppercase()));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn test_serializes_as_plain_string() -> Result<(), serde_json::Error> {
        let id = SetId::generate();
        let json = serde_json::to_string(&id)?;
        assert_eq!(json, format!("\"{id}\""));
        let back: SetId = serde_json::from_str(&json)?;
        assert_eq!(back, id);
        Ok(())
    }
}
