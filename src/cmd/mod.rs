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

pub mod card;
pub mod export;
pub mod set;
pub mod study;

/// "1 card", "3 cards".
pub fn card_count(count: usize) -> String {
    let noun = if count == 1 { "card" } else { "cards" };
    format!("{count} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_count() {
        assert_eq!(card_count(0), "0 cards");
        assert_eq!(card_count(1), "1 card");
        assert_eq!(card_count(8), "8 cards");
    }
}
