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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use rand::Rng;
use rand::thread_rng;

use crate::cmd::card_count;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::library::Library;
use crate::storage::BlobStore;
use crate::study::Study;

pub fn study_set(directory: Option<String>, set: String) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    let stdin = stdin();
    let stdout = stdout();
    run_session(
        &mut coll.library,
        &mut thread_rng(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Drive a study session from `input`, one command per line. End of input
/// ends the session.
pub fn run_session<B, R, I, O>(
    library: &mut Library<B>,
    rng: &mut R,
    input: &mut I,
    output: &mut O,
) -> Fallible<()>
where
    B: BlobStore,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut study: Study = Study::start(library, rng)??;
    let set = library.active()?;
    let total = set.cards().len();
    writeln!(output, "Studying {} ({}).", set.name(), card_count(total))?;

    while let Study::Studying { index, flipped } = study {
        let side = if flipped { "Back" } else { "Front" };
        let text = study.current(set).unwrap_or_default();
        writeln!(output)?;
        writeln!(output, "[{}/{total}] {side}: {text}", index + 1)?;
        let flip_hint = if flipped { "show front" } else { "show back" };
        let next_hint = if study.on_last_card(set) {
            "finish study"
        } else {
            "next card"
        };
        writeln!(output, "[enter] {flip_hint}  [n] {next_hint}  [q] quit")?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "Session ended.")?;
            return Ok(());
        }
        match line.trim() {
            "" | "f" => study.flip()?,
            "n" => study.next(set)?,
            "q" => {
                writeln!(output, "Session ended.")?;
                return Ok(());
            }
            other => writeln!(output, "Unknown command: {other}")?,
        }
    }

    writeln!(output, "Session completed.")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::storage::MemoryStore;

    fn library(cards: &[(&str, &str)]) -> Fallible<Library<MemoryStore>> {
        let mut library = Library::open(MemoryStore::new())?;
        let id = library.create_set("Capitals")??;
        library.select(id)?;
        for (front, back) in cards {
            library.add_card(front, back)??;
        }
        Ok(library)
    }

    fn run(library: &mut Library<MemoryStore>, input: &str) -> Fallible<String> {
        let mut rng = StdRng::seed_from_u64(9);
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output: Vec<u8> = Vec::new();
        run_session(library, &mut rng, &mut input, &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    #[test]
    fn test_complete_session() -> Fallible<()> {
        let mut library = library(&[("France", "Paris")])?;
        let out = run(&mut library, "\nn\n")?;
        assert!(out.contains("Studying Capitals (1 card)."));
        assert!(out.contains("[1/1] Front: France"));
        assert!(out.contains("[1/1] Back: Paris"));
        assert!(out.contains("finish study"));
        assert!(out.ends_with("Session completed.\n"));
        Ok(())
    }

    #[test]
    fn test_visits_every_card() -> Fallible<()> {
        let mut library = library(&[("A", "a"), ("B", "b"), ("C", "c")])?;
        let out = run(&mut library, "n\nn\nn\n")?;
        assert!(out.starts_with("Studying Capitals (3 cards).\n"));
        for front in ["A", "B", "C"] {
            assert!(out.contains(&format!("Front: {front}")));
        }
        assert!(out.contains("[3/3]"));
        assert!(out.contains("Session completed."));
        Ok(())
    }

    #[test]
    fn test_quit_and_end_of_input() -> Fallible<()> {
        let mut library = library(&[("A", "a"), ("B", "b")])?;
        let out = run(&mut library, "q\n")?;
        assert!(out.ends_with("Session ended.\n"));
        let out = run(&mut library, "")?;
        assert!(out.ends_with("Session ended.\n"));
        Ok(())
    }

    #[test]
    fn test_unknown_command() -> Fallible<()> {
        let mut library = library(&[("A", "a")])?;
        let out = run(&mut library, "x\nn\n")?;
        assert!(out.contains("Unknown command: x"));
        Ok(())
    }

    #[test]
    fn test_empty_set() -> Fallible<()> {
        let mut library = library(&[])?;
        let result = run(&mut library, "");
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: the set has no cards.".to_string())
        );
        Ok(())
    }
}
