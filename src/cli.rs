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

use clap::Parser;
use clap::Subcommand;

use crate::cmd::card::add_card;
use crate::cmd::card::delete_card;
use crate::cmd::card::edit_card;
use crate::cmd::card::list_cards;
use crate::cmd::export::export_set;
use crate::cmd::set::create_set;
use crate::cmd::set::delete_set;
use crate::cmd::set::list_sets;
use crate::cmd::study::study_set;
use crate::collection::Collection;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the data directory. Defaults to the current directory.
    #[arg(short, long, global = true)]
    directory: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage flashcard sets.
    Set {
        #[command(subcommand)]
        command: SetCommand,
    },
    /// Manage the cards in a set.
    Card {
        #[command(subcommand)]
        command: CardCommand,
    },
    /// Put a set's cards in a random order.
    Shuffle {
        /// The set's position in the list, or a prefix of its identifier.
        set: String,
    },
    /// Flip through a set's cards in shuffled order.
    Study {
        /// The set's position in the list, or a prefix of its identifier.
        set: String,
    },
    /// Print the backs of a set's cards to a PDF, eight to a page.
    Export {
        /// The set's position in the list, or a prefix of its identifier.
        set: String,
        /// Where to write the PDF. Defaults to the configured file name in
        /// the data directory.
        #[arg(short, long)]
        output: Option<String>,
        /// Open the PDF once it is written.
        #[arg(long)]
        open: bool,
    },
}

#[derive(Subcommand)]
enum SetCommand {
    /// Create an empty set.
    Create { name: String },
    /// Delete a set and all its cards.
    Delete { set: String },
    /// List all sets.
    List,
}

#[derive(Subcommand)]
enum CardCommand {
    /// Add a card to the end of a set. Each side is limited to 80 words.
    Add {
        set: String,
        front: String,
        back: String,
    },
    /// Replace the text of a card.
    Edit {
        set: String,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        position: u64,
        front: String,
        back: String,
    },
    /// Delete a card. Later cards move up one position.
    Delete {
        set: String,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        position: u64,
    },
    /// List the cards in a set.
    List { set: String },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let directory = cli.directory;
    match cli.command {
        Command::Set { command } => match command {
            SetCommand::Create { name } => create_set(directory, name),
            SetCommand::Delete { set } => delete_set(directory, set),
            SetCommand::List => list_sets(directory),
        },
        Command::Card { command } => match command {
            CardCommand::Add { set, front, back } => add_card(directory, set, front, back),
            CardCommand::Edit {
                set,
                position,
                front,
                back,
            } => edit_card(directory, set, position, front, back),
            CardCommand::Delete { set, position } => delete_card(directory, set, position),
            CardCommand::List { set } => list_cards(directory, set),
        },
        Command::Shuffle { set } => shuffle_set(directory, set),
        Command::Study { set } => study_set(directory, set),
        Command::Export { set, output, open } => export_set(directory, set, output, open),
    }
}

fn shuffle_set(directory: Option<String>, set: String) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    coll.library.shuffle(&mut rand::thread_rng())??;
    println!("Shuffled {}.", coll.library.active()?.name());
    Ok(())
}
