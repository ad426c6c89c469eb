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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::library::Library;
use crate::storage::DirectoryStore;

/// A data directory opened for use: its configuration and its library.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub library: Library<DirectoryStore>,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config: Config = Config::load(&directory)?;

        let library = {
            log::debug!("Loading library...");
            let start = Instant::now();
            let library = Library::open(DirectoryStore::new(directory.clone())?)?;
            let end = Instant::now();
            let duration = end.duration_since(start).as_millis();
            log::debug!("Library loaded in {duration}ms.");
            library
        };

        Ok(Self {
            directory,
            config,
            library,
        })
    }
}
