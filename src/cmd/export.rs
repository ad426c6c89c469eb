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

use std::path::PathBuf;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::export::render;

pub fn export_set(
    directory: Option<String>,
    set: String,
    output: Option<String>,
    open: bool,
) -> Fallible<()> {
    let mut coll: Collection = Collection::new(directory)?;
    coll.library.select_by(&set)?;
    let path: PathBuf = match output {
        Some(path) => PathBuf::from(path),
        None => coll.directory.join(&coll.config.export.filename),
    };
    let (surface, layout) = render(&coll.library, coll.config.export.font_size)?;
    for (i, placement) in layout.boxes.iter().enumerate() {
        log::debug!(
            "Card {} on page {} at ({}, {}), {} lines",
            i + 1,
            placement.page + 1,
            placement.x,
            placement.y,
            placement.lines.len()
        );
    }
    surface.save(&path)?;
    println!(
        "Wrote {} cards on {} pages to {}.",
        layout.boxes.len(),
        layout.pages,
        path.display()
    );
    if open {
        open::that(&path)?;
    }
    Ok(())
}
