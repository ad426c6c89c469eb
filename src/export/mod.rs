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

//! Printable export: card backs laid out in a grid of cut-out boxes.

pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod surface;

use crate::export::layout::Layout;
use crate::export::layout::layout;
use crate::export::pdf::PdfSurface;
use crate::library::Library;
use crate::storage::BlobStore;
use crate::types::rejection::Rejection;

/// Lay out the active set on A4 pages, ready to be saved.
pub fn render<B: BlobStore>(
    library: &Library<B>,
    font_size: f32,
) -> Result<(PdfSurface, Layout), Rejection> {
    let set = library.active()?;
    if set.is_empty() {
        return Err(Rejection::EmptySet);
    }
    log::debug!("Laying out {} cards from {}", set.cards().len(), set.name());
    let mut surface = PdfSurface::a4();
    let layout = layout(set.cards(), &mut surface, font_size);
    Ok((surface, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;
    use crate::export::layout::DEFAULT_FONT_SIZE;
    use crate::storage::MemoryStore;

    #[test]
    fn test_render_requires_active_set() -> Fallible<()> {
        let library = Library::open(MemoryStore::new())?;
        assert_eq!(
            render(&library, DEFAULT_FONT_SIZE).err(),
            Some(Rejection::NoActiveSet)
        );
        Ok(())
    }

    #[test]
    fn test_render_rejects_empty_set() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        let id = library.create_set("empty")??;
        library.select(id)?;
        assert_eq!(
            render(&library, DEFAULT_FONT_SIZE).err(),
            Some(Rejection::EmptySet)
        );
        Ok(())
    }

    #[test]
    fn test_render() -> Fallible<()> {
        let mut library = Library::open(MemoryStore::new())?;
        let id = library.create_set("deck")??;
        library.select(id)?;
        for i in 0..9 {
            library.add_card(&format!("q{i}"), &format!("a{i}"))??;
        }
        let (surface, layout) = render(&library, DEFAULT_FONT_SIZE)?;
        assert_eq!(surface.page_count(), 2);
        assert_eq!(layout.pages, 2);
        assert_eq!(layout.boxes.len(), 9);
        Ok(())
    }
}
