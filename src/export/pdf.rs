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

use std::fs::write;
use std::path::Path;

use lopdf::Document;
use lopdf::Object;
use lopdf::Stream;
use lopdf::content::Content;
use lopdf::content::Operation;
use lopdf::dictionary;

use crate::error::Fallible;
use crate::export::metrics;
use crate::export::surface::Surface;

const PT_PER_MM: f32 = 72.0 / 25.4;

pub const A4_WIDTH: f32 = 210.0;
pub const A4_HEIGHT: f32 = 297.0;

/// Resource name of the single font every page uses.
const FONT: &str = "F1";

/// Draws onto the pages of a PDF document set in Helvetica.
pub struct PdfSurface {
    width: f32,
    height: f32,
    font_size: f32,
    line_width: f32,
    pages: Vec<Vec<Operation>>,
}

impl PdfSurface {
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            font_size: 16.0,
            line_width: 0.2,
            pages: vec![Vec::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Assemble the finished document.
    pub fn to_bytes(self) -> Fallible<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                FONT => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            (self.width * PT_PER_MM).into(),
            (self.height * PT_PER_MM).into(),
        ];
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();

        let mut bytes: Vec<u8> = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Write the document to `path`.
    pub fn save(self, path: &Path) -> Fallible<()> {
        let pages = self.page_count();
        let bytes = self.to_bytes()?;
        log::debug!("Writing {pages} pages to {}", path.display());
        write(path, bytes)?;
        Ok(())
    }

    fn x(&self, mm: f32) -> Object {
        (mm * PT_PER_MM).into()
    }

    /// PDF puts the origin at the bottom-left corner.
    fn y(&self, mm: f32) -> Object {
        ((self.height - mm) * PT_PER_MM).into()
    }
}

impl Surface for PdfSurface {
    fn page_width(&self) -> f32 {
        self.width
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn text_width(&self, text: &str) -> f32 {
        metrics::text_width(text, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        let operands = vec![self.x(x), self.y(y)];
        let size: Object = self.font_size.into();
        let ops = self.ops();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![FONT.into(), size]));
        ops.push(Operation::new("Td", operands));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(win_ansi(text))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let operands = vec![
            self.x(x),
            self.y(y + height),
            (width * PT_PER_MM).into(),
            (height * PT_PER_MM).into(),
        ];
        let line_width: Object = (self.line_width * PT_PER_MM).into();
        let ops = self.ops();
        ops.push(Operation::new("w", vec![line_width]));
        ops.push(Operation::new("re", operands));
        ops.push(Operation::new("S", vec![]));
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }
}

/// Encode text for the standard fonts. Characters WinAnsi has no byte for
/// become question marks.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x09 => b' ',
            code @ 0x20..=0x7e => code as u8,
            code @ 0xa0..=0xff => code as u8,
            _ => b'?',
        })
        .collect()
}
