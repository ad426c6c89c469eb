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

use std::mem::take;

use crate::export::surface::Surface;
use crate::types::card::Card;

pub const CARD_WIDTH: f32 = 95.0;
pub const CARD_HEIGHT: f32 = 55.0;
pub const MARGIN: f32 = 5.0;
pub const HORIZONTAL_SPACING: f32 = 5.0;
pub const VERTICAL_SPACING: f32 = 5.0;
pub const COLUMNS: usize = 2;
pub const CARDS_PER_PAGE: usize = 8;
pub const LINE_HEIGHT: f32 = 6.0;
pub const LINE_WIDTH: f32 = 0.5;
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Horizontal room given up inside a box before text is wrapped.
const TEXT_INSET: f32 = 4.0;

/// Where one card ended up.
#[derive(Clone, PartialEq, Debug)]
pub struct Placement {
    /// Zero-based page number.
    pub page: usize,
    /// Top-left corner of the box.
    pub x: f32,
    pub y: f32,
    /// The wrapped lines of the card's back.
    pub lines: Vec<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Layout {
    pub pages: usize,
    pub boxes: Vec<Placement>,
}

impl Layout {
    #[cfg(test)]
    pub fn boxes_on(&self, page: usize) -> usize {
        self.boxes.iter().filter(|b| b.page == page).count()
    }
}

/// Draw the backs of `cards` onto `surface` as a grid of boxes, two columns
/// wide and eight boxes to a page.
///
/// Fronts are not printed: the sheets are cut into one-sided cards. Text is
/// never clipped, so a back with more lines than fit in a box runs past its
/// edges and can start above the top of the page.
pub fn layout<S: Surface>(cards: &[Card], surface: &mut S, font_size: f32) -> Layout {
    surface.set_font_size(font_size);
    surface.set_line_width(LINE_WIDTH);

    let available_width = surface.page_width() - 2.0 * MARGIN;
    let grid_width = COLUMNS as f32 * CARD_WIDTH + (COLUMNS - 1) as f32 * HORIZONTAL_SPACING;
    let start_x = (available_width - grid_width) / 2.0;

    let mut x = start_x;
    let mut y = MARGIN;
    let mut page = 0;
    let mut boxes = Vec::with_capacity(cards.len());

    for (i, card) in cards.iter().enumerate() {
        if i > 0 && i % CARDS_PER_PAGE == 0 {
            surface.new_page();
            page += 1;
            x = start_x;
            y = MARGIN;
        }

        let lines = wrap_text(card.back(), CARD_WIDTH - TEXT_INSET, &*surface);
        let top = y + (CARD_HEIGHT - lines.len() as f32 * LINE_HEIGHT) / 2.0;
        for (n, line) in lines.iter().enumerate() {
            let width = surface.text_width(line);
            let line_x = x + (CARD_WIDTH - width) / 2.0;
            surface.draw_text(line, line_x, top + n as f32 * LINE_HEIGHT);
        }
        surface.draw_rect(x, y, CARD_WIDTH, CARD_HEIGHT);
        boxes.push(Placement { page, x, y, lines });

        let count = i + 1;
        if count % CARDS_PER_PAGE != 0 {
            if count % COLUMNS == 0 {
                x = start_x;
                y += CARD_HEIGHT + VERTICAL_SPACING;
            } else {
                x += CARD_WIDTH + HORIZONTAL_SPACING;
            }
        }
    }

    Layout {
        pages: page + 1,
        boxes,
    }
}

/// Break `text` into lines no wider than `max_width`. Lines break between
/// words, and at explicit newlines. A word too wide for a line of its own
/// is split between characters.
pub fn wrap_text<S: Surface + ?Sized>(text: &str, max_width: f32, surface: &S) -> Vec<String> {
    let fits = |s: &str| surface.text_width(s) <= max_width;
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if !fits(word) {
                if !line.is_empty() {
                    lines.push(take(&mut line));
                }
                for c in word.chars() {
                    line.push(c);
                    if line.chars().count() > 1 && !fits(&line) {
                        line.pop();
                        lines.push(take(&mut line));
                        line.push(c);
                    }
                }
                continue;
            }
            if line.is_empty() {
                line.push_str(word);
            } else {
                let candidate = format!("{line} {word}");
                if fits(&candidate) {
                    line = candidate;
                } else {
                    lines.push(take(&mut line));
                    line.push_str(word);
                }
            }
        }
        lines.push(line);
    }
    lines
}
