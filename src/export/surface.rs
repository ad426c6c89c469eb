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

/// A page-oriented drawing target. Coordinates are millimetres from the
/// top-left corner of the current page, and text is positioned by its
/// baseline.
pub trait Surface {
    /// Width of the page in millimetres.
    fn page_width(&self) -> f32;

    fn set_font_size(&mut self, size: f32);

    fn set_line_width(&mut self, width: f32);

    /// Width of `text` at the current font size.
    fn text_width(&self, text: &str) -> f32;

    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Stroke the outline of a rectangle.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Finish the current page and start drawing on a fresh one.
    fn new_page(&mut self);
}

#[cfg(test)]
pub use recording::RecordingSurface;

#[cfg(test)]
mod recording {
    use super::Surface;
    use crate::export::metrics;

    #[derive(Clone, PartialEq, Debug)]
    pub enum Recorded {
        Text { text: String, x: f32, y: f32 },
        Rect { x: f32, y: f32, width: f32, height: f32 },
    }

    /// Remembers everything drawn on it, page by page.
    pub struct RecordingSurface {
        pub pages: Vec<Vec<Recorded>>,
        font_size: f32,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                pages: vec![Vec::new()],
                font_size: 16.0,
            }
        }

        pub fn rects(&self, page: usize) -> Vec<(f32, f32, f32, f32)> {
            self.pages[page]
                .iter()
                .filter_map(|op| match op {
                    Recorded::Rect {
                        x,
                        y,
                        width,
                        height,
                    } => Some((*x, *y, *width, *height)),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self, page: usize) -> Vec<(String, f32, f32)> {
            self.pages[page]
                .iter()
                .filter_map(|op| match op {
                    Recorded::Text { text, x, y } => Some((text.clone(), *x, *y)),
                    _ => None,
                })
                .collect()
        }

        fn current(&mut self) -> &mut Vec<Recorded> {
            let last = self.pages.len() - 1;
            &mut self.pages[last]
        }
    }

    impl Surface for RecordingSurface {
        fn page_width(&self) -> f32 {
            210.0
        }

        fn set_font_size(&mut self, size: f32) {
            self.font_size = size;
        }

        fn set_line_width(&mut self, _width: f32) {}

        fn text_width(&self, text: &str) -> f32 {
            metrics::text_width(text, self.font_size)
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32) {
            self.current().push(Recorded::Text {
                text: text.to_string(),
                x,
                y,
            });
        }

        fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
            self.current().push(Recorded::Rect {
                x,
                y,
                width,
                height,
            });
        }

        fn new_page(&mut self) {
            self.pages.push(Vec::new());
        }
    }
}
