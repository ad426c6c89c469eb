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

//! Glyph widths of the standard Helvetica font, in thousandths of an em.

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Widths of the printable ASCII characters, starting at the space.
const ASCII_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' to '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' to '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' to 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' to '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' to 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p' to '~'
];

/// Width used for characters outside printable ASCII.
const DEFAULT_WIDTH: u16 = 556;

fn glyph_width(c: char) -> u16 {
    let code = c as u32;
    if (32..127).contains(&code) {
        ASCII_WIDTHS[(code - 32) as usize]
    } else {
        DEFAULT_WIDTH
    }
}

/// The width of `text` set in Helvetica at `font_size` points, in
/// millimetres.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c) as u32).sum();
    units as f32 / 1000.0 * font_size * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(text_width("", 12.0), 0.0);
    }

    #[test]
    fn test_digits_are_uniform() {
        assert_eq!(text_width("0123", 12.0), text_width("9999", 12.0));
    }

    #[test]
    fn test_known_width() {
        // "Hi" is 722 + 222 units; at 10pt that is 9.44pt.
        let expected = 9.44 * MM_PER_PT;
        assert!((text_width("Hi", 10.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn test_scales_with_font_size() {
        let small = text_width("Paris", 6.0);
        let large = text_width("Paris", 12.0);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }
}
