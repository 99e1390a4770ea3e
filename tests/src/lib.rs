//! Shared data and helpers for the integration tests and benchmarks.

use pathmask::raster::AlphaMask;

#[cfg(test)]
mod clefs;
#[cfg(test)]
mod masks;

/// A treble clef outline, with moves followed by implicit coordinates.
pub static TREBLE_CLEF: &str = include_str!("../data/treble_clef.txt");

/// A bass clef outline.
pub static BASS_CLEF: &str = include_str!("../data/bass_clef.txt");

pub static TRIANGLE: &str = "m33 33h33l-16.7 33z";

/// One digit per pixel (the coverage in tenths, separated by spaces), one line per row.
pub fn format_mask(mask: &AlphaMask) -> String {
    let mut s = String::new();
    for y in mask.rect().min.y..mask.rect().max.y {
        for &alpha in mask.row(y) {
            s.push(' ');
            s.push_str(&(alpha as u32 * 10 / 256).to_string());
        }
        s.push('\n');
    }

    s
}
