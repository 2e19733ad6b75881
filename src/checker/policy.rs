//! Fixed poster geometry: where the content band sits and what counts as ink.

use crate::lib::errors::FillError;

/// Header region ends here, as a fraction of page height.
///
/// A4 poster: 2.8cm top margin plus a 1.8cm header bar, about 4.6cm of 29.7cm.
pub const CONTENT_START_FRACTION: f64 = 0.155;
/// Footer region starts here, as a fraction of page height.
///
/// 1.5cm bottom margin plus a 0.9cm footer bar, about 2.4cm of 29.7cm.
pub const CONTENT_END_FRACTION: f64 = 0.92;
/// Pixels darker than this fraction of white count as content.
pub const DARKNESS_FRACTION: f64 = 0.92;

/// Geometry and darkness policy applied to a rendered poster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPolicy {
    pub content_start_fraction: f64,
    pub content_end_fraction: f64,
    pub darkness_fraction: f64,
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            content_start_fraction: CONTENT_START_FRACTION,
            content_end_fraction: CONTENT_END_FRACTION,
            darkness_fraction: DARKNESS_FRACTION,
        }
    }
}

/// Half-open row range `[start, end)` inspected for content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBand {
    pub start: usize,
    pub end: usize,
}

impl ContentBand {
    pub fn height(&self) -> usize {
        self.end - self.start
    }

    pub fn rows(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl FillPolicy {
    /// Content band for a raster `height` rows tall.
    ///
    /// Both bounds are floored; an empty or inverted band is
    /// `FillError::InvalidContentArea`.
    pub fn content_band(&self, height: usize) -> Result<ContentBand, FillError> {
        let start = floor_fraction(height as f64, self.content_start_fraction);
        let end = floor_fraction(height as f64, self.content_end_fraction).min(height);
        if end <= start {
            return Err(FillError::InvalidContentArea { height });
        }
        Ok(ContentBand { start, end })
    }

    /// Sample values strictly below this are dark.
    pub fn darkness_threshold(&self, maxval: u8) -> u8 {
        floor_fraction(f64::from(maxval), self.darkness_fraction).min(usize::from(maxval)) as u8
    }
}

fn floor_fraction(value: f64, fraction: f64) -> usize {
    // `as` saturates: negatives and NaN land on 0.
    (value * fraction).floor() as usize
}
