use tracing::debug;

use crate::lib::{errors::FillError, pgm::RasterImage};

use super::policy::FillPolicy;

/// Percentage of content-band rows holding at least one dark pixel.
pub fn measure_fill(image: &RasterImage, policy: &FillPolicy) -> Result<f64, FillError> {
    let band = policy.content_band(image.height())?;
    let threshold = policy.darkness_threshold(image.maxval());

    let filled_rows = band
        .rows()
        .filter(|&row| image.row(row).iter().any(|&sample| sample < threshold))
        .count();

    debug!(
        target: "poster_fill::measure",
        width = image.width(),
        height = image.height(),
        band_start = band.start,
        band_end = band.end,
        threshold,
        filled_rows,
        "Measured content band"
    );

    Ok(filled_rows as f64 / band.height() as f64 * 100.0)
}
