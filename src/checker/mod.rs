//! Poster fill check: rasterize page 1, measure the content band.
mod measure;
mod policy;
mod rasterizer;

use std::path::Path;

use tracing::{warn, Instrument};

use crate::lib::{errors::FillError, telemetry::CheckSpan};

pub use measure::measure_fill;
pub use policy::{
    ContentBand, FillPolicy, CONTENT_END_FRACTION, CONTENT_START_FRACTION, DARKNESS_FRACTION,
};
pub use rasterizer::{PdftoppmRasterizer, Rasterizer, DEFAULT_PDFTOPPM_PROGRAM};

/// Fill percentage of the poster at `pdf_path`, or why it could not be measured.
pub async fn check_fill<R: Rasterizer>(
    rasterizer: &R,
    pdf_path: &Path,
    policy: &FillPolicy,
) -> Result<f64, FillError> {
    let span = CheckSpan::start(pdf_path);
    let result = async {
        let image = rasterizer.rasterize(pdf_path).await?;
        measure_fill(&image, policy)
    }
    .instrument(span.span().clone())
    .await;

    match &result {
        Ok(fill) => span.finish("measured", Some(*fill)),
        Err(err) => {
            warn!(
                target: "poster_fill::check",
                pdf = %pdf_path.display(),
                code = err.code(),
                reason = %err,
                "Fill check failed"
            );
            span.finish("error", None);
        }
    }
    result
}
