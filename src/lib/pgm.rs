//! Binary PGM (`P5`) decoding.
//!
//! Only the layout `pdftoppm -gray` produces is accepted: a magic line,
//! optional `#` comment lines, a `width height` line, a `maxval` line and
//! then one byte per pixel.

use crate::lib::errors::FillError;

/// Magic token for binary graymaps.
pub const PGM_MAGIC: &str = "P5";
/// File extension `pdftoppm` uses for grayscale output.
pub const PGM_EXTENSION: &str = "pgm";

/// Decoded grayscale raster, row-major and top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    maxval: u8,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Build a raster, enforcing `pixels.len() == width * height`.
    pub fn new(width: usize, height: usize, maxval: u8, pixels: Vec<u8>) -> Result<Self, FillError> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| FillError::malformed(format!("dimensions {width}x{height} overflow")))?;
        if pixels.len() != expected {
            return Err(FillError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            maxval,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Samples of row `index`. Panics if `index >= height`.
    pub fn row(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.pixels[start..start + self.width]
    }
}

/// Parse a binary PGM buffer into a [`RasterImage`].
pub fn parse_pgm(bytes: &[u8]) -> Result<RasterImage, FillError> {
    let mut reader = LineReader::new(bytes);

    let magic = reader.next_line().unwrap_or_default();
    let magic = String::from_utf8_lossy(magic).trim().to_string();
    if magic != PGM_MAGIC {
        return Err(FillError::UnsupportedFormat { magic });
    }

    let mut line = header_line(&mut reader, "dimensions")?;
    while line.starts_with('#') {
        line = header_line(&mut reader, "dimensions")?;
    }
    let (width, height) = parse_dimensions(&line)?;

    let maxval_line = header_line(&mut reader, "maxval")?;
    let maxval = parse_maxval(&maxval_line)?;

    RasterImage::new(width, height, maxval, reader.rest().to_vec())
}

fn header_line(reader: &mut LineReader<'_>, what: &str) -> Result<String, FillError> {
    let raw = reader
        .next_line()
        .ok_or_else(|| FillError::malformed(format!("missing {what} line")))?;
    let text = std::str::from_utf8(raw)
        .map_err(|_| FillError::malformed(format!("{what} line is not ASCII")))?;
    Ok(text.trim().to_string())
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), FillError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [width, height] = tokens.as_slice() else {
        return Err(FillError::malformed(format!(
            "expected `width height`, found `{line}`"
        )));
    };
    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|err| FillError::malformed(format!("invalid dimension `{token}`: {err}")))
    };
    Ok((parse(*width)?, parse(*height)?))
}

fn parse_maxval(line: &str) -> Result<u8, FillError> {
    let value = line
        .parse::<u32>()
        .map_err(|err| FillError::malformed(format!("invalid maxval `{line}`: {err}")))?;
    match u8::try_from(value) {
        Ok(maxval) if maxval > 0 => Ok(maxval),
        _ => Err(FillError::malformed(format!(
            "maxval {value} unsupported (expected 1..=255)"
        ))),
    }
}

/// Splits a header off the front of a buffer one `\n`-terminated line at a time.
struct LineReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> LineReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn next_line(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let remaining = &self.bytes[self.pos..];
        match remaining.iter().position(|&b| b == b'\n') {
            Some(end) => {
                self.pos += end + 1;
                Some(&remaining[..end])
            }
            None => {
                self.pos = self.bytes.len();
                Some(remaining)
            }
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}
