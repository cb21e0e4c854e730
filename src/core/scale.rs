use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span_px: f64) -> ChartResult<f64> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * span_px)
    }

    pub fn pixel_to_domain(self, pixel: f64, span_px: f64) -> ChartResult<f64> {
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel span must be finite and > 0".to_owned(),
            ));
        }
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / span_px;
        Ok(self.domain_start + normalized * span)
    }
}

/// Discrete counterpart of [`LinearScale`]: positions one band per category
/// tick across a pixel span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBandScale {
    tick_count: usize,
}

impl CategoryBandScale {
    pub fn new(tick_count: usize) -> ChartResult<Self> {
        if tick_count == 0 {
            return Err(ChartError::InvalidData(
                "band scale needs at least one tick".to_owned(),
            ));
        }
        Ok(Self { tick_count })
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn band_width(self, span_px: f64) -> f64 {
        span_px / self.tick_count as f64
    }

    /// Pixel center of the band at `tick_index`.
    pub fn band_center(self, tick_index: usize, span_px: f64) -> ChartResult<f64> {
        if tick_index >= self.tick_count {
            return Err(ChartError::InvalidData(format!(
                "tick index {tick_index} out of range for {} ticks",
                self.tick_count
            )));
        }
        let width = self.band_width(span_px);
        Ok(width * (tick_index as f64 + 0.5))
    }

    /// Inverse hit-test: which band contains `pixel`, if any.
    #[must_use]
    pub fn band_at(self, pixel: f64, span_px: f64) -> Option<usize> {
        if !pixel.is_finite() || pixel < 0.0 || pixel >= span_px {
            return None;
        }
        let index = (pixel / self.band_width(span_px)) as usize;
        Some(index.min(self.tick_count - 1))
    }
}
