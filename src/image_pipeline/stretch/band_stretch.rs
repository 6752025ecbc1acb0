use tracing::debug;

use crate::image_pipeline::band::BandBuffer;
use crate::image_pipeline::common::error::{try_alloc, Result};
use crate::image_pipeline::stretch::types::{StretchMode, Thresholds};

const MAX_OUTPUT: f64 = 255.0;

/// A single band's stretch with the thresholds already moved into transform space
/// (logged for [`StretchMode::Log`], unchanged for [`StretchMode::Linear`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandStretch {
    mode: StretchMode,
    low: f64,
    high: f64,
}

impl BandStretch {
    /// Builds the stretch without checking the thresholds. An inverted pair ends up as a
    /// hard cut at `low`; see [`Thresholds::validate`] for the checked path.
    pub fn new(mode: StretchMode, thresholds: Thresholds) -> Self {
        let (low, high) = match mode {
            StretchMode::Linear => (thresholds.low, thresholds.high),
            StretchMode::Log => (thresholds.low.ln(), thresholds.high.ln()),
        };
        Self { mode, low, high }
    }

    pub fn mode(&self) -> StretchMode {
        self.mode
    }

    /// Lower threshold in transform space.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper threshold in transform space.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Stretches one raw sample to an output byte.
    ///
    /// Non-positive samples are fill values and always map to 0. Values at or below `low`
    /// give 0, at or above `high` give 255, and the rest are scaled and rounded up.
    #[inline]
    pub fn apply(&self, sample: i16) -> u8 {
        if sample <= 0 {
            return 0;
        }

        let value = match self.mode {
            StretchMode::Linear => f64::from(sample),
            StretchMode::Log => f64::from(sample).ln(),
        };

        if value <= self.low {
            0
        } else if value >= self.high {
            255
        } else {
            // Ceiling, not nearest. A NaN fraction (non-finite thresholds) casts to 0.
            (MAX_OUTPUT * (value - self.low) / (self.high - self.low)).ceil() as u8
        }
    }

    /// Stretches every sample of `band`, keeping row-major order.
    pub fn apply_band(&self, band: &BandBuffer) -> Result<Vec<u8>> {
        debug!(
            "Stretching {} band ({}): low={:.4} high={:.4}",
            band.band(), self.mode, self.low, self.high
        );
        let mut out = try_alloc::<u8>(band.len(), "stretched band")?;
        out.extend(band.samples().iter().map(|&s| self.apply(s)));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::band::Band;

    fn linear(low: f64, high: f64) -> BandStretch {
        BandStretch::new(StretchMode::Linear, Thresholds::new(low, high))
    }

    fn log(low: f64, high: f64) -> BandStretch {
        BandStretch::new(StretchMode::Log, Thresholds::new(low, high))
    }

    #[test]
    fn test_thresholds_moved_to_log_space() {
        let s = log(244.7, 8103.0);
        assert_eq!(s.low(), 244.7f64.ln());
        assert_eq!(s.high(), 8103.0f64.ln());

        let s = linear(100.0, 1600.0);
        assert_eq!((s.low(), s.high()), (100.0, 1600.0));
    }

    #[test]
    fn test_non_positive_samples_are_zero() {
        for stretch in [linear(-500.0, 200.0), log(0.5, 8103.0), linear(-32768.0, -1.0)] {
            for sample in [0, -1, -9999, i16::MIN] {
                assert_eq!(stretch.apply(sample), 0, "{stretch:?} sample {sample}");
            }
        }
    }

    #[test]
    fn test_boundaries_inclusive() {
        let s = linear(100.0, 1600.0);
        assert_eq!(s.apply(100), 0);
        assert_eq!(s.apply(99), 0);
        assert_eq!(s.apply(1600), 255);
        assert_eq!(s.apply(i16::MAX), 255);
        assert_eq!(s.apply(101), 1);
    }

    #[test]
    fn test_ceiling_rounding() {
        // 255 * 100 / 200 = 127.5
        assert_eq!(linear(0.0, 200.0).apply(100), 128);
        // 255 * 1 / 1000 = 0.255 still rounds up to 1
        assert_eq!(linear(0.0, 1000.0).apply(1), 1);
        // exact integer fraction stays put: 255 * 2 / 5 = 102
        assert_eq!(linear(0.0, 5.0).apply(2), 102);
    }

    #[test]
    fn test_log_scenarios() {
        let s = log(244.7, 8103.0);
        assert_eq!(s.apply(8103), 255);
        assert_eq!(s.apply(10000), 255);
        assert_eq!(s.apply(244), 0);

        let mid = 1408; // ~exp(7.25), halfway in log space
        let expected = (255.0 * ((mid as f64).ln() - 244.7f64.ln()) / (8103.0f64.ln() - 244.7f64.ln())).ceil();
        assert_eq!(s.apply(mid) as f64, expected);
        assert!((127..=129).contains(&s.apply(mid)));
    }

    #[test]
    fn test_monotonic_over_full_range() {
        for stretch in [linear(0.0, 10000.0), linear(-100.0, 300.0), log(244.7, 8103.0), log(1.0, 32767.0)] {
            let mut previous = 0u8;
            for sample in i16::MIN..=i16::MAX {
                let out = stretch.apply(sample);
                assert!(out >= previous, "{stretch:?} not monotonic at {sample}");
                previous = out;
            }
        }
    }

    #[test]
    fn test_inverted_thresholds_cut_at_low() {
        let s = linear(500.0, 100.0);
        assert_eq!(s.apply(50), 0);
        assert_eq!(s.apply(500), 0);
        assert_eq!(s.apply(501), 255);
        assert_eq!(s.apply(300), 0);
    }

    #[test]
    fn test_apply_band_keeps_order() {
        let band = BandBuffer::new(Band::Blue, vec![0, 100, 200, -5, 50]);
        let out = linear(0.0, 200.0).apply_band(&band).unwrap();
        assert_eq!(out, vec![0, 128, 255, 0, 64]);
    }
}
