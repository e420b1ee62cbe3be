//! Visualization for the demonstrations.
//!
//! The data-producing code never draws anything itself: it fills in
//! render-ready specs ([`Series`], [`ChartSpec`], [`HistogramSpec`]) and hands
//! them to a [`Renderer`]. The concrete backend ([`PlottersRenderer`]) is
//! swappable without touching the simulation or curve logic.
//!
//! An [`Exporter`] additionally writes counting results to JSON Lines or CSV
//! so an animation's data can be inspected or replayed outside the renderer.

use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domains::counting::CountHistory;
use crate::error::{SimError, SimResult};

pub mod plotters;

pub use self::plotters::PlottersRenderer;

// ============================================================================
// Render-ready data
// ============================================================================

/// Color assignment for a plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesColor {
    /// Red line.
    Red,
    /// Blue line.
    Blue,
    /// Green line.
    Green,
    /// Black line.
    Black,
}

/// A fully computed, labeled series of (x, y) points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Line color.
    pub color: SeriesColor,
    /// Points in plotting order.
    pub points: Vec<(f64, f64)>,
}

/// Pass-through configuration for a static comparative chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X axis range.
    pub x_range: (f64, f64),
    /// Y axis range.
    pub y_range: (f64, f64),
    /// Series to draw, in order.
    pub series: Vec<Series>,
}

/// Pass-through configuration for the histogram animation.
///
/// Bins are unit-width integer bins over `[lo, hi)`, applied identically to
/// every frame; counts outside the range are omitted from the display (they
/// remain in the exported data).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistogramSpec {
    bin_range: (u64, u64),
    fps: u32,
}

impl HistogramSpec {
    /// Create a histogram spec.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the bin range is empty or the frame rate is zero.
    pub fn new(bin_range: (u64, u64), fps: u32) -> SimResult<Self> {
        if bin_range.0 >= bin_range.1 {
            return Err(SimError::config(format!(
                "empty histogram bin range [{}, {})",
                bin_range.0, bin_range.1
            )));
        }
        if fps == 0 {
            return Err(SimError::config("frame rate must be positive"));
        }
        Ok(Self { bin_range, fps })
    }

    /// Bin range `[lo, hi)`.
    #[must_use]
    pub const fn bin_range(&self) -> (u64, u64) {
        self.bin_range
    }

    /// Frames per second.
    #[must_use]
    pub const fn fps(&self) -> u32 {
        self.fps
    }

    /// Delay between animation frames in milliseconds.
    #[must_use]
    pub const fn frame_delay_ms(&self) -> u32 {
        1000 / self.fps
    }
}

impl Default for HistogramSpec {
    /// The photon-counting experiment's display: bins [0, 8) at 5 fps.
    fn default() -> Self {
        Self {
            bin_range: (0, 8),
            fps: 5,
        }
    }
}

/// Abstract rendering backend.
///
/// Implementations receive fully computed data and produce a visual artifact;
/// they own windowing, color mapping, and encoding concerns entirely.
pub trait Renderer {
    /// Render a comparative multi-series chart to `path`.
    ///
    /// # Errors
    ///
    /// Returns `Render` or `Io` on backend failure.
    fn render_chart(&self, spec: &ChartSpec, path: &Path) -> SimResult<()>;

    /// Render the growth of a count history as a frame-by-frame histogram
    /// animation, one frame per snapshot, to `path`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty history, `Render` or `Io` on
    /// backend failure.
    fn render_histogram_animation(
        &self,
        history: &CountHistory,
        spec: &HistogramSpec,
        path: &Path,
    ) -> SimResult<()>;
}

// ============================================================================
// Histogram binning
// ============================================================================

/// Bin counts into unit-width integer bins over `[lo, hi)`.
///
/// Values outside the range are dropped, matching an explicit-bin histogram.
/// Returns `hi - lo` bins; empty when the range is empty.
#[must_use]
pub fn bin_counts(values: &[u64], lo: u64, hi: u64) -> Vec<u64> {
    if lo >= hi {
        return Vec::new();
    }
    let mut bins = vec![0u64; (hi - lo) as usize];
    for &v in values {
        if (lo..hi).contains(&v) {
            bins[(v - lo) as usize] += 1;
        }
    }
    bins
}

// ============================================================================
// Export Pipeline
// ============================================================================

/// One interval's result, as written by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Zero-based interval index.
    pub interval: usize,
    /// Successes counted in the interval.
    pub count: u64,
}

/// Exporter for counting results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter;

impl Exporter {
    /// Create a new exporter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Export a count history to JSON Lines, one record per interval.
    ///
    /// # Errors
    ///
    /// Returns error if file operations or serialization fail.
    pub fn to_json_lines(&self, history: &CountHistory, path: &Path) -> SimResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for (interval, &count) in history.counts().iter().enumerate() {
            let record = IntervalRecord { interval, count };
            let json = serde_json::to_string(&record)
                .map_err(|e| SimError::serialization(format!("JSON serialization failed: {e}")))?;
            writeln!(writer, "{json}")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Export a count history to CSV.
    ///
    /// # Errors
    ///
    /// Returns error if file operations fail.
    pub fn to_csv(&self, history: &CountHistory, path: &Path) -> SimResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "interval,count")?;
        for (interval, &count) in history.counts().iter().enumerate() {
            writeln!(writer, "{interval},{count}")?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> CountHistory {
        let mut history = CountHistory::new();
        for c in [3, 1, 4, 1, 5, 9] {
            history.push(c);
        }
        history
    }

    #[test]
    fn test_bin_counts_basic() {
        let bins = bin_counts(&[0, 1, 1, 3, 7], 0, 8);
        assert_eq!(bins, vec![1, 2, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_bin_counts_drops_out_of_range() {
        let bins = bin_counts(&[2, 8, 100], 0, 8);
        assert_eq!(bins.iter().sum::<u64>(), 1);
        assert_eq!(bins[2], 1);
    }

    #[test]
    fn test_bin_counts_offset_range() {
        let bins = bin_counts(&[5, 6, 6, 9], 5, 8);
        assert_eq!(bins, vec![1, 2, 0]);
    }

    #[test]
    fn test_bin_counts_empty_range() {
        assert!(bin_counts(&[1, 2], 3, 3).is_empty());
        assert!(bin_counts(&[1, 2], 5, 3).is_empty());
    }

    #[test]
    fn test_histogram_spec_defaults() {
        let spec = HistogramSpec::default();
        assert_eq!(spec.bin_range(), (0, 8));
        assert_eq!(spec.fps(), 5);
        assert_eq!(spec.frame_delay_ms(), 200);
    }

    #[test]
    fn test_histogram_spec_rejects_bad_inputs() {
        assert!(HistogramSpec::new((8, 8), 5).is_err());
        assert!(HistogramSpec::new((9, 8), 5).is_err());
        assert!(HistogramSpec::new((0, 8), 0).is_err());
        assert!(HistogramSpec::new((0, 8), 5).is_ok());
    }

    #[test]
    fn test_exporter_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.jsonl");

        Exporter::new()
            .to_json_lines(&sample_history(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<IntervalRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 6);
        assert_eq!(
            records[0],
            IntervalRecord {
                interval: 0,
                count: 3
            }
        );
        assert_eq!(records[5].count, 9);
    }

    #[test]
    fn test_exporter_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.csv");

        Exporter::new().to_csv(&sample_history(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("interval,count"));
        assert_eq!(lines.next(), Some("0,3"));
        assert_eq!(content.lines().count(), 7);
    }

    #[test]
    fn test_series_serialization() {
        let series = Series {
            label: "y=x/(x+1)".to_string(),
            color: SeriesColor::Red,
            points: vec![(0.0, 0.0), (0.1, 1.0 / 11.0)],
        };
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("Red"));

        let restored: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.label, series.label);
        assert_eq!(restored.points.len(), 2);
    }
}
