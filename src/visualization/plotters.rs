//! Plotters rendering backend.
//!
//! Static charts go to PNG via the bitmap backend; the histogram animation
//! goes to an animated GIF, one frame per history snapshot, at the frame rate
//! fixed by the [`HistogramSpec`].

use std::path::Path;

use plotters::prelude::*;

use super::{bin_counts, ChartSpec, HistogramSpec, Renderer, SeriesColor};
use crate::domains::counting::CountHistory;
use crate::error::{SimError, SimResult};

/// Concrete renderer backed by the plotters crate.
#[derive(Debug, Clone, Copy)]
pub struct PlottersRenderer {
    width: u32,
    height: u32,
}

impl PlottersRenderer {
    /// Create a renderer with the given output dimensions in pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

fn draw_err(context: &str, e: impl std::fmt::Display) -> SimError {
    SimError::render(format!("{context}: {e}"))
}

const fn rgb(color: SeriesColor) -> RGBColor {
    match color {
        SeriesColor::Red => RED,
        SeriesColor::Blue => BLUE,
        SeriesColor::Green => GREEN,
        SeriesColor::Black => BLACK,
    }
}

impl Renderer for PlottersRenderer {
    fn render_chart(&self, spec: &ChartSpec, path: &Path) -> SimResult<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| draw_err("failed to clear chart background", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 34).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                spec.x_range.0..spec.x_range.1,
                spec.y_range.0..spec.y_range.1,
            )
            .map_err(|e| draw_err("failed to build chart", e))?;

        chart
            .configure_mesh()
            .draw()
            .map_err(|e| draw_err("failed to draw chart mesh", e))?;

        for series in &spec.series {
            let color = rgb(series.color);

            chart
                .draw_series(LineSeries::new(series.points.iter().copied(), &color))
                .map_err(|e| draw_err("failed to draw line series", e))?
                .label(&series.label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 25, y)], color.stroke_width(3))
                });

            // White-filled markers with a colored outline at each sample.
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, 4, WHITE.filled())),
                )
                .map_err(|e| draw_err("failed to draw marker fills", e))?;
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, 4, color.stroke_width(2))),
                )
                .map_err(|e| draw_err("failed to draw marker outlines", e))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(BLACK)
            .background_style(WHITE.mix(0.7))
            .draw()
            .map_err(|e| draw_err("failed to draw legend", e))?;

        root.present()
            .map_err(|e| draw_err("failed to write chart", e))?;
        Ok(())
    }

    fn render_histogram_animation(
        &self,
        history: &CountHistory,
        spec: &HistogramSpec,
        path: &Path,
    ) -> SimResult<()> {
        if history.is_empty() {
            return Err(SimError::invalid_argument(
                "cannot animate an empty count history",
            ));
        }

        let (lo, hi) = spec.bin_range();
        let root = BitMapBackend::gif(path, (self.width, self.height), spec.frame_delay_ms())
            .map_err(|e| draw_err("failed to open GIF encoder", e))?
            .into_drawing_area();

        for frame in history.frames() {
            root.fill(&WHITE)
                .map_err(|e| draw_err("failed to clear frame", e))?;

            // X bins are fixed; the y axis rescales as the history grows,
            // like a cleared-and-redrawn histogram.
            let bins = bin_counts(frame, lo, hi);
            let y_max = bins.iter().copied().max().unwrap_or(0).max(1);

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d((lo..hi).into_segmented(), 0u64..y_max)
                .map_err(|e| draw_err("failed to build histogram frame", e))?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc("counts per interval")
                .y_desc("intervals")
                .draw()
                .map_err(|e| draw_err("failed to draw histogram mesh", e))?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(BLUE.filled())
                        .margin(3)
                        .data(
                            frame
                                .iter()
                                .filter(|&&c| (lo..hi).contains(&c))
                                .map(|&c| (c, 1u64)),
                        ),
                )
                .map_err(|e| draw_err("failed to draw histogram bars", e))?;

            root.present()
                .map_err(|e| draw_err("failed to emit animation frame", e))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::Series;

    fn small_chart_spec() -> ChartSpec {
        ChartSpec {
            title: "test chart".to_string(),
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            series: vec![Series {
                label: "y=x/(x+1)".to_string(),
                color: SeriesColor::Red,
                points: vec![(0.0, 0.0), (0.5, 1.0 / 3.0), (0.9, 0.9 / 1.9)],
            }],
        }
    }

    #[test]
    fn test_chart_smoke() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        PlottersRenderer::new(320, 240)
            .render_chart(&small_chart_spec(), &path)
            .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "chart file must not be empty");
    }

    #[test]
    fn test_animation_smoke() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.gif");

        let mut history = CountHistory::new();
        for c in [2, 3, 3, 4] {
            history.push(c);
        }

        PlottersRenderer::new(320, 240)
            .render_histogram_animation(&history, &HistogramSpec::default(), &path)
            .unwrap();

        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0, "animation file must not be empty");
    }

    #[test]
    fn test_animation_rejects_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist.gif");

        let err = PlottersRenderer::default()
            .render_histogram_animation(&CountHistory::new(), &HistogramSpec::default(), &path)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(format!("{:?}", rgb(SeriesColor::Red)), format!("{RED:?}"));
        assert_eq!(format!("{:?}", rgb(SeriesColor::Blue)), format!("{BLUE:?}"));
        assert_eq!(
            format!("{:?}", rgb(SeriesColor::Green)),
            format!("{GREEN:?}")
        );
        assert_eq!(
            format!("{:?}", rgb(SeriesColor::Black)),
            format!("{BLACK:?}")
        );
    }
}
