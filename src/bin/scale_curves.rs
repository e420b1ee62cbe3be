//! Comparative chart of the rational family y = x/(x+k), k ∈ {1, 2, 3}.
//!
//! Takes no arguments; renders the chart with built-in defaults and exits
//! non-zero with a descriptive message on any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use emergence::config::DemoConfig;
use emergence::domains::curves::{scale_dependence_family, SampleGrid};
use emergence::error::SimResult;
use emergence::visualization::{ChartSpec, PlottersRenderer, Renderer};

fn main() -> ExitCode {
    match run() {
        Ok(path) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("scale_curves: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> SimResult<PathBuf> {
    let config = DemoConfig::default();

    let grid = SampleGrid::new(config.curves.samples, config.curves.step)?;
    let series = scale_dependence_family(&grid)?;

    let spec = ChartSpec {
        title: "scale dependence".to_string(),
        x_range: config.curves.x_range,
        y_range: (0.0, 1.0),
        series,
    };

    PlottersRenderer::default().render_chart(&spec, &config.curves.output)?;
    Ok(config.curves.output)
}
