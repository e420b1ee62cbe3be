//! Photon-counting experiment: the Poisson distribution emerging from
//! repeated Bernoulli trials.
//!
//! Simulates 1000 intervals of 1000 trials at p = 3.0e-3, exports the
//! per-interval counts, and replays the histogram's growth as an animated
//! GIF. Takes no arguments; exits non-zero with a descriptive message on any
//! failure (including a rendering backend refusing to encode).

use std::process::ExitCode;

use emergence::config::DemoConfig;
use emergence::domains::counting::CountingProcess;
use emergence::error::SimResult;
use emergence::visualization::{Exporter, PlottersRenderer, Renderer};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("photon_counts: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> SimResult<()> {
    let config = DemoConfig::default();

    let counter = config.counting.counter()?;
    let mut rng = config.counting.rng();
    println!(
        "simulating {} intervals of {} trials at p = {} (seed {})",
        config.counting.repetitions,
        counter.trials(),
        counter.success_probability(),
        rng.seed()
    );

    let history = CountingProcess::new(counter).run(config.counting.repetitions, &mut rng)?;
    println!(
        "mean count {:.3} (expected {:.3}), max {}",
        history.mean(),
        counter.expected_count(),
        history.max().unwrap_or(0)
    );

    Exporter::new().to_json_lines(&history, &config.counting.counts_output)?;
    println!("wrote {}", config.counting.counts_output.display());

    let spec = config.animation.histogram_spec()?;
    PlottersRenderer::default().render_histogram_animation(&history, &spec, &config.animation.output)?;
    println!(
        "wrote {} ({} frames at {} fps)",
        config.animation.output.display(),
        history.len(),
        spec.fps()
    );

    Ok(())
}
