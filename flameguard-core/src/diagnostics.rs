//! Diagnostic Output
//!
//! Two [`core::fmt::Display`] adapters over a borrowed detector:
//!
//! - [`StatusReport`] - a human-readable table of detector and
//!   per-channel state for log inspection.
//! - [`PlotterLine`] - one `[PLOTTER]`-prefixed line of tab-separated
//!   `raw baseline` pairs per channel, consumed by external plotting
//!   tools. The format is not contractually binding but must remain
//!   parseable as tab/line-delimited numeric pairs.
//!
//! Both write through `core::fmt::Write`, so they work unchanged against
//! a `heapless::String` on bare metal and `println!`/loggers on hosted
//! targets.

use core::fmt;

use crate::{
    analog::AnalogSource,
    constants::NUM_CHANNELS,
    detector::FlameDetector,
    time::TimeSource,
};

/// Human-readable status table for a detector.
pub struct StatusReport<'a, S: AnalogSource, C: TimeSource> {
    detector: &'a FlameDetector<S, C>,
}

impl<S: AnalogSource, C: TimeSource> fmt::Display for StatusReport<'_, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let det = self.detector;

        writeln!(f, "================ FLAME DETECTOR STATUS ================")?;
        writeln!(f, "State: {}", det.state().name())?;
        writeln!(f, "Active Spikes: {}/{}", det.spike_count(), NUM_CHANNELS)?;
        writeln!(f, "Sensitivity: {} mV", det.sensitivity_margin_mv())?;
        writeln!(f)?;
        writeln!(f, "CH  |   Raw(mV)  |  Base(mV)  |  Dev(mV)  | Spike")?;
        writeln!(f, "----|------------|------------|-----------|------")?;

        for i in 0..NUM_CHANNELS {
            // Channel indices are in range by construction
            if let Some(ch) = det.channel(i) {
                writeln!(
                    f,
                    " {}  | {:>10} | {:>10.1} | {:>9.1} | {}",
                    i,
                    ch.raw_mv,
                    ch.baseline,
                    ch.deviation,
                    if ch.is_spike { "YES" } else { "NO" },
                )?;
            }
        }

        writeln!(f, "======================================================")
    }
}

/// Tab-separated `raw baseline` pairs for plot viewers.
pub struct PlotterLine<'a, S: AnalogSource, C: TimeSource> {
    detector: &'a FlameDetector<S, C>,
}

impl<S: AnalogSource, C: TimeSource> fmt::Display for PlotterLine<'_, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[PLOTTER] ")?;

        for i in 0..NUM_CHANNELS {
            if let Some(ch) = self.detector.channel(i) {
                if i > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}\t{:.0}", ch.raw_mv, ch.baseline)?;
            }
        }

        Ok(())
    }
}

impl<S: AnalogSource, C: TimeSource> FlameDetector<S, C> {
    /// Human-readable status table.
    pub fn status(&self) -> StatusReport<'_, S, C> {
        StatusReport { detector: self }
    }

    /// One plotter line of tab-separated `raw baseline` pairs.
    pub fn plotter_line(&self) -> PlotterLine<'_, S, C> {
        PlotterLine { detector: self }
    }
}
