//! Progress reporting for the command line tool.
//!
//! Relies on the `indicatif` crate, see <https://docs.rs/indicatif>

use std::{fmt::Write, io::Read, time::Duration};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

/// Wraps a reader and advances a progress bar by the number of bytes pulled through it.
///
/// Once `total` bytes were read the bar is cleared and a throughput line is logged.
pub struct ProgressMonitor<R: Read> {
    /// What the bytes are read for, shown in front of the bar
    pub action: &'static str,
    pub total: u64,
    pub read: u64,
    reader: R,
    progress_bar: ProgressBar,
}

impl<R: Read> ProgressMonitor<R> {
    pub fn new(action: &'static str, reader: R, total: u64) -> Self {
        let progress_bar = match ProgressStyle::with_template(
            "{msg} {wide_bar} {binary_bytes}/{binary_total_bytes} [{eta} left]",
        ) {
            Ok(style) => ProgressBar::new(total).with_style(style),
            Err(_) => ProgressBar::new(total),
        };
        progress_bar.set_message(action);
        progress_bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));
        Self {
            action,
            total,
            read: 0,
            reader,
            progress_bar,
        }
    }

    fn advance(&mut self, delta: usize) {
        self.read += delta as u64;
        self.progress_bar.inc(delta as u64);
        if self.read >= self.total && !self.progress_bar.is_finished() {
            self.progress_bar.finish_and_clear();
            let elapsed = self.progress_bar.elapsed();
            info!(
                "{} {} took {} ({}/s)",
                self.action,
                fmt_size(self.total),
                fmt_duration(elapsed),
                fmt_size(throughput(self.total, elapsed)),
            );
        }
    }
}

impl<R: Read> Read for ProgressMonitor<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.reader.read(buf)?;
        self.advance(n);
        Ok(n)
    }
}

fn throughput(bytes: u64, elapsed: Duration) -> u64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        (bytes as f64 / secs) as u64
    } else {
        bytes
    }
}

/// Renders a byte count with binary units, "B", "KiB", "MiB" and so on
pub fn fmt_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];
    let mut unit = 0;
    let mut scaled = bytes as f64;
    // switch to the next unit once the integer part needs four digits
    while scaled >= 1000.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}{}", bytes, UNITS[0])
    } else {
        format!("{:.2}{}", scaled, UNITS[unit])
    }
}

/// Renders a duration as hours, minutes and seconds, or milliseconds below one second
pub fn fmt_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = duration.as_secs_f64() % 60.0;

    let mut output = String::new();
    if hours > 0 {
        let _ = write!(output, "{hours}h ");
    }
    if minutes > 0 {
        let _ = write!(output, "{minutes}m ");
    }
    if total_secs >= 60 {
        if secs.round() > 0.0 {
            let _ = write!(output, "{:.0}s", secs.round());
        }
    } else if secs >= 1.0 {
        let _ = write!(output, "{secs:.2}s");
    } else {
        let _ = write!(output, "{:.2}ms", secs * 1000.0);
    }
    output.trim_end().to_string()
}
