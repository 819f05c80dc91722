//! Wall-clock timing for a solve.

use std::time::{Duration, Instant};

use tracing::debug;

/// Measures elapsed time from creation (or the last [`reset`](Self::reset)).
///
/// Reports once when dropped: always as a `debug` event, and on stderr as
/// `Elapsed[ name]: <secs> sec` when created with [`Timer::announce`].
#[derive(Debug)]
pub struct Timer {
    start: Instant,
    name: Option<String>,
    announce: bool,
}

impl Timer {
    pub fn start(name: Option<&str>) -> Self {
        Self {
            start: Instant::now(),
            name: name.map(str::to_string),
            announce: false,
        }
    }

    /// Like [`start`](Self::start), but also prints the report to stderr.
    pub fn announce(name: Option<&str>) -> Self {
        let mut timer = Self::start(name);
        timer.announce = true;
        timer
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// `Elapsed[ name]: <secs> sec` for the current elapsed time.
    pub fn report(&self) -> String {
        format_elapsed(self.name.as_deref(), self.elapsed())
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        debug!(timer = self.name.as_deref().unwrap_or(""), ?elapsed, "elapsed");
        if self.announce {
            eprintln!("{}", format_elapsed(self.name.as_deref(), elapsed));
        }
    }
}

fn format_elapsed(name: Option<&str>, elapsed: Duration) -> String {
    match name {
        Some(name) => format!("Elapsed {}: {:.9} sec", name, elapsed.as_secs_f64()),
        None => format!("Elapsed: {:.9} sec", elapsed.as_secs_f64()),
    }
}
