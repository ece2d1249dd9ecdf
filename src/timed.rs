use std::thread;
use std::time::Duration;

use log::debug;

use crate::error::BarError;
use crate::ProgressBar;

/// Drives a [`ProgressBar`] from empty to full over a fixed wall-clock duration
///
/// The duration is split into `ticks` equal steps. On every tick the bar's message is set to the
/// elapsed time (`"2.5s"`), the bar is updated, and the calling thread sleeps until the next
/// tick. This is also the calling convention for driving a bar by hand: set the message, update,
/// then wait for more work.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use linebar::{ProgressBar, TimedRun};
///
/// let mut bar = ProgressBar::new(40);
/// TimedRun::new(&mut bar)
///     .with_duration(Duration::from_secs(3))
///     .with_ticks(30)
///     .start()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct TimedRun<'a> {
    bar: &'a mut ProgressBar,
    duration: Duration,
    ticks: u64,
}

impl<'a> TimedRun<'a> {
    /// Ten seconds in a hundred ticks.
    pub fn new(bar: &'a mut ProgressBar) -> TimedRun<'a> {
        TimedRun {
            bar,
            duration: Duration::from_secs(10),
            ticks: 100,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> TimedRun<'a> {
        self.set_duration(duration);
        self
    }

    pub fn with_ticks(mut self, ticks: u64) -> TimedRun<'a> {
        self.set_ticks(ticks);
        self
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn set_ticks(&mut self, ticks: u64) {
        self.ticks = ticks;
    }

    /// Runs every tick, blocking until the last one has slept
    ///
    /// Stops at the first tick whose message does not fit or whose draw fails.
    pub fn start(&mut self) -> Result<(), BarError> {
        if self.ticks == 0 {
            return Ok(());
        }
        let secs = self.duration.as_secs_f64();
        let pause = Duration::from_secs_f64(secs / self.ticks as f64);
        debug!("timed run of {:?} in {} ticks", self.duration, self.ticks);

        for tick in 1..=self.ticks {
            let elapsed = secs * tick as f64 / self.ticks as f64;
            self.bar.set_message(format!("{elapsed:.1}s"))?;
            self.bar.update(tick, self.ticks)?;
            thread::sleep(pause);
        }
        Ok(())
    }
}
