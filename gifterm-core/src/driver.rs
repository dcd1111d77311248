//! Fixed-cadence tick/event loop.
//!
//! The loop is strictly sequential: at any moment at most one of the
//! handler's callbacks runs, so handler state needs no locking.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Shared loop state handed to every callback.
#[derive(Debug, Default)]
pub struct LoopControl {
    quit: bool,
    ticks: u64,
}

impl LoopControl {
    /// Stop the loop once the current callback returns.
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Ticks dispatched so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Callbacks driven by [`Driver::run`]. Any error ends the loop.
pub trait Handler {
    type Event;

    fn init(&mut self, ctl: &mut LoopControl) -> anyhow::Result<()>;
    fn tick(&mut self, ctl: &mut LoopControl) -> anyhow::Result<()>;
    fn event(&mut self, ctl: &mut LoopControl, event: Self::Event) -> anyhow::Result<()>;
}

/// Blocking source of input events.
pub trait EventSource {
    type Event;

    /// Wait at most `timeout` for the next event.
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<Self::Event>>;
}

#[derive(Debug)]
pub struct Driver {
    tick_interval: Duration,
}

impl Driver {
    pub fn new(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Run `init` once, then dispatch ticks and events until a callback
    /// asks to quit or fails.
    pub fn run<H, S>(&self, handler: &mut H, source: &mut S) -> anyhow::Result<LoopControl>
    where
        H: Handler,
        S: EventSource<Event = H::Event>,
    {
        let mut ctl = LoopControl::default();
        handler.init(&mut ctl)?;

        let mut next_tick = Instant::now() + self.tick_interval;
        while !ctl.quit {
            let wait = next_tick.saturating_duration_since(Instant::now());
            if let Some(event) = source.poll(wait)? {
                trace!("dispatching event");
                handler.event(&mut ctl, event)?;
                if ctl.quit {
                    break;
                }
            }

            let now = Instant::now();
            if now >= next_tick {
                handler.tick(&mut ctl)?;
                ctl.ticks += 1;
                next_tick += self.tick_interval;
                // don't try to catch up on ticks missed while stalled
                if next_tick < now {
                    next_tick = now + self.tick_interval;
                }
            }
        }

        debug!(ticks = ctl.ticks, "driver loop finished");
        Ok(ctl)
    }
}
