//! Second-granularity countdown driven by the caller's event loop.
//!
//! The timer never spawns anything itself: whoever owns it calls
//! [`Timer::elapse`] once per elapsed second, which keeps every tick on the
//! same thread as the state it mutates.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type TickFn = Box<dyn FnMut(u32)>;
type ExpireFn = Box<dyn FnOnce()>;

/// What a call to [`Timer::elapse`] delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(u32),
    Expired,
}

/// Cloneable stop switch that callbacks can capture.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

pub struct Timer {
    remaining: u32,
    running: bool,
    stop: StopHandle,
    on_tick: Option<TickFn>,
    on_expire: Option<ExpireFn>,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            remaining: 0,
            running: false,
            stop: StopHandle::default(),
            on_tick: None,
            on_expire: None,
        }
    }

    /// Begin counting down from `duration_seconds`, replacing any previous countdown.
    ///
    /// `on_tick` fires immediately with `duration_seconds`, then once per elapsed
    /// second down to and including 0. `on_expire` fires once after the final tick.
    pub fn start(
        &mut self,
        duration_seconds: u32,
        on_tick: impl FnMut(u32) + 'static,
        on_expire: impl FnOnce() + 'static,
    ) {
        if self.running {
            self.halt();
        } else if self.stop.is_stopped() {
            self.stop = StopHandle::default();
        }
        self.remaining = duration_seconds;
        self.running = true;
        self.on_tick = Some(Box::new(on_tick));
        self.on_expire = Some(Box::new(on_expire));
        self.deliver_tick();
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the event that was delivered, or `None` when the timer is idle.
    /// Reaching zero delivers `Tick(0)` and then the expiry in the same call;
    /// the return value is `Expired` in that case.
    pub fn elapse(&mut self) -> Option<TimerEvent> {
        if !self.is_running() {
            return None;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
            self.deliver_tick();
            if !self.is_running() || self.remaining > 0 {
                return Some(TimerEvent::Tick(self.remaining));
            }
        }

        let on_expire = self.on_expire.take();
        self.halt();
        if let Some(on_expire) = on_expire {
            on_expire();
        }
        tracing::debug!("countdown expired");
        Some(TimerEvent::Expired)
    }

    /// Halt ticking. Safe to call repeatedly or when idle.
    pub fn stop(&mut self) {
        self.halt();
    }

    /// Handle bound to the running countdown, or to the next one while idle.
    ///
    /// A handle outlives its countdown harmlessly: once that countdown ends,
    /// stopping it has no effect on later ones.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && !self.stop.is_stopped()
    }

    fn deliver_tick(&mut self) {
        if !self.is_running() {
            return;
        }
        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick(self.remaining);
        }
        if self.stop.is_stopped() {
            self.halt();
        }
    }

    fn halt(&mut self) {
        self.stop.stop();
        self.stop = StopHandle::default();
        self.running = false;
        self.on_tick = None;
        self.on_expire = None;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("remaining", &self.remaining)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
