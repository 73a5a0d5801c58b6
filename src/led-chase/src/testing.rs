//! Recording test doubles for output lines and delays.

use std::{cell::RefCell, rc::Rc};

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};
use embedded_hal_async::delay::DelayNs;

use crate::{
    gpio::{Level, Polarity},
    ErrorCode, Led, OutputLine, OutputSet, LED_COUNT,
};

/// A call observed by the doubles, in call order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Ready(usize),
    Configure(usize, Level),
    Set(usize, Level),
    Toggle(usize),
    Delay(u32),
}

impl Event {
    /// Returns the line the event concerns, if any.
    pub(crate) fn line(&self) -> Option<usize> {
        match *self {
            Event::Ready(index)
            | Event::Configure(index, _)
            | Event::Set(index, _)
            | Event::Toggle(index) => Some(index),
            Event::Delay(_) => None,
        }
    }
}

/// Shared, ordered record of every call made on the doubles.
#[derive(Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<Event>>>);

impl Journal {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct FakeError(pub i32);

impl ErrorCode for FakeError {
    fn code(&self) -> i32 {
        self.0
    }
}

/// Output line keeping its level in memory.
pub(crate) struct FakeLine {
    index: usize,
    journal: Journal,
    ready: bool,
    failure: Option<FakeError>,
    level: Option<Level>,
}

impl FakeLine {
    pub(crate) fn new(index: usize, journal: &Journal) -> Self {
        Self {
            index,
            journal: journal.clone(),
            ready: true,
            failure: None,
            level: None,
        }
    }

    pub(crate) fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub(crate) fn failing(mut self, error: FakeError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Returns the driven level, `None` until the line has been configured.
    pub(crate) fn level(&self) -> Option<Level> {
        self.level
    }
}

impl OutputLine for FakeLine {
    type Error = FakeError;

    fn is_ready(&self) -> bool {
        self.journal.push(Event::Ready(self.index));
        self.ready
    }

    fn configure_output(&mut self, initial: Level) -> Result<(), Self::Error> {
        self.journal.push(Event::Configure(self.index, initial));
        if let Some(error) = self.failure {
            return Err(error);
        }
        self.level = Some(initial);
        Ok(())
    }

    fn set_level(&mut self, level: Level) {
        self.journal.push(Event::Set(self.index, level));
        self.level = Some(level);
    }

    fn toggle(&mut self) {
        self.journal.push(Event::Toggle(self.index));
        self.level = self.level.map(Level::toggled);
    }
}

/// Builds a four-LED set of fresh [`FakeLine`]s, letting `tweak` adjust each line.
pub(crate) fn fake_outputs(
    journal: &Journal,
    polarities: [Polarity; LED_COUNT],
    tweak: impl Fn(usize, FakeLine) -> FakeLine,
) -> OutputSet<FakeLine> {
    let mut index = 0;
    OutputSet::new(polarities.map(|polarity| {
        let line = tweak(index, FakeLine::new(index, journal));
        index += 1;
        Led::new(line, polarity)
    }))
}

/// Delay that returns at once, recording the requested duration.
pub(crate) struct FakeDelay<'a> {
    journal: Journal,
    stop: Option<(&'a Signal<NoopRawMutex, ()>, u32, usize)>,
}

impl<'a> FakeDelay<'a> {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            stop: None,
        }
    }

    /// Signals `stop` once `count` delays of `ms` have been requested.
    pub(crate) fn signal_after(
        mut self,
        stop: &'a Signal<NoopRawMutex, ()>,
        ms: u32,
        count: usize,
    ) -> Self {
        self.stop = Some((stop, ms, count));
        self
    }

    fn record(&mut self, ms: u32) {
        self.journal.push(Event::Delay(ms));

        if let Some((stop, stop_ms, remaining)) = &mut self.stop {
            if ms == *stop_ms {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    stop.signal(());
                }
            }
        }
    }
}

impl DelayNs for FakeDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.record(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}
