use crate::consts;
use std::fmt;
use std::time::Duration;

/// How many times per second the game advances
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct TickRate(u32);

impl TickRate {
    pub(crate) const MIN: TickRate = TickRate(consts::MIN_TICK_RATE);
    pub(crate) const MAX: TickRate = TickRate(consts::MAX_TICK_RATE);

    /// Speed up by one step.  Returns `false` if already at the maximum.
    pub(crate) fn increase(&mut self) -> bool {
        let new_rate = self.0.saturating_add(consts::TICK_RATE_STEP);
        if new_rate <= Self::MAX.0 {
            self.0 = new_rate;
            true
        } else {
            false
        }
    }

    /// Slow down by one step.  Returns `false` if already at the minimum.
    pub(crate) fn decrease(&mut self) -> bool {
        let new_rate = self.0.saturating_sub(consts::TICK_RATE_STEP);
        if new_rate >= Self::MIN.0 {
            self.0 = new_rate;
            true
        } else {
            false
        }
    }

    pub(crate) fn per_second(self) -> u32 {
        self.0
    }

    /// Time between ticks
    pub(crate) fn period(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}

impl Default for TickRate {
    fn default() -> TickRate {
        TickRate(consts::INITIAL_TICK_RATE)
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.per_second())
    }
}
