//! How fast the game runs as the snake eats more
use crate::consts;
use serde::Deserialize;
use std::time::Duration;

/// Return the level reached after eating `food_eaten` pieces of food: one
/// level per [`FOODS_PER_LEVEL`][consts::FOODS_PER_LEVEL] pieces, starting at
/// 0.
pub(crate) fn compute_level(food_eaten: i64) -> u32 {
    if food_eaten < 0 {
        return 0;
    }
    u32::try_from(food_eaten / consts::FOODS_PER_LEVEL).unwrap_or(u32::MAX)
}

/// Return the delay in milliseconds between ticks at `level`: `base_ms`
/// reduced by `step_ms` per level, but never less than `min_ms`.  Negative
/// levels are treated as level 0.
pub(crate) fn compute_delay_ms(level: i64, base_ms: u64, step_ms: u64, min_ms: u64) -> u64 {
    let level = u64::try_from(level).unwrap_or(0);
    base_ms
        .saturating_sub(level.saturating_mul(step_ms))
        .max(min_ms)
}

/// The parameters of the delay curve used by [`compute_delay_ms()`]
#[allow(clippy::struct_field_names)]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Pacing {
    /// Delay between ticks at level 0
    pub(crate) base_delay_ms: u64,

    /// How much faster each level is than the one before
    pub(crate) delay_step_ms: u64,

    /// The delay never drops below this
    pub(crate) min_delay_ms: u64,
}

impl Pacing {
    pub(crate) fn delay_ms(self, level: u32) -> u64 {
        compute_delay_ms(
            i64::from(level),
            self.base_delay_ms,
            self.delay_step_ms,
            self.min_delay_ms,
        )
    }

    pub(crate) fn tick_period(self, level: u32) -> Duration {
        Duration::from_millis(self.delay_ms(level))
    }
}

impl Default for Pacing {
    fn default() -> Pacing {
        Pacing {
            base_delay_ms: consts::BASE_DELAY_MS,
            delay_step_ms: consts::DELAY_STEP_MS,
            min_delay_ms: consts::MIN_DELAY_MS,
        }
    }
}
