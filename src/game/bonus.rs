use crate::consts;
use std::time::{Duration, Instant};

/// Bonus mode: a period of [`BONUS_DURATION`][consts::BONUS_DURATION] after
/// the score reaches a multiple of
/// [`BONUS_SCORE_STEP`][consts::BONUS_SCORE_STEP] during which fruits are
/// worth more and the snake is faster & drawn bigger.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum BonusMode {
    #[default]
    Inactive,
    Active {
        since: Instant,
    },
}

impl BonusMode {
    pub(crate) fn is_active(self) -> bool {
        matches!(self, BonusMode::Active { .. })
    }

    /// Points awarded for eating a fruit in the current mode
    pub(crate) fn points(self) -> u32 {
        if self.is_active() {
            consts::BONUS_FOOD_POINTS
        } else {
            consts::FOOD_POINTS
        }
    }

    /// React to the score changing from `previous` to `score` at time `now`.
    /// Returns `true` if this activated bonus mode.
    ///
    /// Only a change onto a positive multiple of the bonus step triggers
    /// activation, and an active bonus is never restarted.
    pub(crate) fn observe_score(&mut self, previous: u32, score: u32, now: Instant) -> bool {
        let crossed = score != previous && score > 0 && score % consts::BONUS_SCORE_STEP == 0;
        if crossed && !self.is_active() {
            *self = BonusMode::Active { since: now };
            true
        } else {
            false
        }
    }

    /// End bonus mode if it has run for its full duration as of `now`.
    /// Returns `true` if this deactivated bonus mode.
    pub(crate) fn expire(&mut self, now: Instant) -> bool {
        match *self {
            BonusMode::Active { since }
                if now.saturating_duration_since(since) >= consts::BONUS_DURATION =>
            {
                *self = BonusMode::Inactive;
                true
            }
            _ => false,
        }
    }

    /// Time left before bonus mode expires, or `None` if inactive
    pub(crate) fn remaining(self, now: Instant) -> Option<Duration> {
        match self {
            BonusMode::Active { since } => Some(
                consts::BONUS_DURATION.saturating_sub(now.saturating_duration_since(since)),
            ),
            BonusMode::Inactive => None,
        }
    }
}

/// Tick rate in effect during bonus mode for a base rate of `base`
pub(crate) fn boosted_speed(base: u32) -> u32 {
    base.saturating_add(consts::BONUS_SPEED_BOOST).max(1)
}

/// Drawn block size in effect during bonus mode for a base size of `base`
pub(crate) fn boosted_block(base: i32) -> i32 {
    base + consts::BONUS_BLOCK_GROWTH
}
