//! Leg types for arbitrage sets.
//!
//! A [`Leg`] is one outcome/house in a set of mutually exclusive outcomes.
//! Legs carry their own odds adjustments (boost, commission) and stake
//! handling flags (freebet, fixed). Construction goes through the fluent
//! constructors so defaults stay in one place.

use serde::{Deserialize, Serialize};

use super::money::{Odd, Percent, Stake};

/// Side of a leg: a back bet on an outcome, or an exchange lay against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Bet that the outcome occurs.
    #[default]
    Back,
    /// Exchange bet that the outcome does not occur; risk is liability.
    Lay,
}

impl Role {
    /// Returns `true` for lay legs.
    #[must_use]
    pub fn is_lay(&self) -> bool {
        matches!(self, Role::Lay)
    }
}

/// One outcome/house in an arbitrage set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Quoted decimal odd. Must be greater than 1.
    pub odd: Odd,

    /// Promotional boost applied to the profit portion of the odd.
    #[serde(default)]
    pub boost_percent: Percent,

    /// Commission charged on winnings.
    #[serde(default)]
    pub commission_percent: Percent,

    /// Stake is not returned on a win and not at risk on a loss.
    #[serde(default)]
    pub freebet: bool,

    /// Stake is caller-supplied and excluded from proportional allocation.
    #[serde(default)]
    pub fixed: bool,

    /// Caller-supplied stake: fixed legs and the reference leg only.
    #[serde(default)]
    pub stake: Option<Stake>,

    /// Back or lay. Defaults to back.
    #[serde(default)]
    pub role: Role,
}

impl Leg {
    /// Create a back leg at the given quoted odd.
    #[must_use]
    pub fn back(odd: Odd) -> Self {
        Self {
            odd,
            boost_percent: Percent::ZERO,
            commission_percent: Percent::ZERO,
            freebet: false,
            fixed: false,
            stake: None,
            role: Role::Back,
        }
    }

    /// Create a lay leg at the given quoted odd.
    #[must_use]
    pub fn lay(odd: Odd) -> Self {
        Self {
            role: Role::Lay,
            ..Self::back(odd)
        }
    }

    /// Apply a promotional odds boost, in percent of the profit portion.
    #[must_use]
    pub fn with_boost(mut self, percent: Percent) -> Self {
        self.boost_percent = percent;
        self
    }

    /// Apply a commission on winnings, in percent.
    #[must_use]
    pub fn with_commission(mut self, percent: Percent) -> Self {
        self.commission_percent = percent;
        self
    }

    /// Mark the stake as a freebet.
    #[must_use]
    pub fn with_freebet(mut self) -> Self {
        self.freebet = true;
        self
    }

    /// Supply this leg's stake (the reference leg when no total is given).
    #[must_use]
    pub fn with_stake(mut self, stake: Stake) -> Self {
        self.stake = Some(stake);
        self
    }

    /// Pin this leg to a caller-supplied stake, excluding it from allocation.
    #[must_use]
    pub fn with_fixed_stake(mut self, stake: Stake) -> Self {
        self.fixed = true;
        self.stake = Some(stake);
        self
    }
}
