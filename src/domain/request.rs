//! Arbitrage request type and stake-basis resolution.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::leg::Leg;
use super::money::Stake;

fn default_increment() -> Decimal {
    dec!(0.01)
}

/// How the allocator derives stakes for the non-fixed legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeBasis {
    /// Distribute a known total across the non-fixed legs.
    Total(Stake),
    /// Solve every other non-fixed leg relative to the leg at this index.
    Reference(usize),
}

/// A full stake-distribution request: one leg per outcome, plus either a
/// total stake to distribute or exactly one reference leg carrying a stake.
///
/// Requests are plain data. Every recalculation builds a fresh request and
/// reruns the pipeline; nothing is retained between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageRequest {
    /// The outcomes to distribute stake over. At least 2.
    pub legs: Vec<Leg>,

    /// Total stake to distribute. Mutually exclusive with a reference leg.
    #[serde(default)]
    pub total_stake: Option<Stake>,

    /// Grid that computed stakes are rounded onto. Defaults to 0.01.
    #[serde(default = "default_increment")]
    pub rounding_increment: Decimal,
}

impl ArbitrageRequest {
    /// Create a request over the given legs with the default increment.
    #[must_use]
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs,
            total_stake: None,
            rounding_increment: default_increment(),
        }
    }

    /// Set the total stake to distribute.
    #[must_use]
    pub fn with_total_stake(mut self, total: Stake) -> Self {
        self.total_stake = Some(total);
        self
    }

    /// Set the rounding increment for computed stakes.
    #[must_use]
    pub fn with_rounding_increment(mut self, increment: Decimal) -> Self {
        self.rounding_increment = increment;
        self
    }

    /// Validate leg invariants and resolve the stake basis.
    ///
    /// # Errors
    ///
    /// Returns the structural failures of the request: bad odds or
    /// adjustments, negative stakes, a non-positive increment, too few
    /// legs, or an unresolvable stake basis.
    pub fn validate(&self) -> Result<StakeBasis, EngineError> {
        if self.legs.len() < 2 {
            return Err(EngineError::InsufficientLegs {
                required: 2,
                actual: self.legs.len(),
            });
        }

        if self.rounding_increment <= Decimal::ZERO {
            return Err(EngineError::InvalidIncrement {
                increment: self.rounding_increment,
            });
        }

        for (index, leg) in self.legs.iter().enumerate() {
            if leg.odd <= Decimal::ONE {
                return Err(EngineError::InvalidOdd {
                    index,
                    odd: leg.odd,
                });
            }
            if leg.boost_percent < Decimal::ZERO {
                return Err(EngineError::InvalidAdjustment {
                    index,
                    field: "boost_percent",
                    value: leg.boost_percent,
                });
            }
            if leg.commission_percent < Decimal::ZERO
                || leg.commission_percent >= Decimal::ONE_HUNDRED
            {
                return Err(EngineError::InvalidAdjustment {
                    index,
                    field: "commission_percent",
                    value: leg.commission_percent,
                });
            }
            if let Some(stake) = leg.stake {
                if stake < Decimal::ZERO {
                    return Err(EngineError::InvalidStake {
                        place: format!("leg {index}"),
                        stake,
                    });
                }
            }
            if leg.fixed && leg.stake.is_none() {
                return Err(EngineError::AmbiguousStakeBasis {
                    reason: format!("leg {index} is fixed but carries no stake"),
                });
            }
        }

        if self.legs.iter().any(|leg| leg.role.is_lay())
            && !self.legs.iter().any(|leg| !leg.role.is_lay())
        {
            return Err(EngineError::AmbiguousStakeBasis {
                reason: "a lay leg requires a back leg to hedge".into(),
            });
        }

        self.resolve_basis()
    }

    fn resolve_basis(&self) -> Result<StakeBasis, EngineError> {
        let references: Vec<usize> = self
            .legs
            .iter()
            .enumerate()
            .filter(|(_, leg)| !leg.fixed && leg.stake.is_some())
            .map(|(index, _)| index)
            .collect();

        match (self.total_stake, references.as_slice()) {
            (Some(total), []) => {
                let fixed_sum: Decimal = self
                    .legs
                    .iter()
                    .filter(|leg| leg.fixed)
                    .filter_map(|leg| leg.stake)
                    .sum();
                if total < Decimal::ZERO || total < fixed_sum {
                    return Err(EngineError::InvalidStake {
                        place: "total".into(),
                        stake: total,
                    });
                }
                let allocatable = self.legs.iter().filter(|leg| !leg.fixed).count();
                if allocatable < 1 {
                    return Err(EngineError::InsufficientLegs {
                        required: 1,
                        actual: 0,
                    });
                }
                Ok(StakeBasis::Total(total))
            }
            (Some(_), _) => Err(EngineError::AmbiguousStakeBasis {
                reason: "both a total stake and a reference leg stake were supplied".into(),
            }),
            (None, [reference]) => Ok(StakeBasis::Reference(*reference)),
            (None, []) => Err(EngineError::AmbiguousStakeBasis {
                reason: "no total stake and no reference leg stake".into(),
            }),
            (None, _) => Err(EngineError::AmbiguousStakeBasis {
                reason: "multiple non-fixed legs carry a stake".into(),
            }),
        }
    }
}
