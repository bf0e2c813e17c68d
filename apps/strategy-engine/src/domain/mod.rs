//! Domain layer - validated value objects.
//!
//! Entities are immutable after construction: fields are private and every
//! constructor validates its inputs, so a value that exists is a value that
//! holds its invariants. The pricing layer can therefore assume validated
//! inputs and only re-checks the leg-count precondition defensively.

pub mod contract;
pub mod errors;
pub mod leg;
pub mod metrics;
pub mod strategy;

pub use contract::{OptionContract, OptionType};
pub use errors::ValidationError;
pub use leg::{LegAction, OptionLeg};
pub use metrics::{ProfitLoss, StrategyMetrics};
pub use strategy::Strategy;

/// Shares per equity option contract.
pub const CONTRACT_MULTIPLIER: u32 = 100;
