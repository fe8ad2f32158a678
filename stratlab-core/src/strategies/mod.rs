//! Strategy plug-ins — thin signal rules against the engine.
//!
//! Every plug-in is a config struct, a pure signal generator, and a candidate
//! grid, assembled into the erased `Strategy` interface. Most use
//! `ComposedStrategy` + `GridSearch`; `buy_and_hold` implements `Strategy`
//! directly since it has nothing to optimize.

pub mod buy_and_hold;
pub mod cci_oscillator;
pub mod golden_cross;
pub mod ma_crossover;
pub mod macd;
pub mod obv_trend;
pub mod rsi_oscillator;
pub mod stochastic_oscillator;
pub mod volume_breakout;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::registry::{RegistryError, StrategyRegistry};

/// Install every built-in strategy.
///
/// This is the explicit registration phase the host runs once at startup;
/// nothing registers itself behind the host's back.
pub fn install(registry: &mut StrategyRegistry, slippage: Decimal) -> Result<(), RegistryError> {
    registry.register(Arc::new(buy_and_hold::BuyAndHold))?;
    registry.register(Arc::new(ma_crossover::strategy(slippage)))?;
    registry.register(Arc::new(golden_cross::strategy(slippage)))?;
    registry.register(Arc::new(rsi_oscillator::strategy(slippage)))?;
    registry.register(Arc::new(macd::strategy(slippage)))?;
    registry.register(Arc::new(stochastic_oscillator::strategy(slippage)))?;
    registry.register(Arc::new(cci_oscillator::strategy(slippage)))?;
    registry.register(Arc::new(volume_breakout::strategy(slippage)))?;
    registry.register(Arc::new(obv_trend::strategy(slippage)))?;
    Ok(())
}
