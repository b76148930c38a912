//! Session-aware reference levels and indicators for intraday bars.
//!
//! Input is a [`BarSeries`] of one instrument spanning several calendar days,
//! timestamped in the market time zone. From it the crate derives:
//! - previous-day, pre-market and opening-range levels ([`levels`]),
//! - RSI, VWAP and MACD series plus their latest readings ([`indicators`]),
//! - a combined [`SessionSnapshot`] for the latest session ([`analyze`]).
//!
//! All calculations are pure. Missing data is `None` or an omitted key; only
//! broken caller contracts (unordered bars, zero periods, unparseable
//! timestamps) are [`Error`]s.

pub mod config;
pub mod errors;
pub mod indicators;
pub mod levels;
pub mod models;
pub mod session;
pub mod snapshot;
pub mod summary;
pub mod tz;

pub use config::{MarketConfig, load_config_from_env, load_config_path, load_config_str};
pub use errors::{Error, Result};
pub use indicators::{IndicatorSeries, IndicatorSet, calculate_indicators};
pub use levels::{calculate_levels, calculate_levels_for, extract, merge};
pub use models::{Bar, BarSeries, Extremes, LevelName, LevelSet, TimeWindow};
pub use snapshot::{SessionSnapshot, analyze};
