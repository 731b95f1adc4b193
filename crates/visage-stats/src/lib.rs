//! visage-stats - Descriptive statistics engine for visage
//!
//! Pure functions that turn a numeric series into summary statistics and
//! quantile-based levels:
//!
//! - **quantile**: linear-interpolation quantiles over a sorted slice
//! - **mode**: most frequent value after rounding to three decimals
//! - **summary**: count, mean, median, mode, spread, quartiles, skewness, kurtosis
//! - **level**: low / mid / high position of the latest observation
//! - **aggregate**: per-attribute statistics over tabular rows
//!
//! # Absent statistics
//!
//! Nothing in this crate fails. A statistic that is not defined for the
//! sample size or shape is `None` (serialized as `null`), never NaN, an
//! infinity or zero. Callers should read `None` as "not computable for this
//! sample", not as a value.

pub mod aggregate;
pub mod level;
pub mod mode;
pub mod quantile;
pub mod summary;

pub use aggregate::*;
pub use level::*;
pub use mode::*;
pub use quantile::*;
pub use summary::*;
