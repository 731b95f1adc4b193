//! visage-core - Presentation policy for the face explorer
//!
//! Sits between the table readers (`visage-io`) and the statistics engine
//! (`visage-stats`) and decides what the views show:
//!
//! - **Attributes**: discovery, labels like `A1 (EUR)`, selection
//! - **Palette**: series colours by attribute position
//! - **Face**: five attributes mapped onto head, eyes, mouth, nose and ears
//! - **Chart**: padded y domain and per-attribute point series
//! - **Report**: everything above for one table, serializable to JSON
//! - **Config**: TOML view configuration

pub mod attributes;
pub mod chart;
pub mod config;
pub mod error;
pub mod face;
pub mod format;
pub mod palette;
pub mod report;

pub use attributes::*;
pub use chart::*;
pub use config::*;
pub use error::*;
pub use face::*;
pub use format::*;
pub use palette::*;
pub use report::*;

pub use visage_io;
pub use visage_stats;
