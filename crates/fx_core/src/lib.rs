//! # fx_core: Foundation Types and Analytics for FxDesk
//!
//! ## Layer 1 (Foundation) Role
//!
//! fx_core is the bottom layer of the workspace, providing:
//! - Currency, pair and tenor types (`types`)
//! - The static pair catalog: `PairCatalog` (`types::pair`)
//! - Rate state and snapshots: `RateState`, `RateSnapshot` (`types::rate`)
//! - Rounding and linear interpolation (`math`)
//! - Forward interpolation, technical signals and yield-curve differentials (`analytics`)
//!
//! ## No Runtime Dependencies
//!
//! Nothing here is async or performs I/O. Randomised generation and the
//! subscription machinery live in `fx_feed`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use fx_core::types::{Market, PairCatalog, PairFilter, PairGroup};
//!
//! let catalog = PairCatalog::standard();
//! let eurusd = catalog.get("EURUSD-OFF").unwrap();
//! assert_eq!(eurusd.code(), "EUR/USD");
//! assert_eq!(eurusd.market(), Market::Offshore);
//!
//! let onshore_inr = catalog.filter(
//!     &PairFilter::default()
//!         .with_market(Market::Onshore)
//!         .with_group(PairGroup::InrPairs),
//! );
//! assert_eq!(onshore_inr.len(), 4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytics;
pub mod math;
pub mod types;
