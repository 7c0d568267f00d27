//! ROI Estimator Configuration Layer
//!
//! This crate manages named estimator profiles. A profile bundles a starting
//! set of inputs with the business assumptions (automation cost factor,
//! collection call volume, savings factor, handle time reduction, payback
//! threshold) the estimator runs with.
//!
//! # Features
//!
//! - **Profiles**: Named input presets plus assumptions, with builder methods
//! - **Validation**: Range checks on inputs and unit-interval checks on factors
//! - **Registry**: Thread-safe profile manager with a read-only `DEFAULT` profile
//! - **Files**: Profiles load from and save to TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use roi_config::{EstimatorProfile, ProfileManager};
//! use roi_core::InputField;
//! use rust_decimal_macros::dec;
//!
//! let manager = ProfileManager::new();
//! manager
//!     .register(
//!         EstimatorProfile::new("PROSPECT.REGIONAL")
//!             .with_description("Regional servicer, high touch")
//!             .with_input(InputField::PortfolioSize, dec!(400000))
//!             .with_input(InputField::CallsPerLoan, dec!(3.5)),
//!     )
//!     .unwrap();
//!
//! let profile = manager.get("PROSPECT.REGIONAL").unwrap();
//! let report = profile.estimator().report(&profile.inputs);
//! assert_eq!(report.outputs.total_calls_per_year, dec!(1400000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod manager;
mod profile;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use manager::{ProfileFormat, ProfileManager};
pub use profile::EstimatorProfile;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::manager::ProfileManager;
    pub use crate::profile::EstimatorProfile;
}
