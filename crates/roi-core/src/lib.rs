//! # ROI Core
//!
//! Core types and the savings calculation for the ROI estimator.
//!
//! The estimator models a mortgage servicer's contact-center economics from
//! four slider-style inputs and derives the annual cost of handling calls
//! manually, the cost once calls are automated, and the resulting savings on
//! servicing and collection calls.
//!
//! - **Types**: [`EstimatorInputs`], [`EstimatorOutputs`], [`InputField`]
//! - **Estimator**: the pure [`compute`] function and the configurable [`Estimator`]
//! - **Ranges**: slider bounds, clamping and step snapping via [`FieldRange`]
//! - **Presentation**: currency/count formatting, payback and handle-time labels,
//!   and the servicing/collection savings split
//!
//! ## Example
//!
//! ```rust
//! use roi_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let outputs = compute(&EstimatorInputs::default());
//! assert_eq!(outputs.total_savings, dec!(3553200));
//! assert_eq!(format_currency(outputs.total_savings), "$3.6M");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]

pub mod assumptions;
pub mod error;
pub mod estimator;
pub mod format;
pub mod labels;
pub mod range;
pub mod split;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::assumptions::Assumptions;
    pub use crate::error::{RoiError, RoiResult};
    pub use crate::estimator::{compute, Estimator, RoiReport};
    pub use crate::format::{format_count, format_currency, format_input, format_share};
    pub use crate::labels::{handle_time_label, PaybackPeriod};
    pub use crate::range::FieldRange;
    pub use crate::split::SavingsSplit;
    pub use crate::types::{EstimatorInputs, EstimatorOutputs, InputField};
}

// Re-export commonly used types at crate root
pub use assumptions::Assumptions;
pub use error::{RoiError, RoiResult};
pub use estimator::{compute, Estimator, RoiReport};
pub use range::FieldRange;
pub use types::{EstimatorInputs, EstimatorOutputs, InputField};
