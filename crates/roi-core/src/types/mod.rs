//! Domain types for the ROI estimator.
//!
//! - [`InputField`]: Identifies one of the four estimator inputs
//! - [`EstimatorInputs`]: The four bounded scalar inputs
//! - [`EstimatorOutputs`]: Metrics derived from the inputs

mod field;
mod inputs;
mod outputs;

pub use field::InputField;
pub use inputs::EstimatorInputs;
pub use outputs::EstimatorOutputs;
