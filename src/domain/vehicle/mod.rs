//! Vehicle classification
//!
//! The calculator only ever needs a vehicle's class; everything else about a
//! vehicle belongs to the caller.

pub mod model;

pub use model::{Vehicle, VehicleClass};
