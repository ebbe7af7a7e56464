//! Vehicle aggregate
//!
//! Vehicle categories and the toll-free category set.

pub mod exemption;
pub mod model;

pub use exemption::{VehicleExemption, DEFAULT_TOLL_FREE_CATEGORIES};
pub use model::{ParseCategoryError, Vehicle, VehicleCategory};
