//! Toll-free vehicle categories

use std::collections::HashSet;

use super::model::{Vehicle, VehicleCategory};

/// Categories that never pay a toll unless configured otherwise.
pub const DEFAULT_TOLL_FREE_CATEGORIES: &[VehicleCategory] = &[
    VehicleCategory::Motorbike,
    VehicleCategory::Tractor,
    VehicleCategory::Emergency,
    VehicleCategory::Diplomat,
    VehicleCategory::Foreign,
    VehicleCategory::Military,
];

/// Set of vehicle categories exempt from tolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleExemption {
    toll_free: HashSet<VehicleCategory>,
}

impl VehicleExemption {
    pub fn from_categories(categories: impl IntoIterator<Item = VehicleCategory>) -> Self {
        Self {
            toll_free: categories.into_iter().collect(),
        }
    }

    pub fn is_toll_free(&self, vehicle: &Vehicle) -> bool {
        self.toll_free.contains(&vehicle.category)
    }

    /// Exempt categories in a stable order.
    pub fn categories(&self) -> Vec<VehicleCategory> {
        let mut categories: Vec<_> = self.toll_free.iter().copied().collect();
        categories.sort();
        categories
    }
}

impl Default for VehicleExemption {
    fn default() -> Self {
        Self::from_categories(DEFAULT_TOLL_FREE_CATEGORIES.iter().copied())
    }
}
