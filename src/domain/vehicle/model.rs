//! Vehicle class and the toll-free exemption predicate

use serde::{Deserialize, Serialize};

/// Vehicle category as reported by the roadside classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    Car,
    Bus,
    Truck,
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
    /// Any label not listed above; taxed like a car
    Other,
}

impl VehicleClass {
    /// Every class, in declaration order
    pub const ALL: [VehicleClass; 10] = [
        Self::Car,
        Self::Bus,
        Self::Truck,
        Self::Motorbike,
        Self::Tractor,
        Self::Emergency,
        Self::Diplomat,
        Self::Foreign,
        Self::Military,
        Self::Other,
    ];

    /// Whether vehicles of this class never pay congestion tax
    pub fn is_toll_free(self) -> bool {
        match self {
            Self::Motorbike
            | Self::Tractor
            | Self::Emergency
            | Self::Diplomat
            | Self::Foreign
            | Self::Military => true,
            Self::Car | Self::Bus | Self::Truck | Self::Other => false,
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "Car"),
            Self::Bus => write!(f, "Bus"),
            Self::Truck => write!(f, "Truck"),
            Self::Motorbike => write!(f, "Motorbike"),
            Self::Tractor => write!(f, "Tractor"),
            Self::Emergency => write!(f, "Emergency"),
            Self::Diplomat => write!(f, "Diplomat"),
            Self::Foreign => write!(f, "Foreign"),
            Self::Military => write!(f, "Military"),
            Self::Other => write!(f, "Other"),
        }
    }
}

impl From<&str> for VehicleClass {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "car" => Self::Car,
            "bus" => Self::Bus,
            "truck" => Self::Truck,
            "motorbike" | "motorcycle" => Self::Motorbike,
            "tractor" => Self::Tractor,
            "emergency" => Self::Emergency,
            "diplomat" => Self::Diplomat,
            "foreign" => Self::Foreign,
            "military" => Self::Military,
            _ => Self::Other,
        }
    }
}

impl std::str::FromStr for VehicleClass {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Anything that can report its classification.
///
/// A vehicle whose class is unknown returns `None` and is taxed normally.
pub trait Vehicle {
    fn vehicle_class(&self) -> Option<VehicleClass>;
}

impl Vehicle for VehicleClass {
    fn vehicle_class(&self) -> Option<VehicleClass> {
        Some(*self)
    }
}

impl<V: Vehicle + ?Sized> Vehicle for &V {
    fn vehicle_class(&self) -> Option<VehicleClass> {
        (**self).vehicle_class()
    }
}
