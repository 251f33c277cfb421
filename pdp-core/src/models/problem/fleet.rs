use crate::models::common::{Cost, Location, Weight};

/// A vehicle id, an index into the fleet.
pub type VehicleId = usize;

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A unique vehicle id.
    pub id: VehicleId,
    /// A maximum total weight of simultaneously carried tasks.
    pub capacity: Weight,
    /// Location where the vehicle starts.
    pub start: Location,
    /// Cost per one distance unit.
    pub distance_cost: Cost,
}

/// Represents available vehicles to serve tasks.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    /// Creates a new instance of `Fleet`.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        assert!(!vehicles.is_empty());
        assert!(vehicles.iter().enumerate().all(|(index, vehicle)| vehicle.id == index));
        assert!(vehicles.iter().all(|vehicle| vehicle.capacity > 0));

        Self { vehicles }
    }

    /// Returns a vehicle by its id.
    pub fn get(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id]
    }

    /// Returns all vehicles.
    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    /// Returns amount of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Checks whether fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Returns the first vehicle with the largest capacity.
    pub fn largest(&self) -> &Vehicle {
        self.vehicles
            .iter()
            .reduce(|largest, vehicle| if vehicle.capacity > largest.capacity { vehicle } else { largest })
            .expect("fleet has no vehicles")
    }
}
