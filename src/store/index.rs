//! Secondary index from parent records to the vehicles that reference them.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{RecordId, RecordKind, Vehicle};

/// Parent id → dependent vehicle ids, one map per parent kind.
///
/// Foreign keys equal to 0 (no parent selected) are never indexed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DependentIndex {
    by_segment: BTreeMap<RecordId, BTreeSet<RecordId>>,
    by_brand: BTreeMap<RecordId, BTreeSet<RecordId>>,
}

impl DependentIndex {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let mut index = Self::default();
        for vehicle in vehicles {
            index.insert(vehicle);
        }
        index
    }

    pub fn insert(&mut self, vehicle: &Vehicle) {
        if vehicle.segment != 0 {
            self.by_segment
                .entry(vehicle.segment)
                .or_default()
                .insert(vehicle.id);
        }
        if vehicle.brand != 0 {
            self.by_brand
                .entry(vehicle.brand)
                .or_default()
                .insert(vehicle.id);
        }
    }

    pub fn remove(&mut self, vehicle: &Vehicle) {
        detach(&mut self.by_segment, vehicle.segment, vehicle.id);
        detach(&mut self.by_brand, vehicle.brand, vehicle.id);
    }

    /// Vehicles that reference `id` of kind `parent`.
    ///
    /// This is the cascade contract: deleting the parent removes exactly
    /// these vehicles, renaming it rewrites exactly their display copies.
    /// Vehicles have no dependents, so `RecordKind::Vehicle` yields nothing.
    pub fn cascade_targets(&self, parent: RecordKind, id: RecordId) -> BTreeSet<RecordId> {
        let map = match parent {
            RecordKind::Segment => &self.by_segment,
            RecordKind::Brand => &self.by_brand,
            RecordKind::Vehicle => return BTreeSet::new(),
        };
        map.get(&id).cloned().unwrap_or_default()
    }

    /// Number of vehicles referencing `id` of kind `parent`.
    pub fn dependent_count(&self, parent: RecordKind, id: RecordId) -> usize {
        let map = match parent {
            RecordKind::Segment => &self.by_segment,
            RecordKind::Brand => &self.by_brand,
            RecordKind::Vehicle => return 0,
        };
        map.get(&id).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.by_segment.is_empty() && self.by_brand.is_empty()
    }
}

fn detach(map: &mut BTreeMap<RecordId, BTreeSet<RecordId>>, parent: RecordId, vehicle: RecordId) {
    if let Some(ids) = map.get_mut(&parent) {
        ids.remove(&vehicle);
        if ids.is_empty() {
            map.remove(&parent);
        }
    }
}
