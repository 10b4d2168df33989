use crate::model::{AnyRecord, Brand, Record, RecordId, RecordKind, Segment, Vehicle};
use crate::mvi::ViewState;

use super::index::DependentIndex;

/// One consistent snapshot of the three collections and their edit slots.
///
/// Only [`CatalogReducer`](super::CatalogReducer) produces new snapshots;
/// everything else reads through the accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub(super) segments: Vec<Segment>,
    pub(super) brands: Vec<Brand>,
    pub(super) vehicles: Vec<Vehicle>,
    pub(super) edited_segment: Segment,
    pub(super) edited_brand: Brand,
    pub(super) edited_vehicle: Vehicle,
    pub(super) dependents: DependentIndex,
}

impl ViewState for CatalogState {}

impl CatalogState {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn edited_segment(&self) -> &Segment {
        &self.edited_segment
    }

    pub fn edited_brand(&self) -> &Brand {
        &self.edited_brand
    }

    pub fn edited_vehicle(&self) -> &Vehicle {
        &self.edited_vehicle
    }

    /// Copy of the staging slot for `kind`.
    pub fn edited(&self, kind: RecordKind) -> AnyRecord {
        match kind {
            RecordKind::Segment => AnyRecord::Segment(self.edited_segment.clone()),
            RecordKind::Brand => AnyRecord::Brand(self.edited_brand.clone()),
            RecordKind::Vehicle => AnyRecord::Vehicle(self.edited_vehicle.clone()),
        }
    }

    pub fn dependents(&self) -> &DependentIndex {
        &self.dependents
    }

    pub fn segment(&self, id: RecordId) -> Option<&Segment> {
        find(&self.segments, id)
    }

    pub fn brand(&self, id: RecordId) -> Option<&Brand> {
        find(&self.brands, id)
    }

    pub fn vehicle(&self, id: RecordId) -> Option<&Vehicle> {
        find(&self.vehicles, id)
    }

    /// Record at `position` in the `kind` collection.
    pub fn record_at(&self, kind: RecordKind, position: usize) -> Option<AnyRecord> {
        match kind {
            RecordKind::Segment => self.segments.get(position).cloned().map(AnyRecord::from),
            RecordKind::Brand => self.brands.get(position).cloned().map(AnyRecord::from),
            RecordKind::Vehicle => self.vehicles.get(position).cloned().map(AnyRecord::from),
        }
    }

    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Segment => self.segments.len(),
            RecordKind::Brand => self.brands.len(),
            RecordKind::Vehicle => self.vehicles.len(),
        }
    }

    /// Vehicles whose non-zero foreign keys point at a parent missing from
    /// the current snapshot.
    pub fn dangling_vehicles(&self) -> Vec<RecordId> {
        self.vehicles
            .iter()
            .filter(|v| {
                (v.segment != 0 && self.segment(v.segment).is_none())
                    || (v.brand != 0 && self.brand(v.brand).is_none())
            })
            .map(|v| v.id)
            .collect()
    }
}

fn find<R: Record>(items: &[R], id: RecordId) -> Option<&R> {
    items.iter().find(|item| item.id() == id)
}
