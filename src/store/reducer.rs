//! Reducer for the record catalog.

use crate::model::{AnyRecord, FieldPatch, Record, RecordId, RecordKind, Records, Vehicle};
use crate::mvi::Reducer;

use super::index::DependentIndex;
use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Applies remote results and edit actions to a [`CatalogState`].
///
/// Pure function: the caller performs the remote call and only feeds the
/// outcome in. Cascades and name propagation go through the
/// [`DependentIndex`] kept alongside the vehicles.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::Loaded(records) => match records {
                Records::Segments(segments) => state.segments = segments,
                Records::Brands(brands) => state.brands = brands,
                Records::Vehicles(vehicles) => {
                    state.dependents = DependentIndex::from_vehicles(&vehicles);
                    state.vehicles = vehicles;
                }
            },

            CatalogIntent::Created(record) => {
                let kind = record.kind();
                match record {
                    AnyRecord::Segment(segment) => {
                        upsert(&mut state.segments, segment);
                    }
                    AnyRecord::Brand(brand) => {
                        upsert(&mut state.brands, brand);
                    }
                    AnyRecord::Vehicle(vehicle) => {
                        let id = vehicle.id;
                        if let Some(previous) = upsert(&mut state.vehicles, vehicle) {
                            state.dependents.remove(&previous);
                        }
                        reindex(&mut state, id);
                    }
                }
                clear_edit(&mut state, kind);
            }

            CatalogIntent::Updated(record) => {
                let kind = record.kind();
                match record {
                    AnyRecord::Segment(segment) => {
                        propagate_name(&mut state, RecordKind::Segment, segment.id, &segment.name);
                        replace(&mut state.segments, segment);
                    }
                    AnyRecord::Brand(brand) => {
                        propagate_name(&mut state, RecordKind::Brand, brand.id, &brand.name);
                        replace(&mut state.brands, brand);
                    }
                    AnyRecord::Vehicle(vehicle) => {
                        let id = vehicle.id;
                        if let Some(previous) = replace(&mut state.vehicles, vehicle) {
                            state.dependents.remove(&previous);
                            reindex(&mut state, id);
                        }
                    }
                }
                clear_edit(&mut state, kind);
            }

            CatalogIntent::Deleted { kind, id } => {
                match kind {
                    RecordKind::Segment => {
                        remove(&mut state.segments, id);
                    }
                    RecordKind::Brand => {
                        remove(&mut state.brands, id);
                    }
                    RecordKind::Vehicle => {
                        if let Some(vehicle) = remove(&mut state.vehicles, id) {
                            state.dependents.remove(&vehicle);
                        }
                    }
                }
                cascade_delete(&mut state, kind, id);
                clear_edit(&mut state, kind);
            }

            CatalogIntent::BeginEdit(record) => match record {
                AnyRecord::Segment(segment) => state.edited_segment = segment,
                AnyRecord::Brand(brand) => state.edited_brand = brand,
                AnyRecord::Vehicle(vehicle) => state.edited_vehicle = vehicle,
            },

            CatalogIntent::EditField(patch) => match patch {
                FieldPatch::Segment(patch) => patch.apply(&mut state.edited_segment),
                FieldPatch::Brand(patch) => patch.apply(&mut state.edited_brand),
                FieldPatch::Vehicle(patch) => patch.apply(&mut state.edited_vehicle),
            },

            CatalogIntent::ClearEdit(kind) => clear_edit(&mut state, kind),

            CatalogIntent::Reset => state = CatalogState::default(),
        }
        state
    }
}

/// Replace the entry with the same id, or append. Returns the replaced entry.
fn upsert<R: Record>(items: &mut Vec<R>, record: R) -> Option<R> {
    match items.iter().position(|item| item.id() == record.id()) {
        Some(pos) => Some(std::mem::replace(&mut items[pos], record)),
        None => {
            items.push(record);
            None
        }
    }
}

/// Replace the entry with the same id. Unknown ids are ignored.
fn replace<R: Record>(items: &mut [R], record: R) -> Option<R> {
    let pos = items.iter().position(|item| item.id() == record.id())?;
    Some(std::mem::replace(&mut items[pos], record))
}

fn remove<R: Record>(items: &mut Vec<R>, id: RecordId) -> Option<R> {
    let pos = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(pos))
}

/// Re-insert the stored vehicle `id` into the index after its entry changed.
fn reindex(state: &mut CatalogState, id: RecordId) {
    if let Some(vehicle) = state.vehicles.iter().find(|v| v.id == id) {
        state.dependents.insert(vehicle);
    }
}

fn propagate_name(state: &mut CatalogState, parent: RecordKind, id: RecordId, name: &str) {
    let targets = state.dependents.cascade_targets(parent, id);
    if targets.is_empty() {
        return;
    }
    for vehicle in state.vehicles.iter_mut().filter(|v| targets.contains(&v.id)) {
        match parent {
            RecordKind::Segment => vehicle.segment_name = name.to_string(),
            RecordKind::Brand => vehicle.brand_name = name.to_string(),
            RecordKind::Vehicle => {}
        }
    }
}

fn cascade_delete(state: &mut CatalogState, parent: RecordKind, id: RecordId) {
    let targets = state.dependents.cascade_targets(parent, id);
    if targets.is_empty() {
        return;
    }
    let (removed, kept): (Vec<Vehicle>, Vec<Vehicle>) = std::mem::take(&mut state.vehicles)
        .into_iter()
        .partition(|v| targets.contains(&v.id));
    state.vehicles = kept;
    for vehicle in &removed {
        state.dependents.remove(vehicle);
    }
}

fn clear_edit(state: &mut CatalogState, kind: RecordKind) {
    match kind {
        RecordKind::Segment => state.edited_segment = Default::default(),
        RecordKind::Brand => state.edited_brand = Default::default(),
        RecordKind::Vehicle => state.edited_vehicle = Default::default(),
    }
}
