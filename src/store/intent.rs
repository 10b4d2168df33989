use crate::model::{AnyRecord, FieldPatch, RecordId, RecordKind, Records};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Fetch-all succeeded: replace the collection wholesale.
    Loaded(Records),
    /// Create succeeded: append the server's record and clear its edit slot.
    Created(AnyRecord),
    /// Update succeeded: replace by id, propagate parent names to vehicles.
    Updated(AnyRecord),
    /// Delete succeeded: remove by id, cascading from segments and brands.
    Deleted { kind: RecordKind, id: RecordId },
    /// User chose a record to edit; the slot gets its own copy.
    BeginEdit(AnyRecord),
    /// Keystroke-level change of the staged record.
    EditField(FieldPatch),
    /// Reset one edit slot to its zero value.
    ClearEdit(RecordKind),
    /// Drop everything (logout).
    Reset,
}

impl Intent for CatalogIntent {}
