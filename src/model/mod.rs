//! Record types managed by the console.
//!
//! Three record kinds with a fixed relationship shape: every vehicle points
//! at one segment and one brand. Each kind also has a field patch used for
//! keystroke-level edits of its staging slot.

mod account;
mod records;

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use account::{Credentials, Profile};
pub use records::{Brand, BrandPatch, Segment, SegmentPatch, Vehicle, VehiclePatch, DEFAULT_RELEASE_YEAR};

/// Server-assigned record identifier. `0` marks a record that was never saved.
pub type RecordId = u64;

/// The three collections the console keeps in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Segment,
    Brand,
    Vehicle,
}

impl RecordKind {
    /// All kinds in panel order.
    pub const ALL: [RecordKind; 3] = [RecordKind::Segment, RecordKind::Brand, RecordKind::Vehicle];

    /// Collection path segment on the remote API (`segments`, `brands`, `vehicles`).
    pub fn collection(self) -> &'static str {
        match self {
            RecordKind::Segment => "segments",
            RecordKind::Brand => "brands",
            RecordKind::Vehicle => "vehicles",
        }
    }

    /// Lowercase singular used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Segment => "segment",
            RecordKind::Brand => "brand",
            RecordKind::Vehicle => "vehicle",
        }
    }

    /// Panel title.
    pub fn title(self) -> &'static str {
        match self {
            RecordKind::Segment => "Segment",
            RecordKind::Brand => "Brand",
            RecordKind::Vehicle => "Vehicle",
        }
    }

    /// True for kinds that vehicles reference.
    pub fn is_parent(self) -> bool {
        !matches!(self, RecordKind::Vehicle)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "segment" | "segments" => Ok(RecordKind::Segment),
            "brand" | "brands" => Ok(RecordKind::Brand),
            "vehicle" | "vehicles" => Ok(RecordKind::Vehicle),
            other => Err(format!(
                "unknown collection '{}' (expected segments, brands or vehicles)",
                other
            )),
        }
    }
}

/// Common behaviour of the three record types.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + Send + 'static {
    /// Collection this record belongs to.
    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// Display name (`segment_name`, `brand_name` or `vehicle_name` on the wire).
    fn name(&self) -> &str;

    /// A record with id 0 is always routed to create, never update.
    fn is_new(&self) -> bool {
        self.id() == 0
    }

    /// Whether the record is complete enough to be submitted.
    fn is_submittable(&self) -> bool;

    fn into_any(self) -> AnyRecord;
}

/// A record of any kind, used where the kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRecord {
    Segment(Segment),
    Brand(Brand),
    Vehicle(Vehicle),
}

impl AnyRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            AnyRecord::Segment(_) => RecordKind::Segment,
            AnyRecord::Brand(_) => RecordKind::Brand,
            AnyRecord::Vehicle(_) => RecordKind::Vehicle,
        }
    }

    pub fn id(&self) -> RecordId {
        match self {
            AnyRecord::Segment(r) => r.id,
            AnyRecord::Brand(r) => r.id,
            AnyRecord::Vehicle(r) => r.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyRecord::Segment(r) => &r.name,
            AnyRecord::Brand(r) => &r.name,
            AnyRecord::Vehicle(r) => &r.name,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id() == 0
    }

    pub fn is_submittable(&self) -> bool {
        match self {
            AnyRecord::Segment(r) => r.is_submittable(),
            AnyRecord::Brand(r) => r.is_submittable(),
            AnyRecord::Vehicle(r) => r.is_submittable(),
        }
    }
}

impl From<Segment> for AnyRecord {
    fn from(record: Segment) -> Self {
        AnyRecord::Segment(record)
    }
}

impl From<Brand> for AnyRecord {
    fn from(record: Brand) -> Self {
        AnyRecord::Brand(record)
    }
}

impl From<Vehicle> for AnyRecord {
    fn from(record: Vehicle) -> Self {
        AnyRecord::Vehicle(record)
    }
}

/// A whole collection, as returned by a fetch-all.
#[derive(Debug, Clone, PartialEq)]
pub enum Records {
    Segments(Vec<Segment>),
    Brands(Vec<Brand>),
    Vehicles(Vec<Vehicle>),
}

impl Records {
    pub fn kind(&self) -> RecordKind {
        match self {
            Records::Segments(_) => RecordKind::Segment,
            Records::Brands(_) => RecordKind::Brand,
            Records::Vehicles(_) => RecordKind::Vehicle,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Records::Segments(r) => r.len(),
            Records::Brands(r) => r.len(),
            Records::Vehicles(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partial update of one staging slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Segment(SegmentPatch),
    Brand(BrandPatch),
    Vehicle(VehiclePatch),
}

impl FieldPatch {
    pub fn kind(&self) -> RecordKind {
        match self {
            FieldPatch::Segment(_) => RecordKind::Segment,
            FieldPatch::Brand(_) => RecordKind::Brand,
            FieldPatch::Vehicle(_) => RecordKind::Vehicle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_accepts_singular_and_plural() {
        assert_eq!("segments".parse::<RecordKind>(), Ok(RecordKind::Segment));
        assert_eq!("Brand".parse::<RecordKind>(), Ok(RecordKind::Brand));
        assert_eq!("VEHICLES".parse::<RecordKind>(), Ok(RecordKind::Vehicle));
        assert!("owners".parse::<RecordKind>().is_err());
    }

    #[test]
    fn only_segments_and_brands_are_parents() {
        assert!(RecordKind::Segment.is_parent());
        assert!(RecordKind::Brand.is_parent());
        assert!(!RecordKind::Vehicle.is_parent());
    }

    #[test]
    fn zero_id_is_new_regardless_of_fields() {
        let vehicle = Vehicle {
            name: "MODEL X".to_string(),
            segment: 2,
            brand: 2,
            ..Vehicle::default()
        };
        assert!(vehicle.is_new());
        assert!(AnyRecord::from(vehicle).is_new());
        assert!(!AnyRecord::from(Segment::new(4, "SUV")).is_new());
    }
}
