use serde::{Deserialize, Serialize};

use super::{AnyRecord, Record, RecordId, RecordKind};

/// Release year a fresh vehicle form starts with.
pub const DEFAULT_RELEASE_YEAR: i32 = 2020;

fn is_unsaved(id: &RecordId) -> bool {
    *id == 0
}

/// Market segment (e.g. "SUV", "EV").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id: RecordId,
    #[serde(rename = "segment_name")]
    pub name: String,
}

impl Segment {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Record for Segment {
    const KIND: RecordKind = RecordKind::Segment;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }

    fn into_any(self) -> AnyRecord {
        AnyRecord::Segment(self)
    }
}

/// Vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id: RecordId,
    #[serde(rename = "brand_name")]
    pub name: String,
}

impl Brand {
    pub fn new(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Record for Brand {
    const KIND: RecordKind = RecordKind::Brand;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }

    fn into_any(self) -> AnyRecord {
        AnyRecord::Brand(self)
    }
}

/// A vehicle, referencing one segment and one brand.
///
/// `segment_name` and `brand_name` are display copies computed by the server;
/// they are read from responses but never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "is_unsaved")]
    pub id: RecordId,
    #[serde(rename = "vehicle_name")]
    pub name: String,
    pub release_year: i32,
    /// Price in source-currency units.
    pub price: f64,
    pub segment: RecordId,
    pub brand: RecordId,
    #[serde(default, skip_serializing)]
    pub segment_name: String,
    #[serde(default, skip_serializing)]
    pub brand_name: String,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            release_year: DEFAULT_RELEASE_YEAR,
            price: 0.0,
            segment: 0,
            brand: 0,
            segment_name: String::new(),
            brand_name: String::new(),
        }
    }
}

impl Vehicle {
    /// Price converted with `rate`, formatted with two decimals.
    pub fn display_price(&self, rate: f64) -> String {
        format!("{:.2}", self.price * rate)
    }
}

impl Record for Vehicle {
    const KIND: RecordKind = RecordKind::Vehicle;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_submittable(&self) -> bool {
        !self.name.is_empty() && self.segment > 0 && self.brand > 0
    }

    fn into_any(self) -> AnyRecord {
        AnyRecord::Vehicle(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentPatch {
    pub name: Option<String>,
}

impl SegmentPatch {
    pub fn apply(self, segment: &mut Segment) {
        if let Some(name) = self.name {
            segment.name = name;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandPatch {
    pub name: Option<String>,
}

impl BrandPatch {
    pub fn apply(self, brand: &mut Brand) {
        if let Some(name) = self.name {
            brand.name = name;
        }
    }
}

/// Fields of a vehicle form; `None` leaves the staged value untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehiclePatch {
    pub name: Option<String>,
    pub release_year: Option<i32>,
    pub price: Option<f64>,
    pub segment: Option<RecordId>,
    pub brand: Option<RecordId>,
}

impl VehiclePatch {
    pub fn apply(self, vehicle: &mut Vehicle) {
        if let Some(name) = self.name {
            vehicle.name = name;
        }
        if let Some(release_year) = self.release_year {
            vehicle.release_year = release_year;
        }
        if let Some(price) = self.price {
            vehicle.price = price;
        }
        if let Some(segment) = self.segment {
            vehicle.segment = segment;
        }
        if let Some(brand) = self.brand {
            vehicle.brand = brand;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn segment_uses_wire_field_names() {
        let segment: Segment =
            serde_json::from_value(json!({"id": 1, "segment_name": "Sedan"})).unwrap();
        assert_eq!(segment, Segment::new(1, "Sedan"));
        assert_eq!(
            serde_json::to_value(&segment).unwrap(),
            json!({"id": 1, "segment_name": "Sedan"})
        );
    }

    #[test]
    fn new_record_body_omits_id() {
        let body = serde_json::to_value(Brand::new(0, "Tesla")).unwrap();
        assert_eq!(body, json!({"brand_name": "Tesla"}));
    }

    #[test]
    fn vehicle_body_never_sends_denormalized_names() {
        let vehicle = Vehicle {
            id: 3,
            name: "MODEL X".to_string(),
            release_year: 2020,
            price: 400.12,
            segment: 2,
            brand: 2,
            segment_name: "EV".to_string(),
            brand_name: "Tesla".to_string(),
        };
        let body = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(
            body,
            json!({
                "id": 3,
                "vehicle_name": "MODEL X",
                "release_year": 2020,
                "price": 400.12,
                "segment": 2,
                "brand": 2
            })
        );
    }

    #[test]
    fn vehicle_response_without_names_decodes() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": 7,
            "vehicle_name": "SQ7",
            "release_year": 2019,
            "price": 300.12,
            "segment": 1,
            "brand": 1
        }))
        .unwrap();
        assert_eq!(vehicle.id, 7);
        assert!(vehicle.segment_name.is_empty());
        assert!(vehicle.brand_name.is_empty());
    }

    #[test]
    fn vehicle_default_starts_in_2020() {
        let vehicle = Vehicle::default();
        assert_eq!(vehicle.release_year, DEFAULT_RELEASE_YEAR);
        assert_eq!(vehicle.id, 0);
        assert!(!vehicle.is_submittable());
    }

    #[test]
    fn vehicle_needs_name_segment_and_brand() {
        let mut vehicle = Vehicle {
            name: "SQ7".to_string(),
            ..Vehicle::default()
        };
        assert!(!vehicle.is_submittable());
        vehicle.segment = 1;
        assert!(!vehicle.is_submittable());
        vehicle.brand = 1;
        assert!(vehicle.is_submittable());
    }

    #[test]
    fn display_price_applies_rate() {
        let vehicle = Vehicle {
            price: 400.12,
            ..Vehicle::default()
        };
        assert_eq!(vehicle.display_price(142.28), "56929.07");
        assert_eq!(vehicle.display_price(1.0), "400.12");
    }

    #[test]
    fn vehicle_patch_only_touches_given_fields() {
        let mut vehicle = Vehicle {
            id: 4,
            name: "SQ7".to_string(),
            ..Vehicle::default()
        };
        VehiclePatch {
            price: Some(12.5),
            brand: Some(2),
            ..VehiclePatch::default()
        }
        .apply(&mut vehicle);
        assert_eq!(vehicle.id, 4);
        assert_eq!(vehicle.name, "SQ7");
        assert_eq!(vehicle.price, 12.5);
        assert_eq!(vehicle.brand, 2);
        assert_eq!(vehicle.segment, 0);
    }
}
