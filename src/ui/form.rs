use crate::model::{
    BrandPatch, FieldPatch, RecordId, RecordKind, SegmentPatch, VehiclePatch,
};

/// One input of a panel's edit form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    Name,
    ReleaseYear,
    Price,
    Segment,
    Brand,
}

const PARENT_FIELDS: &[FormField] = &[FormField::Name];
const VEHICLE_FIELDS: &[FormField] = &[
    FormField::Name,
    FormField::ReleaseYear,
    FormField::Price,
    FormField::Segment,
    FormField::Brand,
];

impl FormField {
    pub fn for_kind(kind: RecordKind) -> &'static [FormField] {
        match kind {
            RecordKind::Vehicle => VEHICLE_FIELDS,
            RecordKind::Segment | RecordKind::Brand => PARENT_FIELDS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::ReleaseYear => "Year",
            FormField::Price => "Price",
            FormField::Segment => "Segment",
            FormField::Brand => "Brand",
        }
    }
}

pub fn name_patch(kind: RecordKind, name: String) -> FieldPatch {
    match kind {
        RecordKind::Segment => FieldPatch::Segment(SegmentPatch { name: Some(name) }),
        RecordKind::Brand => FieldPatch::Brand(BrandPatch { name: Some(name) }),
        RecordKind::Vehicle => FieldPatch::Vehicle(VehiclePatch {
            name: Some(name),
            ..VehiclePatch::default()
        }),
    }
}

pub fn vehicle_patch(field: FormField, input: &str, choice: RecordId) -> FieldPatch {
    let patch = match field {
        FormField::Name => VehiclePatch {
            name: Some(input.to_string()),
            ..VehiclePatch::default()
        },
        FormField::ReleaseYear => VehiclePatch {
            release_year: Some(input.parse().unwrap_or(0)),
            ..VehiclePatch::default()
        },
        FormField::Price => VehiclePatch {
            price: Some(input.parse().unwrap_or(0.0)),
            ..VehiclePatch::default()
        },
        FormField::Segment => VehiclePatch {
            segment: Some(choice),
            ..VehiclePatch::default()
        },
        FormField::Brand => VehiclePatch {
            brand: Some(choice),
            ..VehiclePatch::default()
        },
    };
    FieldPatch::Vehicle(patch)
}

/// Whether `ch` may be appended to the numeric input `current`.
pub fn accepts(field: FormField, current: &str, ch: char) -> bool {
    match field {
        FormField::ReleaseYear => ch.is_ascii_digit() && current.len() < 4,
        FormField::Price => ch.is_ascii_digit() || (ch == '.' && !current.contains('.')),
        FormField::Name => !ch.is_control(),
        FormField::Segment | FormField::Brand => false,
    }
}

/// Next id in `ids` after `current`, wrapping. Starts at the first (or last)
/// id when `current` is not in the list.
pub fn cycle(ids: &[RecordId], current: RecordId, forward: bool) -> Option<RecordId> {
    if ids.is_empty() {
        return None;
    }
    let len = ids.len();
    let next = match ids.iter().position(|id| *id == current) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    Some(ids[next])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_four_digits_only() {
        assert!(accepts(FormField::ReleaseYear, "202", '0'));
        assert!(!accepts(FormField::ReleaseYear, "2020", '1'));
        assert!(!accepts(FormField::ReleaseYear, "20", 'x'));
    }

    #[test]
    fn price_accepts_one_dot() {
        assert!(accepts(FormField::Price, "400", '.'));
        assert!(!accepts(FormField::Price, "400.1", '.'));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        let ids = [1, 2, 5];
        assert_eq!(cycle(&ids, 5, true), Some(1));
        assert_eq!(cycle(&ids, 1, false), Some(5));
        assert_eq!(cycle(&ids, 0, true), Some(1));
        assert_eq!(cycle(&ids, 0, false), Some(5));
        assert_eq!(cycle(&[], 0, true), None);
    }

    #[test]
    fn empty_numeric_input_patches_zero() {
        let patch = vehicle_patch(FormField::Price, "", 0);
        assert_eq!(
            patch,
            FieldPatch::Vehicle(VehiclePatch {
                price: Some(0.0),
                ..VehiclePatch::default()
            })
        );
    }
}
