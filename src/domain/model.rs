use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;

/// Feet per meter used when reporting lengths.
pub const FEET_PER_METER: f64 = 3.281;

/// "Millions of years ago": a point estimate or an inclusive `[start, end]` range,
/// older bound first. Values keep the number exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Number>", into = "Vec<Number>")]
pub enum Mya {
    Point(Number),
    Range { start: Number, end: Number },
}

fn as_f64(value: &Number) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

impl Mya {
    pub fn point(value: impl Into<Number>) -> Self {
        Mya::Point(value.into())
    }

    pub fn range(start: impl Into<Number>, end: impl Into<Number>) -> Self {
        Mya::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The value shown in descriptions: the point itself, or the more recent bound.
    pub fn era_value(&self) -> f64 {
        match self {
            Mya::Point(value) => as_f64(value),
            Mya::Range { end, .. } => as_f64(end),
        }
    }

    /// `(start, end)` as floats; a point is its own start and end.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Mya::Point(value) => (as_f64(value), as_f64(value)),
            Mya::Range { start, end } => (as_f64(start), as_f64(end)),
        }
    }

    /// A range covers `mya` inclusively. A point matches itself or one unit less.
    pub fn contains(&self, mya: f64) -> bool {
        match self {
            Mya::Range { .. } => {
                let (start, end) = self.bounds();
                start >= mya && end <= mya
            }
            Mya::Point(value) => {
                let value = as_f64(value);
                value == mya || value - 1.0 == mya
            }
        }
    }
}

impl TryFrom<Vec<Number>> for Mya {
    type Error = String;

    fn try_from(values: Vec<Number>) -> Result<Self, Self::Error> {
        let count = values.len();
        let mut values = values.into_iter();
        match (values.next(), values.next(), count) {
            (Some(value), None, 1) => Ok(Mya::Point(value)),
            (Some(start), Some(end), 2) => Ok(Mya::Range { start, end }),
            _ => Err(format!("mya must hold 1 or 2 values, got {}", count)),
        }
    }
}

impl From<Mya> for Vec<Number> {
    fn from(mya: Mya) -> Self {
        match mya {
            Mya::Point(value) => vec![value],
            Mya::Range { start, end } => vec![start, end],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DinosaurRecord {
    #[serde(rename = "dinosaurId", alias = "id")]
    pub id: String,
    pub name: String,
    pub pronunciation: String,
    pub length_in_meters: Number,
    pub info: String,
    pub period: String,
    pub mya: Mya,
    /// Fields outside the core shape, e.g. `meaningOfName` or `diet`.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl DinosaurRecord {
    pub fn meters(&self) -> f64 {
        as_f64(&self.length_in_meters)
    }

    pub fn length_in_feet(&self) -> f64 {
        self.meters() * FEET_PER_METER
    }

    /// Looks a field up by its JSON name, like indexing the raw object.
    pub fn field(&self, key: &str) -> Option<Value> {
        match key {
            "dinosaurId" | "id" => Some(Value::from(self.id.as_str())),
            "name" => Some(Value::from(self.name.as_str())),
            "pronunciation" => Some(Value::from(self.pronunciation.as_str())),
            "lengthInMeters" => Some(Value::Number(self.length_in_meters.clone())),
            "info" => Some(Value::from(self.info.as_str())),
            "period" => Some(Value::from(self.period.as_str())),
            "mya" => Some(Value::Array(
                Vec::<Number>::from(self.mya.clone())
                    .into_iter()
                    .map(Value::Number)
                    .collect(),
            )),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// Loose truthiness over JSON values: `null`, `false`, `0`, `NaN` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mya_from_json() {
        let point: Mya = serde_json::from_value(json!([29])).unwrap();
        assert_eq!(point, Mya::point(29));

        let range: Mya = serde_json::from_value(json!([155, 145])).unwrap();
        assert_eq!(range, Mya::range(155, 145));

        assert!(serde_json::from_value::<Mya>(json!([])).is_err());
        assert!(serde_json::from_value::<Mya>(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_point_tolerance_is_one_unit_younger() {
        let mya = Mya::point(29);
        assert!(mya.contains(29.0));
        assert!(mya.contains(28.0));
        assert!(!mya.contains(30.0));
        assert!(!mya.contains(27.0));
    }

    #[test]
    fn test_range_is_inclusive() {
        let mya = Mya::range(155, 145);
        assert!(mya.contains(155.0));
        assert!(mya.contains(150.0));
        assert!(mya.contains(145.0));
        assert!(!mya.contains(156.0));
        assert!(!mya.contains(144.0));
        assert_eq!(mya.era_value(), 145.0);
    }

    #[test]
    fn test_record_field_lookup() {
        let record: DinosaurRecord = serde_json::from_value(json!({
            "dinosaurId": "abc",
            "name": "Dracorex",
            "pronunciation": "dray-ko-rex",
            "meaningOfName": "dragon king",
            "diet": "",
            "lengthInMeters": 3,
            "period": "Late Cretaceous",
            "mya": [66],
            "info": "Dracorex had spiky horns."
        }))
        .unwrap();

        assert_eq!(record.field("name"), Some(json!("Dracorex")));
        assert_eq!(record.field("dinosaurId"), Some(json!("abc")));
        assert_eq!(record.field("meaningOfName"), Some(json!("dragon king")));
        assert_eq!(record.field("diet"), Some(json!("")));
        assert_eq!(record.field("unknown-key"), None);
        assert_eq!(record.field("mya"), Some(json!([66])));
        assert_eq!(record.field("lengthInMeters"), Some(json!(3)));
    }

    #[test]
    fn test_numbers_keep_their_json_form() {
        let record: DinosaurRecord = serde_json::from_value(json!({
            "dinosaurId": "x",
            "name": "Xenoceratops",
            "pronunciation": "ZEE-no-SEH-ruh-tops",
            "lengthInMeters": 6.5,
            "period": "Early Cretaceous",
            "mya": [77.5],
            "info": "Frilled."
        }))
        .unwrap();

        assert_eq!(record.field("lengthInMeters"), Some(json!(6.5)));
        assert_eq!(record.field("mya"), Some(json!([77.5])));
        assert_eq!(record.meters(), 6.5);
        assert_eq!(record.mya.era_value(), 77.5);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["mya"], json!([77.5]));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(false)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1.5)));
        assert!(is_truthy(&json!([])));
    }
}
