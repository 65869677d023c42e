//! Input record, asset mode and output pair.

use crate::error::{NamingError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Asset type selecting which layout the generator walks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Video,
    Static,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Static => "static",
        }
    }
}

impl FromStr for Mode {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "static" | "image" | "carousel" => Ok(Self::Static),
            _ => Err(NamingError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! fields {
    ($($variant:ident => $key:literal,)+) => {
        /// Every named form field a creative record can carry.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// All fields in form order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// Canonical camelCase key used in JSON records.
            pub fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }
    };
}

fields! {
    Account => "account",
    ProductGeo => "productGeo",
    Trial => "trial",
    ConceptId => "conceptId",
    AssetId => "assetId",
    Focus => "focus",
    Theme => "theme",
    ShortConceptDesc => "shortConceptDesc",
    Seq => "seq",
    SeqDesc => "seqDesc",
    CarouselCode => "carouselCode",
    CarouselDesc => "carouselDesc",
    Title => "title",
    TitleDesc => "titleDesc",
    Intro => "intro",
    HookTheme => "hookTheme",
    HookDesc => "hookDesc",
    VisualTheme => "visualTheme",
    VisualObject => "visualObject",
    Sound => "sound",
    VisualIdentifier => "visualIdentifier",
    TestVariable => "testVariable",
    TestDesc => "testDesc",
    Ncon => "ncon",
    Age => "age",
    Ethnicity => "ethnicity",
    Ratio => "ratio",
    Style => "style",
    Graphic => "graphic",
    ProductCode => "productCode",
    ProjectCode => "projectCode",
    Variant => "variant",
    AdTextCode => "adTextCode",
    AssetFormat => "assetFormat",
}

impl Field {
    /// Parse a field key. Accepts `conceptId`, `concept_id` and `concept-id`.
    pub fn from_key(key: &str) -> Result<Self> {
        let folded = fold_key(key);
        Self::ALL
            .iter()
            .copied()
            .find(|field| fold_key(field.key()) == folded)
            .ok_or_else(|| NamingError::UnknownField(key.to_string()))
    }
}

impl FromStr for Field {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn fold_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// One creative asset's raw form values.
///
/// Values are kept as entered. Cleanup happens at generation time, so a
/// record built from a half-filled form is always valid input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRecord {
    values: BTreeMap<Field, Value>,
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text field.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, Value::String(value.into()));
        self
    }

    /// Set a boolean field such as [`Field::Ncon`].
    pub fn with_flag(mut self, field: Field, value: bool) -> Self {
        self.values.insert(field, Value::Bool(value));
        self
    }

    /// Set a raw value of any JSON type.
    pub fn with_value(mut self, field: Field, value: Value) -> Self {
        self.values.insert(field, value);
        self
    }

    /// The field's string value, or `""` when absent or not a string.
    pub fn text(&self, field: Field) -> &str {
        match self.values.get(&field) {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        }
    }

    /// True only when the field holds a boolean `true`.
    pub fn flag(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(Value::Bool(true)))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse a record from a JSON object keyed by field name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Build a record from a JSON object. Unrecognised keys are skipped.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(NamingError::NotAnObject(json_type_name(&other))),
        };

        let mut record = Self::new();
        for (key, value) in object {
            match Field::from_key(&key) {
                Ok(field) => {
                    record.values.insert(field, value);
                }
                Err(_) => log::debug!("Ignoring unknown field '{}'", key),
            }
        }
        Ok(record)
    }

    /// Apply a `key=value` assignment, as given on a command line.
    ///
    /// The `ncon` flag takes `true`/`false` spellings and is stored as a boolean.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, raw) = assignment
            .split_once('=')
            .ok_or_else(|| NamingError::InvalidAssignment(assignment.to_string()))?;
        let field = Field::from_key(key)?;

        let value = if field == Field::Ncon {
            Value::Bool(parse_flag(raw).ok_or_else(|| {
                NamingError::InvalidAssignment(assignment.to_string())
            })?)
        } else {
            Value::String(raw.to_string())
        };

        self.values.insert(field, value);
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// The two naming strings generated for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPair {
    pub ad_set: String,
    pub ad_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("video".parse::<Mode>().unwrap(), Mode::Video);
        assert_eq!("Static".parse::<Mode>().unwrap(), Mode::Static);
        assert_eq!("carousel".parse::<Mode>().unwrap(), Mode::Static);
        assert!("audio".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serialization() {
        assert_eq!(serde_json::to_string(&Mode::Static).unwrap(), "\"static\"");
        let mode: Mode = serde_json::from_str("\"video\"").unwrap();
        assert_eq!(mode, Mode::Video);
    }

    #[test]
    fn test_field_key_spellings() {
        assert_eq!(Field::from_key("conceptId").unwrap(), Field::ConceptId);
        assert_eq!(Field::from_key("concept_id").unwrap(), Field::ConceptId);
        assert_eq!(Field::from_key("concept-id").unwrap(), Field::ConceptId);
        assert_eq!(Field::from_key("ADTEXTCODE").unwrap(), Field::AdTextCode);
        assert!(matches!(
            Field::from_key("budget"),
            Err(NamingError::UnknownField(key)) if key == "budget"
        ));
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()).unwrap(), *field);
        }
    }

    #[test]
    fn test_text_coerces_non_strings() {
        let record = FieldRecord::new()
            .with(Field::Account, "US")
            .with_value(Field::Trial, json!(7))
            .with_flag(Field::Ncon, true);

        assert_eq!(record.text(Field::Account), "US");
        assert_eq!(record.text(Field::Trial), "");
        assert_eq!(record.text(Field::Ncon), "");
        assert_eq!(record.text(Field::ProductGeo), "");
    }

    #[test]
    fn test_flag_requires_boolean_true() {
        let record = FieldRecord::new().with(Field::Ncon, "true");
        assert!(!record.flag(Field::Ncon));

        let record = FieldRecord::new().with_flag(Field::Ncon, true);
        assert!(record.flag(Field::Ncon));
        assert!(!FieldRecord::new().flag(Field::Ncon));
    }

    #[test]
    fn test_from_json_str() {
        let record = FieldRecord::from_json_str(
            r#"{"account": "US", "productGeo": "USA", "ncon": true, "budget": "100"}"#,
        )
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.text(Field::ProductGeo), "USA");
        assert!(record.flag(Field::Ncon));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(matches!(
            FieldRecord::from_json_str("[1, 2]"),
            Err(NamingError::NotAnObject("an array"))
        ));
        assert!(matches!(
            FieldRecord::from_json_str("{not json"),
            Err(NamingError::Json(_))
        ));
    }

    #[test]
    fn test_apply_assignment() {
        let mut record = FieldRecord::new();
        record.apply_assignment("hook_theme=Fear, Urgency").unwrap();
        record.apply_assignment("ncon=yes").unwrap();
        record.apply_assignment("title=a=b").unwrap();

        assert_eq!(record.text(Field::HookTheme), "Fear, Urgency");
        assert!(record.flag(Field::Ncon));
        assert_eq!(record.text(Field::Title), "a=b");
    }

    #[test]
    fn test_apply_assignment_errors() {
        let mut record = FieldRecord::new();
        assert!(matches!(
            record.apply_assignment("account"),
            Err(NamingError::InvalidAssignment(_))
        ));
        assert!(matches!(
            record.apply_assignment("ncon=maybe"),
            Err(NamingError::InvalidAssignment(_))
        ));
        assert!(matches!(
            record.apply_assignment("budget=1"),
            Err(NamingError::UnknownField(_))
        ));
        assert!(record.is_empty());
    }

    #[test]
    fn test_generated_pair_serialization() {
        let pair = GeneratedPair {
            ad_set: "US_USA".to_string(),
            ad_level: "US_USA_T-Fear".to_string(),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json, json!({"adSet": "US_USA", "adLevel": "US_USA_T-Fear"}));
    }
}
