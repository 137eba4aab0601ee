use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::error::ConfigurationError;
use crate::hash::HashAlgorithm;

/// Caller-supplied options. Absent fields fall back to defaults.
///
/// Deserializes from camelCase keys (`removeDiacriticalMarks`,
/// `hashAlgorithm`) or their snake_case spellings. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EssenceOptions {
    #[serde(alias = "remove_diacritical_marks", skip_serializing_if = "Option::is_none")]
    pub remove_diacritical_marks: Option<bool>,
    #[serde(alias = "hash_algorithm", skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
}

type Validator = fn(&Value, &mut EssenceOptions) -> Result<(), ConfigurationError>;

/// One recognized option: the keys it may appear under and its validator.
struct RecognizedOption {
    keys: [&'static str; 2],
    validate: Validator,
}

const RECOGNIZED: [RecognizedOption; 2] = [
    RecognizedOption {
        keys: ["removeDiacriticalMarks", "remove_diacritical_marks"],
        validate: validate_remove_diacritical_marks,
    },
    RecognizedOption {
        keys: ["hashAlgorithm", "hash_algorithm"],
        validate: validate_hash_algorithm,
    },
];

impl EssenceOptions {
    /// Read options out of a loosely typed JSON value.
    ///
    /// `null` stands for "no options". Anything else that is not an object is
    /// rejected, and each recognized key is run through its validator.
    pub fn from_value(value: &Value) -> Result<Self, ConfigurationError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Self::from_map(map),
            other => {
                warn!(options = %other, "essence_options_rejected");
                Err(ConfigurationError::InvalidOptions(other.to_string()))
            }
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, ConfigurationError> {
        let mut options = Self::default();
        for option in &RECOGNIZED {
            if let Some(value) = option.keys.iter().find_map(|key| map.get(*key)) {
                (option.validate)(value, &mut options)?;
            }
        }
        Ok(options)
    }
}

/// Any value is accepted and read for truthiness.
fn validate_remove_diacritical_marks(
    value: &Value,
    options: &mut EssenceOptions,
) -> Result<(), ConfigurationError> {
    options.remove_diacritical_marks = Some(truthy(value));
    Ok(())
}

fn validate_hash_algorithm(
    value: &Value,
    options: &mut EssenceOptions,
) -> Result<(), ConfigurationError> {
    let Some(name) = name_text(value) else {
        warn!(hash_algorithm = %value, "essence_options_rejected");
        return Err(ConfigurationError::UnsupportedHashAlgorithm(value.to_string()));
    };

    let algorithm = HashAlgorithm::from_name(&name).map_err(|_| {
        warn!(hash_algorithm = %value, "essence_options_rejected");
        ConfigurationError::UnsupportedHashAlgorithm(value.to_string())
    })?;

    options.hash_algorithm = Some(algorithm.name().to_string());
    Ok(())
}

/// Textual form of a name-like option. Arrays read as their elements joined
/// with `,` (so `["sha1"]` names `sha1`); `null` and objects have none.
fn name_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => Some(String::new()),
                other => name_text(other),
            })
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        Value::Null | Value::Object(_) => None,
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_means_defaults() {
        let options = EssenceOptions::from_value(&Value::Null).unwrap();
        assert_eq!(options, EssenceOptions::default());
    }

    #[test]
    fn non_object_is_rejected() {
        for value in [json!(42), json!("sha1"), json!(true), json!([1, 2])] {
            let err = EssenceOptions::from_value(&value).unwrap_err();
            assert!(matches!(err, ConfigurationError::InvalidOptions(_)), "{value}");
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options = EssenceOptions::from_value(&json!({ "futureOption": 1 })).unwrap();
        assert_eq!(options, EssenceOptions::default());
    }

    #[test]
    fn diacritics_flag_uses_truthiness() {
        let cases = [
            (json!(true), true),
            (json!(false), false),
            (json!(1), true),
            (json!(0), false),
            (json!(0.0), false),
            (json!("yes"), true),
            (json!(""), false),
            (json!(null), false),
            (json!({}), true),
            (json!([]), true),
        ];
        for (value, expected) in cases {
            let options =
                EssenceOptions::from_value(&json!({ "removeDiacriticalMarks": value })).unwrap();
            assert_eq!(options.remove_diacritical_marks, Some(expected), "{value}");
        }
    }

    #[test]
    fn hash_algorithm_is_stored_lower_cased() {
        let options = EssenceOptions::from_value(&json!({ "hashAlgorithm": "SHA1" })).unwrap();
        assert_eq!(options.hash_algorithm.as_deref(), Some("sha1"));
    }

    #[test]
    fn snake_case_keys_are_recognized() {
        let options = EssenceOptions::from_value(&json!({
            "remove_diacritical_marks": true,
            "hash_algorithm": "md5",
        }))
        .unwrap();
        assert_eq!(options.remove_diacritical_marks, Some(true));
        assert_eq!(options.hash_algorithm.as_deref(), Some("md5"));
    }

    #[test]
    fn non_name_hash_algorithm_is_rejected() {
        for value in [
            json!(null),
            json!(["sha1", "md5"]),
            json!([{ "name": "sha1" }]),
            json!({ "name": "sha1" }),
            json!(256),
        ] {
            let err = EssenceOptions::from_value(&json!({ "hashAlgorithm": value })).unwrap_err();
            assert!(
                matches!(err, ConfigurationError::UnsupportedHashAlgorithm(_)),
                "{value}"
            );
        }
    }

    #[test]
    fn single_name_array_is_read_as_that_name() {
        let options = EssenceOptions::from_value(&json!({ "hashAlgorithm": ["SHA1"] })).unwrap();
        assert_eq!(options.hash_algorithm.as_deref(), Some("sha1"));

        let nested = EssenceOptions::from_value(&json!({ "hashAlgorithm": [["md5"]] })).unwrap();
        assert_eq!(nested.hash_algorithm.as_deref(), Some("md5"));
    }

    #[test]
    fn typed_deserialization_accepts_both_spellings() {
        let camel: EssenceOptions =
            serde_json::from_str(r#"{"removeDiacriticalMarks":true,"extra":0}"#).unwrap();
        let snake: EssenceOptions =
            serde_json::from_str(r#"{"remove_diacritical_marks":true}"#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(camel.hash_algorithm, None);
    }
}
