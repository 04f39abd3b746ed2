//! Lenient deserializers for values stored by form inputs.
//!
//! Form widgets hand back raw strings, so a stored record may carry `"20"`
//! where a number is expected, or `""` for a field the user cleared. These
//! helpers coerce such values and reject anything that cannot be read as the
//! target type.

use serde::de::{Deserializer, Error};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrText {
    Bool(bool),
    Text(String),
}

/// Accept a JSON number or a numeric string. `null` and blank strings read as `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map_err(|e| D::Error::custom(format!("invalid number '{}': {}", s, e)))?
        }
    };

    if value.is_finite() {
        Ok(Some(value))
    } else {
        Err(D::Error::custom(format!("invalid number '{}'", value)))
    }
}

/// Accept a JSON boolean or the strings `"true"` / `"false"`.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolOrText::deserialize(deserializer)? {
        BoolOrText::Bool(b) => Ok(b),
        BoolOrText::Text(s) => match s.trim() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean '{}'", other))),
        },
    }
}

/// Accept a string or `null`, reading `null` as an empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
