use std::convert::TryFrom;

use actix_web::web::Json;
use serde::{de, Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

use errors::Error;

fn collect_errors(errors: ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field))
        })
        .collect()
}

pub fn validate<T>(params: &Json<T>) -> Result<(), Error>
where
    T: Validate,
{
    match params.validate() {
        Ok(_) => Ok(()),
        Err(err) => Err(Error::ValidationError(collect_errors(err))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accepts `3` as well as `"3"`; html form selects submit their values as strings.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => i32::try_from(value).map_err(de::Error::custom),
        IntOrString::Str(value) => value.trim().parse::<i32>().map_err(de::Error::custom),
    }
}
