//! Column and input helpers shared by several entities.

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Deserializer, Serialize};
use url::{Host, Url};

use crate::errors::ModelError;

/// Ordered list of strings persisted as a JSON array (service features, image URLs).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

impl StringList {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn iter(&self) -> std::slice::Iter<'_, String> { self.0.iter() }
}

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self { Self(v) }
}

/// Distinguishes "field absent" (`None`) from "explicit null" (`Some(None)`) in partial updates.
/// Use with `#[serde(default, deserialize_with = "models::types::double_option")]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

pub fn validate_required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Absolute http(s) URL with a well-formed host.
pub fn validate_http_url(field: &str, value: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation(format!("{field} must be a valid http(s) URL"));
    let parsed = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match parsed.host() {
        Some(Host::Domain(domain)) if is_hostname(domain) => Ok(()),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        _ => Err(invalid()),
    }
}

// Domains arrive IDNA-encoded, so only LDH labels are legitimate here.
fn is_hostname(domain: &str) -> bool {
    domain.split('.').all(|label| {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}

pub fn validate_url_list(field: &str, values: &[String]) -> Result<(), ModelError> {
    values.iter().try_for_each(|v| validate_http_url(field, v))
}
