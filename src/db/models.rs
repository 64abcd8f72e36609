use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A catalog entry as served by the API, list columns decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub seo_title: String,
    pub seo_description: String,
    pub long_description: String,
    pub features: Vec<String>,
    pub use_cases: Vec<String>,
    pub steps: Vec<String>,
}

/// Every mutable column of a tool. Used as the full-overwrite update body;
/// an `id` in the payload is ignored. Every key must be present, but only
/// `name` must be non-null: a `null` column is stored as `""` or `[]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolFields {
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub seo_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub long_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub use_cases: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl Tool {
    pub fn from_fields(id: impl Into<String>, f: ToolFields) -> Self {
        Self {
            id: id.into(),
            name: f.name,
            description: f.description,
            category: f.category,
            seo_title: f.seo_title,
            seo_description: f.seo_description,
            long_description: f.long_description,
            features: f.features,
            use_cases: f.use_cases,
            steps: f.steps,
        }
    }

    pub fn into_fields(self) -> (String, ToolFields) {
        (
            self.id,
            ToolFields {
                name: self.name,
                description: self.description,
                category: self.category,
                seo_title: self.seo_title,
                seo_description: self.seo_description,
                long_description: self.long_description,
                features: self.features,
                use_cases: self.use_cases,
                steps: self.steps,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbUser {
    pub username: String,
    pub password: String,
}

/// Serialize a list column to its JSON text form.
pub fn encode_list(items: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Decode a list column. NULL, `null` and malformed text all yield an empty list.
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<String>>>(raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "malformed list column; treating as empty");
            Vec::new()
        }
    }
}
