use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resume as assembled by the editing surface or an import.
///
/// Every section is optional. Decoding never fails on shape mismatches inside
/// the document: wrong-typed values degrade to "absent" so the scorer stays total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(deserialize_with = "lenient::personal_info")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient::entries")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(deserialize_with = "lenient::entries")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "lenient::skills")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::entries")]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        alias = "linkedin",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_in: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub portfolio: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<String>,
    /// Keys present in the decoded object, including `null`-valued and unknown ones.
    #[serde(skip)]
    pub supplied_keys: usize,
}

impl PersonalInfo {
    /// True when the object carried at least one key, even if blank or null.
    pub fn has_any_field(&self) -> bool {
        self.supplied_keys > 0
            || [
                &self.full_name,
                &self.email,
                &self.phone,
                &self.location,
                &self.linked_in,
                &self.portfolio,
                &self.summary,
            ]
            .iter()
            .any(|field| field.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(
        alias = "position",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub job_title: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub company: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub degree: Option<String>,
    #[serde(
        alias = "institution",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub school: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_date: Option<String>,
    /// Numeric string, e.g. `"3.8"` or `"3.8/4.0"`. Numbers are accepted too.
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub technologies: Option<String>,
}

/// Returns the trimmed value when it is non-blank.
pub fn filled(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Serde helpers that turn shape mismatches into absence instead of errors.
mod lenient {
    use super::*;

    /// Renders a JSON scalar (or an array of scalars) as text.
    fn value_to_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(value_to_text).collect();
                Some(parts.join(", "))
            }
            Value::Null | Value::Object(_) => None,
        }
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(value_to_text))
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        })
    }

    pub fn skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Array(_) => String::new(),
                    other => value_to_text(other).unwrap_or_default(),
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            // Non-object elements still count toward the section length.
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
                    _ => T::default(),
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn personal_info<'de, D>(deserializer: D) -> Result<PersonalInfo, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Object(map)) => {
                let supplied_keys = map.len();
                let info: PersonalInfo =
                    serde_json::from_value(Value::Object(map)).unwrap_or_default();
                PersonalInfo {
                    supplied_keys,
                    ..info
                }
            }
            _ => PersonalInfo::default(),
        })
    }
}
