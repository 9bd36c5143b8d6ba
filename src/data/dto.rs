//! Recipe payloads as served by the recipes endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One recipe from the endpoint. Missing or `null` fields decode to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipesItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumb: String,
    #[serde(deserialize_with = "null_as_default")]
    pub calories: String,
    #[serde(deserialize_with = "null_as_default")]
    pub carbos: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fats: String,
    #[serde(deserialize_with = "null_as_default")]
    pub proteins: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fibers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: i32,
    /// ISO-8601 duration, e.g. `PT35M`
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
}

impl RecipesItem {
    /// Case-insensitive substring match on the recipe name
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Preparation time in minutes, when `time` is a plain `PT<n>M` duration
    pub fn time_minutes(&self) -> Option<u32> {
        self.time
            .strip_prefix("PT")
            .and_then(|rest| rest.strip_suffix('M'))
            .and_then(|minutes| minutes.parse().ok())
    }
}

/// Recipe list in server response order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipes {
    pub recipes_list: Vec<RecipesItem>,
}

impl Recipes {
    pub fn new(recipes_list: Vec<RecipesItem>) -> Self {
        Self { recipes_list }
    }

    pub fn is_empty(&self) -> bool {
        self.recipes_list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recipes_list.len()
    }

    /// First recipe whose name contains `query`, ignoring case
    pub fn find_by_name(&self, query: &str) -> Option<&RecipesItem> {
        self.recipes_list.iter().find(|item| item.name_contains(query))
    }
}
