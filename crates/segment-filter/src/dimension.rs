//! Dimension metadata supplied by the embedding application.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::node::Operator;

/// Describes one filterable dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSpec {
    /// Key used in conditions and on the wire (e.g. `country`).
    pub key: String,
    /// Human readable label.
    pub label: String,
    /// UI grouping (e.g. `Location`, `Technology`).
    #[serde(default)]
    pub group: String,
    /// Operators that may be used with this dimension.
    pub allowed_operators: Vec<Operator>,
}

impl DimensionSpec {
    /// Creates a dimension spec.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        group: impl Into<String>,
        allowed_operators: impl IntoIterator<Item = Operator>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            group: group.into(),
            allowed_operators: allowed_operators.into_iter().collect(),
        }
    }

    /// Returns `true` if the operator may be used with this dimension.
    #[must_use]
    pub fn supports(&self, operator: Operator) -> bool {
        self.allowed_operators.contains(&operator)
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two entries share a key.
    #[error("duplicate dimension key: {0}")]
    DuplicateKey(String),
    /// An entry has an empty key.
    #[error("dimension key cannot be empty")]
    EmptyKey,
    /// An entry allows no operators.
    #[error("dimension {0} allows no operators")]
    NoOperators(String),
    /// The catalog document could not be parsed.
    #[error("invalid dimension catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered set of dimensions known to the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DimensionCatalog {
    dimensions: Vec<DimensionSpec>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl DimensionCatalog {
    /// Builds a catalog, rejecting empty or duplicate keys.
    pub fn new(dimensions: Vec<DimensionSpec>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(dimensions.len());
        for (position, dimension) in dimensions.iter().enumerate() {
            if dimension.key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            if dimension.allowed_operators.is_empty() {
                return Err(CatalogError::NoOperators(dimension.key.clone()));
            }
            if index.insert(dimension.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateKey(dimension.key.clone()));
            }
        }
        Ok(Self { dimensions, index })
    }

    /// Parses a catalog from a JSON array of dimension specs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let dimensions: Vec<DimensionSpec> = serde_json::from_str(json)?;
        Self::new(dimensions)
    }

    /// Looks up a dimension by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DimensionSpec> {
        self.index.get(key).map(|&position| &self.dimensions[position])
    }

    /// Returns `true` if the key is known.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns `true` if the dimension exists and allows the operator.
    #[must_use]
    pub fn supports(&self, key: &str, operator: Operator) -> bool {
        self.get(key).is_some_and(|dimension| dimension.supports(operator))
    }

    /// Iterates over the dimensions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DimensionSpec> {
        self.dimensions.iter()
    }

    /// Number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns `true` if the catalog has no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

impl<'de> Deserialize<'de> for DimensionCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let dimensions = Vec::<DimensionSpec>::deserialize(deserializer)?;
        Self::new(dimensions).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get("country").unwrap().label, "Country");
        assert!(catalog.supports("page", Operator::StartsWith));
        assert!(!catalog.supports("page", Operator::IsSet));
        assert!(!catalog.supports("unknown", Operator::Equals));
    }

    #[test]
    fn test_rejects_duplicates() {
        let spec = DimensionSpec::new("country", "Country", "", [Operator::Equals]);
        let result = DimensionCatalog::new(vec![spec.clone(), spec]);
        assert!(matches!(result, Err(CatalogError::DuplicateKey(key)) if key == "country"));
    }

    #[test]
    fn test_rejects_empty_key_and_operators() {
        let spec = DimensionSpec::new("", "Empty", "", [Operator::Equals]);
        assert!(matches!(
            DimensionCatalog::new(vec![spec]),
            Err(CatalogError::EmptyKey)
        ));
        let spec = DimensionSpec::new("os", "OS", "", []);
        assert!(matches!(
            DimensionCatalog::new(vec![spec]),
            Err(CatalogError::NoOperators(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"key": "country", "label": "Country", "group": "Location",
             "allowedOperators": ["equals", "is_one_of"]}
        ]"#;
        let catalog = DimensionCatalog::from_json(json).unwrap();
        assert!(catalog.supports("country", Operator::IsOneOf));
        assert!(!catalog.supports("country", Operator::Contains));

        let back: DimensionCatalog =
            serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_from_json_rejects_unknown_operator() {
        let json = r#"[{"key": "country", "label": "Country", "allowedOperators": ["equalz"]}]"#;
        assert!(matches!(
            DimensionCatalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }
}
