use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The value type of an mdp parameter.
///
/// The type decides which validation rule applies to an assignment and which
/// completions are offered for its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Free-form text such as file names or group lists.
    String,
    /// A whole number, optionally written with a decimal or exponent tail.
    Integer,
    /// A decimal or exponential number.
    Real,
    /// One of `yes`/`no`, `true`/`false` or `on`/`off`.
    Boolean,
    /// One literal out of a fixed list of valid values.
    Enum,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Integer => "integer",
            ParameterType::Real => "real",
            ParameterType::Boolean => "boolean",
            ParameterType::Enum => "enum",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ParameterType::Integer | ParameterType::Real)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = ();

    /// Parses a type keyword, ignoring ASCII case.
    ///
    /// `float` and `bool` are accepted as aliases of `real` and `boolean`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(ParameterType::String),
            "integer" | "int" => Ok(ParameterType::Integer),
            "real" | "float" => Ok(ParameterType::Real),
            "boolean" | "bool" => Ok(ParameterType::Boolean),
            "enum" => Ok(ParameterType::Enum),
            _ => Err(()),
        }
    }
}

/// An inclusive numeric range. Either bound may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Renders the range as `min: 0, max: 1`, listing only the bounds present.
    pub fn describe(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if let Some(min) = self.min {
            parts.push(format!("min: {}", min));
        }
        if let Some(max) = self.max {
            parts.push(format!("max: {}", max));
        }
        parts.join(", ")
    }
}

/// Everything the catalog knows about one parameter.
///
/// Definitions are immutable once the catalog is built. The `name` is the
/// canonical, hyphen-separated spelling (e.g. `tau-t`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ParameterDefinition {
    /// Canonical parameter name.
    pub name: String,
    /// Value type, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: ParameterType,
    /// Grouping tag such as `temperature-coupling`. Informational only.
    pub category: String,
    /// Documentation text shown by hover and completion.
    #[serde(default)]
    pub description: String,
    /// The literal GROMACS uses when the parameter is absent.
    #[serde(rename = "default")]
    pub default_value: Option<String>,
    /// Descriptive unit, never enforced.
    pub unit: Option<String>,
    /// Accepted literals; only meaningful for [`ParameterType::Enum`].
    #[serde(default)]
    pub valid_values: Vec<String>,
    /// Bounds for numeric types.
    pub range: Option<ValueRange>,
    /// When set, a numeric value is a whitespace-separated list whose entries are
    /// validated one by one (per coupling group or per lambda state).
    #[serde(default)]
    pub multi_value: bool,
}

impl ParameterDefinition {
    /// Returns the catalog spelling of `value` if it is a valid enum value,
    /// compared case-insensitively.
    pub fn matching_value(&self, value: &str) -> Option<&str> {
        self.valid_values
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(value))
            .map(String::as_str)
    }

    /// The range to enforce, ignoring ranges with neither bound set.
    pub fn effective_range(&self) -> Option<&ValueRange> {
        self.range.as_ref().filter(|r| !r.is_empty())
    }

    /// A value suitable for examples and insert text: the default, else the first
    /// valid value.
    pub fn example_value(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .or_else(|| self.valid_values.first().map(String::as_str))
    }
}
