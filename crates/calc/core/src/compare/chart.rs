//! Chart-ready output shapes.

/// Tooltip text for a value that formatted as not-a-number.
pub const NO_DATA: &str = "---";

/// Formatted value per loadout key, in loadout order. Keys are unique.
///
/// A key that is absent means the metric does not apply to that loadout; a
/// key with `None` means it applies but is undefined at this point.
pub type SeriesValues = Vec<(String, Option<String>)>;

/// One chart row: the X value plus one column per loadout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartEntry {
    pub name: i32,
    pub values: SeriesValues,
}

impl ChartEntry {
    pub fn new(name: i32, values: SeriesValues) -> Self {
        Self { name, values }
    }

    /// Whether the loadout has a column in this row.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.iter().any(|(k, _)| k == key)
    }

    /// Formatted value for `key`; `None` when absent or undefined.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Loadout keys present in this row.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(k, _)| k.as_str())
    }

    /// Value as a tooltip shows it, with `"NaN"` replaced by [`NO_DATA`].
    pub fn display(&self, key: &str) -> Option<&str> {
        self.get(key)
            .map(|value| if value == "NaN" { NO_DATA } else { value })
    }
}

/// Fixed reference marker on one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartAnnotation {
    pub label: String,
    pub value: i32,
}

impl ChartAnnotation {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotations {
    pub x: Vec<ChartAnnotation>,
    pub y: Vec<ChartAnnotation>,
}

/// Everything one comparison run produces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CompareResult {
    pub entries: Vec<ChartEntry>,
    pub annotations: Annotations,
    pub domain_max: f64,
}

// Entries travel as flat objects: `{ "name": 42, "<loadout>": "1.234", ... }`.
// Undefined values are left out, like any other missing property.
#[cfg(feature = "serde")]
mod wire {
    use core::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ChartEntry;

    const NAME: &str = "name";

    impl Serialize for ChartEntry {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let present = self.values.iter().filter(|(_, v)| v.is_some());
            let mut map = serializer.serialize_map(None)?;
            map.serialize_entry(NAME, &self.name)?;
            for (key, value) in present {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }

    struct EntryVisitor;

    impl<'de> Visitor<'de> for EntryVisitor {
        type Value = ChartEntry;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a chart entry object with a numeric `name`")
        }

        fn visit_map<A>(self, mut access: A) -> Result<ChartEntry, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut name = None;
            let mut values = Vec::new();
            while let Some(key) = access.next_key::<String>()? {
                if key == NAME {
                    name = Some(access.next_value::<i32>()?);
                } else {
                    values.push((key, access.next_value::<Option<String>>()?));
                }
            }
            let name = name.ok_or_else(|| serde::de::Error::missing_field(NAME))?;
            Ok(ChartEntry { name, values })
        }
    }

    impl<'de> Deserialize<'de> for ChartEntry {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(EntryVisitor)
        }
    }
}
