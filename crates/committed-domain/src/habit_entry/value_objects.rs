use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Status recorded for a habit on a given day.
///
/// Only `Completed` satisfies the day. Unknown values are kept verbatim so a
/// row written by another client round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    Completed,
    Skipped,
    Missed,
    Other(String),
}

impl EntryStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "completed" => EntryStatus::Completed,
            "skipped" => EntryStatus::Skipped,
            "missed" => EntryStatus::Missed,
            other => EntryStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntryStatus::Completed => "completed",
            EntryStatus::Skipped => "skipped",
            EntryStatus::Missed => "missed",
            EntryStatus::Other(value) => value,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, EntryStatus::Completed)
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntryStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EntryStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(EntryStatus::parse(&value))
    }
}
