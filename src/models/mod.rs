pub mod books;
pub mod schedule;
pub mod users;

use serde::{Deserialize, Deserializer};

/// Distinguishes "field absent" from "field explicitly null" in PATCH-style
/// payloads: absent deserializes to `None` (via `#[serde(default)]`), null to
/// `Some(None)`, and a value to `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Deserializes an optional flag that may arrive as a genuine JSON boolean or
/// as the legacy integer encoding, where 1 means true and anything else false.
pub(crate) fn optional_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    let value = Option::<Flag>::deserialize(deserializer)?;
    Ok(value.map(|flag| match flag {
        Flag::Bool(b) => b,
        Flag::Int(n) => n == 1,
    }))
}
