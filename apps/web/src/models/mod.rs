pub mod legacy;
pub mod portfolio;
pub mod profile;
pub mod resume;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as an absent field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
