//! Domain entities.

mod comment;
mod post;
mod todo;
mod user;

pub use comment::*;
pub use post::*;
pub use todo::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the blank value, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
