// Boolean query parameters may be given with no value (`?flag`) or with an explicit one
// (`?flag=true`). Any other value means `false`. A missing parameter is handled with
// `#[serde(default)]`.

use serde::{Deserialize as _, Deserializer};

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let string = String::deserialize(deserializer)?;
    Ok(matches!(string.as_str(), "" | "true"))
}
