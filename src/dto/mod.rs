use serde_json::{Map, Value};

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;
pub mod vehicles;

/// Keys a create body must carry, checked before typed deserialization.
pub trait RequiredFields {
    const FIELDS: &'static [&'static str];
}

/// Required keys absent from `body`, in declaration order.
pub fn missing_fields<T: RequiredFields>(body: &Map<String, Value>) -> Vec<&'static str> {
    T::FIELDS
        .iter()
        .copied()
        .filter(|field| !body.contains_key(*field))
        .collect()
}
