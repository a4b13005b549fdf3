//! `serde` support, enabled with the `serde` feature.
//!
//! A vector serializes as a sequence of its elements; spare capacity is not
//! recorded. Deserialized vectors have capacity equal to their length.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::SimpleVector;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(SimpleVector::from)
    }
}
