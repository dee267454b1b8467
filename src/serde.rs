//! [`Serialize`] and [`Deserialize`] implementations for [`ChainMap`].

use core::fmt;
use core::hash::BuildHasher;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::map::ChainMap;

/// Pairs are emitted in iteration order: bucket order then chain
/// order.
impl<S> Serialize for ChainMap<S> {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

struct ChainMapVisitor<S: BuildHasher> {
    build: PhantomData<S>,
}

impl<S: BuildHasher> ChainMapVisitor<S> {
    fn new() -> Self {
        ChainMapVisitor { build: PhantomData }
    }
}

impl<'de, S: BuildHasher + Default> Visitor<'de> for ChainMapVisitor<S> {
    type Value = ChainMap<S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys and 64-bit integer values")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut map = ChainMap::with_hasher(S::default());
        // Repeated keys in the input behave like repeated inserts: the
        // last one wins.
        while let Some((key, value)) = access.next_entry::<String, i64>()? {
            map.insert(&key, value);
        }
        Ok(map)
    }
}

impl<'de, S: BuildHasher + Default> Deserialize<'de> for ChainMap<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ChainMapVisitor::new())
    }
}
