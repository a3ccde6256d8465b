//! Alternative serde representations for [`SmallSet`], for use with
//! `#[serde(with = "...")]`.
//!
//! The default implementation writes members as a sequence and accepts them
//! in any order. The modules here offer a stricter and a more compact form.

use super::{DATA_SIZE, SmallSet, UNIVERSE_SIZE};
use ::serde::{
    Deserializer, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// Members as a strictly ascending sequence of integers.
///
/// Serialization is identical to the default; deserialization rejects
/// unsorted or repeated members.
pub mod sorted_set {
    use super::*;
    use ::serde::Serialize;

    /// Serialize the set as an ascending sequence of members.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<S>(s: &SmallSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize(serializer)
    }

    /// Deserialize a set from a strictly ascending sequence of members.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is not strictly ascending, if a
    /// member is outside the universe, or if deserialization fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<SmallSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SortedVisitor;

        impl<'de> Visitor<'de> for SortedVisitor {
            type Value = SmallSet;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a strictly ascending sequence of integers below 128")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut s = SmallSet::new();
                let mut last = None;
                while let Some(n) = seq.next_element::<u8>()? {
                    if let Some(last) = last
                        && last >= n
                    {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(u64::from(n)),
                            &"sorted sequence",
                        ));
                    }
                    if usize::from(n) >= UNIVERSE_SIZE {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(u64::from(n)),
                            &"an integer below 128",
                        ));
                    }
                    last = Some(n);
                    s.insert(n);
                }
                Ok(s)
            }
        }

        deserializer.deserialize_seq(SortedVisitor)
    }
}

/// The packed 16-byte bit vector.
///
/// Binary formats store it as a byte string; self-describing formats without
/// a byte type (such as JSON) store an array of sixteen numbers.
pub mod bytes {
    use super::*;

    /// Serialize the set as its 16 packed bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(s: &SmallSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(s.as_bytes())
    }

    /// Deserialize a set from exactly 16 packed bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not hold exactly 16 bytes.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<SmallSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> Visitor<'de> for BytesVisitor {
            type Value = SmallSet;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "{DATA_SIZE} bytes")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                <[u8; DATA_SIZE]>::try_from(v)
                    .map(SmallSet::from_bytes)
                    .map_err(|_| E::invalid_length(v.len(), &self))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut data = [0u8; DATA_SIZE];
                for (i, byte) in data.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<u8>()?.is_some() {
                    return Err(de::Error::invalid_length(DATA_SIZE + 1, &self));
                }
                Ok(SmallSet::from_bytes(data))
            }
        }

        deserializer.deserialize_bytes(BytesVisitor)
    }
}
