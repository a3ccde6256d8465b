//! Default serde support for `SmallSet`: a sequence of members.

use core::fmt;

use ::serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::{SmallSet, UNIVERSE_SIZE};

impl Serialize for SmallSet {
    /// Serializes the members in ascending order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for n in self.iter() {
            seq.serialize_element(&n)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SmallSet {
    /// Deserializes a sequence of members in any order.
    ///
    /// Members outside the universe are rejected.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SmallSetVisitor;

        impl<'de> Visitor<'de> for SmallSetVisitor {
            type Value = SmallSet;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of integers below 128")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut s = SmallSet::new();
                while let Some(n) = seq.next_element::<u8>()? {
                    if usize::from(n) >= UNIVERSE_SIZE {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(u64::from(n)),
                            &"an integer below 128",
                        ));
                    }
                    s.insert(n);
                }
                Ok(s)
            }
        }

        deserializer.deserialize_seq(SmallSetVisitor)
    }
}
