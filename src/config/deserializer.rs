//! Configuration deserialization helpers

use std::fmt;
use std::path::PathBuf;

use serde::de::{SeqAccess, Visitor};

use crate::utils::expand_path;

/// Deserializes a path written either as a string or as a list of segments
///
/// `~` and `$VAR` are expanded in every segment.
pub fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PathVisitor;

    impl<'de> Visitor<'de> for PathVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a path string or an array of path segments")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(PathBuf::from(expand_path(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(expand_path(&segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathVisitor)
}
