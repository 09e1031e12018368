//! JSON adapter for [`TriState<T>`].
//!
//! On the wire `Value(v)` is the JSON encoding of `v`, while `Null` and
//! `Absent` both encode as the literal `null` - a single encoded field cannot
//! distinguish them. Omitting absent fields is the containing struct's job:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tristate::TriState;
//!
//! #[derive(Serialize, Deserialize)]
//! struct UserPatch {
//!     #[serde(default, skip_serializing_if = "TriState::is_absent")]
//!     nickname: TriState<String>,
//! }
//!
//! let patch: UserPatch = serde_json::from_str(r#"{"nickname":null}"#).unwrap();
//! assert!(patch.nickname.is_null());
//!
//! let patch: UserPatch = serde_json::from_str("{}").unwrap();
//! assert!(patch.nickname.is_absent());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
//! ```
//!
//! Decoding goes through `Option<T>`, so a `null` token maps straight to
//! `Null` without ever invoking `T`'s deserializer. A missing key never
//! reaches the deserializer at all, which is why `Absent` is only ever
//! produced by `default` and never by this adapter.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::Result;
use crate::value::TriState;

impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for TriState<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

impl<T: Serialize> TriState<T> {
    /// Encodes this container as JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TriStateError::Decode`](crate::TriStateError::Decode) if the
    /// payload type fails to serialize.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl<T: DeserializeOwned> TriState<T> {
    /// Decodes a container from the raw JSON bytes of one field.
    ///
    /// The literal `null` yields `Null`; anything else must decode as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`TriStateError::Decode`](crate::TriStateError::Decode) if the
    /// bytes are malformed or do not match the payload type.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|err| {
            debug!(%err, "tri-state JSON decode failed");
            err.into()
        })
    }
}
