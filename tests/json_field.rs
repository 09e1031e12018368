//! Struct-level JSON behavior: absent keys, explicit nulls, and values.

mod common;

use serde::{Deserialize, Serialize};
use tristate::TriState;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct UserPatch {
    id: i64,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    nickname: TriState<String>,
    #[serde(default, skip_serializing_if = "TriState::is_absent")]
    age: TriState<i64>,
}

#[test]
fn missing_key_deserializes_as_absent() {
    common::init_test_logging();
    let patch: UserPatch = serde_json::from_str(r#"{"id":1}"#).unwrap();
    assert!(patch.nickname.is_absent());
    assert!(patch.age.is_absent());
    assert!(!patch.age.is_valid());
}

#[test]
fn explicit_null_deserializes_as_null() {
    common::init_test_logging();
    let patch: UserPatch = serde_json::from_str(r#"{"id":1,"age":null}"#).unwrap();
    assert!(patch.age.is_null());
    assert!(patch.age.is_valid());
    assert!(patch.nickname.is_absent());
}

#[test]
fn value_deserializes_as_present() {
    common::init_test_logging();
    let patch: UserPatch = serde_json::from_str(r#"{"id":1,"nickname":"ada","age":42}"#).unwrap();
    assert_eq!(patch.nickname, TriState::Value("ada".to_string()));
    assert_eq!(patch.age, TriState::Value(42));
}

#[test]
fn absent_fields_are_omitted_on_reserialization() {
    common::init_test_logging();
    let patch = UserPatch {
        id: 1,
        nickname: TriState::Absent,
        age: TriState::Null,
    };
    assert_eq!(
        serde_json::to_string(&patch).unwrap(),
        r#"{"id":1,"age":null}"#
    );
}

#[test]
fn three_state_struct_round_trip() {
    common::init_test_logging();
    let original = UserPatch {
        id: 7,
        nickname: TriState::Value("grace".to_string()),
        age: TriState::Null,
    };
    let bytes = serde_json::to_vec(&original).unwrap();
    let decoded: UserPatch = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(decoded, original);
}

/// A payload type whose deserializer always fails, to prove `null` short-circuits.
#[derive(Debug, PartialEq)]
struct Untouchable;

impl<'de> Deserialize<'de> for Untouchable {
    fn deserialize<D: serde::Deserializer<'de>>(_: D) -> Result<Self, D::Error> {
        Err(serde::de::Error::custom("payload deserializer was invoked"))
    }
}

#[test]
fn null_never_invokes_the_payload_deserializer() {
    common::init_test_logging();
    let v = TriState::<Untouchable>::from_json(b"null").unwrap();
    assert_eq!(v, TriState::Null);
}

#[test]
fn type_mismatch_propagates_and_container_is_discarded() {
    common::init_test_logging();
    let err = TriState::<i64>::from_json(b"[1,2]").unwrap_err();
    assert!(matches!(err, tristate::TriStateError::Decode(_)));

    let err = serde_json::from_str::<UserPatch>(r#"{"id":1,"age":"old"}"#).unwrap_err();
    assert!(err.to_string().contains("age") || err.is_data());
}
