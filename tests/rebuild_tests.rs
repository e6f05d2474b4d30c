use autoargs::{rebuild, resolve_sub_codecs, CodecError, RouteArgs, SubCodecRegistry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    nickname: String,
    age: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, RouteArgs)]
struct UserArgs {
    id: i32,
    name: String,
    profile: Option<Profile>,
}

fn values(entries: &[(&str, Value)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_rebuild_from_full_map() {
    let map = values(&[
        ("id", json!(7)),
        ("name", json!("Fedja")),
        ("profile", json!({"nickname": "fedja", "age": 30})),
    ]);
    let user: UserArgs = rebuild(&map).unwrap();
    assert_eq!(
        user,
        UserArgs {
            id: 7,
            name: "Fedja".to_string(),
            profile: Some(Profile {
                nickname: "fedja".to_string(),
                age: 30,
            }),
        }
    );
}

#[test]
fn test_missing_optional_field_becomes_none() {
    let map = values(&[("id", json!(7)), ("name", json!("Fedja"))]);
    let user: UserArgs = rebuild(&map).unwrap();
    assert_eq!(user.profile, None);
}

#[test]
fn test_missing_required_field_is_an_assembly_error() {
    let map = values(&[("id", json!(7))]);
    let err = rebuild::<UserArgs>(&map).unwrap_err();
    assert!(matches!(err, CodecError::Assembly(_)));
}

#[test]
fn test_mistyped_value_is_an_assembly_error() {
    let map = values(&[("id", json!("not-an-int")), ("name", json!("x"))]);
    let err = rebuild::<UserArgs>(&map).unwrap_err();
    assert!(matches!(err, CodecError::Assembly(_)));
}

#[test]
fn test_resolver_covers_primitives_without_registration() {
    let resolved = resolve_sub_codecs(UserArgs::field_descriptors(), &SubCodecRegistry::new());
    assert!(resolved.contains_key("id"));
    assert!(resolved.contains_key("name"));
    assert!(!resolved.contains_key("profile"));
}

#[test]
fn test_resolver_picks_up_registered_complex_codec() {
    let mut registry = SubCodecRegistry::new();
    registry.register::<Profile>("profile");
    let resolved = resolve_sub_codecs(UserArgs::field_descriptors(), &registry);
    assert!(resolved.contains_key("profile"));

    let wire = resolved["profile"]
        .encode("profile", &json!({"nickname": "fedja", "age": 30}))
        .unwrap();
    let back = resolved["profile"].decode("profile", &wire).unwrap();
    assert_eq!(back, json!({"nickname": "fedja", "age": 30}));
}
