use autoargs::{CodecError, CodecMode, RouteArgs, RouteDescriptor, WireValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod common;

#[derive(Debug, PartialEq, Serialize, Deserialize, RouteArgs)]
struct DetailsArgs {
    id: i32,
    name: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    nickname: String,
    age: i32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, RouteArgs)]
struct UserArgs {
    id: i32,
    profile: Option<Profile>,
}

#[test]
fn test_template_lists_every_field_as_a_placeholder() {
    let destination = RouteDescriptor::<DetailsArgs>::new("details");
    assert_eq!(destination.template(), "details?id={id}&name={name}");
}

#[test]
fn test_template_is_computed_once() {
    let destination = RouteDescriptor::<DetailsArgs>::new("details");
    let first = destination.template() as *const str;
    let second = destination.template() as *const str;
    assert_eq!(first, second);
}

#[test]
fn test_template_first_access_is_safe_under_contention() {
    let destination = RouteDescriptor::<DetailsArgs>::new("details");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| destination.template().to_string()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "details?id={id}&name={name}");
        }
    });
}

#[test]
fn test_flat_round_trip() {
    let destination = RouteDescriptor::<DetailsArgs>::new("details").with_mode(CodecMode::Strict);
    let args = DetailsArgs {
        id: 7,
        name: "Hello World".to_string(),
    };
    let route = destination.build_route(&args).unwrap();
    assert_eq!(route, "details?id=7&name=Hello World");
    let decoded: DetailsArgs = destination.parse_route(&route).unwrap();
    assert_eq!(decoded, args);
}

#[test]
fn test_complex_field_round_trips_through_its_sub_codec() {
    let destination = RouteDescriptor::<UserArgs>::new("user")
        .with_mode(CodecMode::Strict)
        .with_sub_codec::<Profile>("profile");
    let args = UserArgs {
        id: 1,
        profile: Some(Profile {
            nickname: "fedja".to_string(),
            age: 30,
        }),
    };
    let route = destination.build_route(&args).unwrap();
    // Nested JSON must ride fully escaped.
    assert!(!route.contains('{') && !route.contains('}'));
    assert_eq!(route.matches('=').count(), 2);
    let decoded: UserArgs = destination.parse_route(&route).unwrap();
    assert_eq!(decoded, args);
}

#[test]
fn test_absent_optional_nested_record_is_omitted_and_comes_back_none() {
    let destination = RouteDescriptor::<UserArgs>::new("user")
        .with_mode(CodecMode::Strict)
        .with_sub_codec::<Profile>("profile");
    let args = UserArgs {
        id: 2,
        profile: None,
    };
    let route = destination.build_route(&args).unwrap();
    assert_eq!(route, "user?id=2");
    let decoded: UserArgs = destination.parse_route(&route).unwrap();
    assert_eq!(decoded, args);
}

#[test]
fn test_unregistered_complex_field_is_omitted_from_routes() {
    let destination = RouteDescriptor::<UserArgs>::new("user").with_mode(CodecMode::Strict);
    let args = UserArgs {
        id: 3,
        profile: Some(Profile {
            nickname: "x".to_string(),
            age: 1,
        }),
    };
    let route = destination.build_route(&args).unwrap();
    assert_eq!(route, "user?id=3");
    let decoded: UserArgs = destination.parse_route(&route).unwrap();
    assert_eq!(decoded.profile, None);
}

#[test]
fn test_bind_reads_a_typed_store() {
    let destination = RouteDescriptor::<DetailsArgs>::new("details").with_mode(CodecMode::Strict);
    let mut store: HashMap<String, WireValue> = HashMap::new();
    store.insert("id".to_string(), WireValue::Int(7));
    store.insert("name".to_string(), WireValue::Str("Fedja".into()));
    let decoded: DetailsArgs = destination.bind(&store).unwrap();
    assert_eq!(
        decoded,
        DetailsArgs {
            id: 7,
            name: "Fedja".to_string(),
        }
    );
}

#[test]
fn test_bind_complex_decodes_nested_fields() {
    let destination = RouteDescriptor::<UserArgs>::new("user")
        .with_mode(CodecMode::Strict)
        .with_sub_codec::<Profile>("profile");
    let wire_profile = autoargs::escape("{\"nickname\":\"fedja\",\"age\":30}");
    let mut store: HashMap<String, WireValue> = HashMap::new();
    store.insert("id".to_string(), WireValue::Int(1));
    store.insert("profile".to_string(), WireValue::Str(wire_profile));
    let decoded: UserArgs = destination.bind_complex(&store).unwrap();
    assert_eq!(
        decoded,
        UserArgs {
            id: 1,
            profile: Some(Profile {
                nickname: "fedja".to_string(),
                age: 30,
            }),
        }
    );
}

#[test]
fn test_bind_complex_treats_blank_nested_value_as_none() {
    let destination = RouteDescriptor::<UserArgs>::new("user")
        .with_mode(CodecMode::Strict)
        .with_sub_codec::<Profile>("profile");
    let mut store: HashMap<String, WireValue> = HashMap::new();
    store.insert("id".to_string(), WireValue::Int(1));
    store.insert("profile".to_string(), WireValue::Str(String::new()));
    let decoded: UserArgs = destination.bind_complex(&store).unwrap();
    assert_eq!(decoded.profile, None);
}

#[test]
fn test_bind_complex_strict_rejects_undecodable_data() {
    let destination = RouteDescriptor::<UserArgs>::new("user").with_mode(CodecMode::Strict);
    let mut store: HashMap<String, WireValue> = HashMap::new();
    store.insert("id".to_string(), WireValue::Int(1));
    store.insert(
        "profile".to_string(),
        WireValue::Str("opaque".to_string()),
    );
    let err = destination.bind_complex(&store).unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedField { .. }));
}

#[test]
fn test_bind_complex_lenient_skips_undecodable_data() {
    common::init_tracing();
    let destination = RouteDescriptor::<UserArgs>::new("user").with_mode(CodecMode::Lenient);
    let mut store: HashMap<String, WireValue> = HashMap::new();
    store.insert("id".to_string(), WireValue::Int(1));
    store.insert(
        "profile".to_string(),
        WireValue::Str("opaque".to_string()),
    );
    let decoded: UserArgs = destination.bind_complex(&store).unwrap();
    assert_eq!(decoded.profile, None);
}

#[test]
fn test_with_mode_overrides_the_environment_policy() {
    let strict = RouteDescriptor::<DetailsArgs>::new("details").with_mode(CodecMode::Strict);
    let lenient = RouteDescriptor::<DetailsArgs>::new("details").with_mode(CodecMode::Lenient);
    assert_eq!(strict.mode(), CodecMode::Strict);
    assert_eq!(lenient.mode(), CodecMode::Lenient);

    assert!(strict.parse_route("details?id=abc").is_err());
    let decoded: DetailsArgs = lenient.parse_route("details?id=abc").unwrap();
    assert_eq!(decoded.id, 0);
}
