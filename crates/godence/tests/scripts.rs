//! Decoding script results delivered as JSON-Cadence documents.

use godence::{decode, decode_json, BigInt, DecodeError, Kind, Record, Value};
use std::collections::HashMap;

fn result(doc: &str) -> Value {
    decode_json(doc).unwrap()
}

#[derive(Debug, Default, Record)]
struct ManyTypes {
    #[godence(name = "intValue")]
    int_value: BigInt,
    #[godence(name = "int8Value")]
    int8_value: i8,
    #[godence(name = "int16Value")]
    int16_value: i16,
    #[godence(name = "int32Value")]
    int32_value: i32,
    #[godence(name = "int64Value")]
    int64_value: i64,
    #[godence(name = "int128Value")]
    int128_value: BigInt,
    #[godence(name = "int256Value")]
    int256_value: BigInt,
    #[godence(name = "uintValue")]
    uint_value: BigInt,
    #[godence(name = "uint8Value")]
    uint8_value: u8,
    #[godence(name = "uint16Value")]
    uint16_value: u16,
    #[godence(name = "uint32Value")]
    uint32_value: u32,
    #[godence(name = "uint64Value")]
    uint64_value: u64,
    #[godence(name = "uint128Value")]
    uint128_value: BigInt,
    #[godence(name = "uint256Value")]
    uint256_value: BigInt,
    #[godence(name = "stringValue")]
    string_value: String,
    #[godence(name = "addressValue")]
    address_value: [u8; 8],
    #[godence(name = "boolValue")]
    bool_value: bool,
}

fn number_field(name: &str, kind: &str) -> String {
    format!(r#"{{"name":"{name}","value":{{"type":"{kind}","value":"127"}}}}"#)
}

#[test]
fn test_struct_with_many_types() {
    let numbers = [
        ("intValue", "Int"),
        ("int8Value", "Int8"),
        ("int16Value", "Int16"),
        ("int32Value", "Int32"),
        ("int64Value", "Int64"),
        ("int128Value", "Int128"),
        ("int256Value", "Int256"),
        ("uintValue", "UInt"),
        ("uint8Value", "UInt8"),
        ("uint16Value", "UInt16"),
        ("uint32Value", "UInt32"),
        ("uint64Value", "UInt64"),
        ("uint128Value", "UInt128"),
        ("uint256Value", "UInt256"),
    ];
    let mut fields: Vec<String> = numbers
        .iter()
        .map(|(name, kind)| number_field(name, kind))
        .collect();
    fields.push(r#"{"name":"stringValue","value":{"type":"String","value":"LemonNeko"}}"#.into());
    fields.push(
        r#"{"name":"addressValue","value":{"type":"Address","value":"0x0000000000000001"}}"#.into(),
    );
    fields.push(r#"{"name":"boolValue","value":{"type":"Bool","value":true}}"#.into());
    let doc = format!(
        r#"{{"type":"Struct","value":{{"id":"s.0.StructContainsManyType","fields":[{}]}}}}"#,
        fields.join(",")
    );

    let mut dest = ManyTypes::default();
    decode(&result(&doc), &mut dest).unwrap();

    let n = BigInt::from(127u8);
    assert_eq!(dest.int_value, n);
    assert_eq!(dest.int8_value, 127);
    assert_eq!(dest.int16_value, 127);
    assert_eq!(dest.int32_value, 127);
    assert_eq!(dest.int64_value, 127);
    assert_eq!(dest.int128_value, n);
    assert_eq!(dest.int256_value, n);
    assert_eq!(dest.uint_value, n);
    assert_eq!(dest.uint8_value, 127);
    assert_eq!(dest.uint16_value, 127);
    assert_eq!(dest.uint32_value, 127);
    assert_eq!(dest.uint64_value, 127);
    assert_eq!(dest.uint128_value, n);
    assert_eq!(dest.uint256_value, n);
    assert_eq!(dest.string_value, "LemonNeko");
    assert_eq!(dest.address_value, [0, 0, 0, 0, 0, 0, 0, 1]);
    assert!(dest.bool_value);
}

#[derive(Debug, Default, Record)]
struct Simple {
    #[godence(name = "myName")]
    my_name: String,
}

#[derive(Debug, Default, Record)]
struct WrongName {
    #[godence(name = "none")]
    my_name: String,
}

const SIMPLE_STRUCT: &str = r#"{"type":"Struct","value":{
    "id":"s.b37650809c8bd4cb0827a55bc447099f8f8ac555ef5308bfc287f757557430ef.SimpleStruct",
    "fields":[{"name":"myName","value":{"type":"String","value":"LemonNeko"}}]
}}"#;

#[test]
fn test_struct_field_name_override() {
    let value = result(SIMPLE_STRUCT);
    assert_eq!(
        value.type_id(),
        "s.b37650809c8bd4cb0827a55bc447099f8f8ac555ef5308bfc287f757557430ef.SimpleStruct"
    );
    let mut dest = Simple::default();
    decode(&value, &mut dest).unwrap();
    assert_eq!(dest.my_name, "LemonNeko");
}

#[test]
fn test_struct_wrong_field_name() {
    let mut dest = WrongName::default();
    let err = decode(&result(SIMPLE_STRUCT), &mut dest).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot find field named none in cadence struct/event/resource"
    );
}

#[test]
fn test_struct_wrong_field_type() {
    let doc = r#"{"type":"Struct","value":{"id":"s.0.SimpleStruct",
        "fields":[{"name":"myName","value":{"type":"UInt8","value":"127"}}]}}"#;
    let mut dest = Simple::default();
    assert!(matches!(
        decode(&result(doc), &mut dest),
        Err(DecodeError::TypeMismatch { found: Kind::UInt8, .. })
    ));
}

#[test]
fn test_not_a_struct() {
    let mut dest = Simple::default();
    assert!(matches!(
        decode(&result(r#"{"type":"String","value":"LemonNeko"}"#), &mut dest),
        Err(DecodeError::TypeMismatch { found: Kind::String, .. })
    ));
}

#[derive(Debug, Default, Record)]
struct Embedded {
    inter: Simple,
}

#[test]
fn test_embedded_struct() {
    let doc = r#"{"type":"Struct","value":{"id":"s.0.EmbeddedStruct","fields":[
        {"name":"inter","value":{"type":"Struct","value":{"id":"s.0.Inter",
            "fields":[{"name":"myName","value":{"type":"String","value":"LemonNeko"}}]}}}
    ]}}"#;
    let mut dest = Embedded::default();
    decode(&result(doc), &mut dest).unwrap();
    assert_eq!(dest.inter.my_name, "LemonNeko");
}

#[test]
fn test_optional_results() {
    let mut dest: Option<i8> = None;
    decode(
        &result(r#"{"type":"Optional","value":{"type":"Int8","value":"15"}}"#),
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest, Some(15));

    let mut untouched = 7i8;
    decode(&result(r#"{"type":"Optional","value":null}"#), &mut untouched).unwrap();
    assert_eq!(untouched, 7);
}

#[test]
fn test_string_dictionary() {
    let doc = r#"{"type":"Dictionary","value":[
        {"key":{"type":"String","value":"MyName"},"value":{"type":"String","value":"LemonNeko"}}
    ]}"#;
    let mut dest: HashMap<String, String> = HashMap::new();
    decode(&result(doc), &mut dest).unwrap();
    assert_eq!(dest["MyName"], "LemonNeko");
}

#[test]
fn test_int64_dictionary() {
    let doc = r#"{"type":"Dictionary","value":[
        {"key":{"type":"Int64","value":"88"},"value":{"type":"Int64","value":"64"}}
    ]}"#;
    let mut dest: HashMap<i64, i64> = HashMap::new();
    decode(&result(doc), &mut dest).unwrap();
    assert_eq!(dest[&88], 64);
}

#[test]
fn test_dictionary_type_mismatch() {
    let doc = r#"{"type":"Dictionary","value":[
        {"key":{"type":"String","value":"MyName"},"value":{"type":"String","value":"LemonNeko"}}
    ]}"#;
    let mut dest: HashMap<u64, u64> = HashMap::new();
    assert!(matches!(
        decode(&result(doc), &mut dest),
        Err(DecodeError::TypeMismatch { found: Kind::String, .. })
    ));
}

#[test]
fn test_not_a_dictionary() {
    let mut dest: HashMap<String, String> = HashMap::new();
    assert!(matches!(
        decode(&result(r#"{"type":"String","value":"LemonNeko"}"#), &mut dest),
        Err(DecodeError::TypeMismatch { found: Kind::String, .. })
    ));
}

#[test]
fn test_array_of_strings() {
    let doc = r#"{"type":"Array","value":[
        {"type":"String","value":"a"},{"type":"String","value":"b"}
    ]}"#;
    let mut dest: Vec<String> = Vec::new();
    decode(&result(doc), &mut dest).unwrap();
    assert_eq!(dest, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_address_and_path_into_string() {
    let mut address = String::new();
    decode(
        &result(r#"{"type":"Address","value":"0x01234567"}"#),
        &mut address,
    )
    .unwrap();
    assert_eq!(address, "0x0000000001234567");

    let mut path = String::new();
    decode(
        &result(r#"{"type":"Path","value":{"domain":"public","identifier":"myCollection"}}"#),
        &mut path,
    )
    .unwrap();
    assert_eq!(path, "/public/myCollection");
}

#[test]
fn test_fix64_into_i64() {
    let mut dest = 0i64;
    decode(
        &result(r#"{"type":"Fix64","value":"127.00000000"}"#),
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest, 12_700_000_000);
}
