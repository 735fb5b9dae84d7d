//! Schema configuration parsing.

use scrub_model::{BIRTHDAY, FieldSchema, HOME_ANNIVERSARY, ModelError};

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let schema: FieldSchema = toml::from_str(
        r#"
mandatory = ["First Name", "Last Name"]
"#,
    )
    .unwrap();

    assert_eq!(schema.mandatory, vec!["First Name", "Last Name"]);
    assert_eq!(schema.at_least_one, vec![BIRTHDAY, HOME_ANNIVERSARY]);
    assert_eq!(schema.output_order.len(), 10);
    assert!(schema.validate().is_ok());
}

#[test]
fn test_custom_schema_round_trips() {
    let schema = FieldSchema {
        output_order: vec!["Name".into(), "Email".into(), "Phone".into()],
        mandatory: vec!["Name".into()],
        at_least_one: vec!["Email".into(), "Phone".into()],
        display_name: vec!["Name".into()],
    };
    let text = toml::to_string(&schema).unwrap();
    let parsed: FieldSchema = toml::from_str(&text).unwrap();
    assert_eq!(parsed, schema);
}

#[test]
fn test_invalid_schema_from_toml() {
    let schema: FieldSchema = toml::from_str(
        r#"
output_order = ["Name", "Name"]
"#,
    )
    .unwrap();

    assert!(matches!(
        schema.validate(),
        Err(ModelError::DuplicateField { list: "output_order", .. })
    ));
}
