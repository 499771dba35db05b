use crate::errors::ModelError;
use crate::menu_item::{validate_input, MenuItemInput, UpdateMenuItem};

fn valid_input() -> MenuItemInput {
    MenuItemInput {
        name: "Caesar Salad".into(),
        description: None,
        price: 8.75,
        category: "Salad".into(),
        dietary_tag: None,
    }
}

fn violations(input: &MenuItemInput) -> Vec<String> {
    match validate_input(input) {
        Err(ModelError::Validation(v)) => v,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn accepts_a_valid_payload() {
    assert!(validate_input(&valid_input()).is_ok());
}

#[test]
fn rejects_empty_name_and_nonpositive_price_together() {
    let mut input = valid_input();
    input.name = "   ".into();
    input.price = -1.0;
    let v = violations(&input);
    assert_eq!(v.len(), 2);
    assert!(v[0].contains("name"));
    assert!(v[1].contains("price"));
}

#[test]
fn rejects_zero_price() {
    let mut input = valid_input();
    input.price = 0.0;
    assert!(violations(&input)[0].contains("price"));
}

#[test]
fn rejects_oversized_fields() {
    let mut input = valid_input();
    input.name = "x".repeat(101);
    input.description = Some("y".repeat(501));
    input.category = "z".repeat(51);
    input.dietary_tag = Some("w".repeat(101));
    assert_eq!(violations(&input).len(), 4);
}

#[test]
fn length_limits_count_characters_not_bytes() {
    let mut input = valid_input();
    // 100 multibyte characters are within the name limit
    input.name = "é".repeat(100);
    assert!(validate_input(&input).is_ok());
}

#[test]
fn missing_fields_deserialize_to_rejectable_defaults() {
    let input: MenuItemInput = serde_json::from_str("{}").unwrap();
    let v = violations(&input);
    assert!(v.iter().any(|m| m.contains("name")));
    assert!(v.iter().any(|m| m.contains("price")));
    assert!(v.iter().any(|m| m.contains("category")));
}

#[test]
fn json_field_names_are_camel_case() {
    let json = r#"{"id": 7, "name": "Lentil Soup", "price": 6.5, "category": "Soup", "dietaryTag": "Vegan"}"#;
    let payload: UpdateMenuItem = serde_json::from_str(json).unwrap();
    assert_eq!(payload.id, 7);
    assert_eq!(payload.fields.dietary_tag.as_deref(), Some("Vegan"));

    let back = serde_json::to_value(&payload).unwrap();
    assert!(back.get("dietaryTag").is_some());
    assert!(back.get("dietary_tag").is_none());
}
