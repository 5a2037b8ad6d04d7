use super::*;

fn page(json: &str) -> PageDef {
    PageDef::from_reader(json.as_bytes()).unwrap()
}

#[test]
fn discovery_requires_marker_attribute() {
    let def = page(
        r#"{
            "containers": [
                { "id": "a", "attributes": { "data-carousel": "" }, "items": [{ "id": "x" }] },
                { "id": "b", "attributes": { "class": "gallery" } },
                { "id": "c", "attributes": { "data-carousel": "go" } }
            ]
        }"#,
    );
    let ids: Vec<&str> = def.discover().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn item_ids_report_initial_active() {
    let def = page(
        r#"{ "containers": [ { "id": "a", "attributes": { "data-carousel": "" },
              "items": [ { "id": "x" }, { "id": "y", "active": true } ] } ] }"#,
    );
    let (ids, active) = def.containers[0].item_ids().unwrap();
    assert_eq!(ids, vec![ItemId::from("x"), ItemId::from("y")]);
    assert_eq!(active, Some(1));
}

#[test]
fn two_active_items_are_rejected() {
    let def = page(
        r#"{ "containers": [ { "id": "a", "attributes": { "data-carousel": "" },
              "items": [ { "id": "x", "active": true }, { "id": "y", "active": true } ] } ] }"#,
    );
    let err = def.containers[0].item_ids().unwrap_err();
    assert!(err.to_string().contains("more than one active item"));
}

#[test]
fn duplicate_item_ids_are_rejected() {
    let def = page(
        r#"{ "containers": [ { "id": "a", "items": [ { "id": "x" }, { "id": "x" } ] } ] }"#,
    );
    assert!(def.containers[0].item_ids().is_err());
}

#[test]
fn options_errors_name_the_container() {
    let def = page(
        r#"{ "containers": [ { "id": "hero", "attributes": { "data-carousel": "", "data-speed": "soon" } } ] }"#,
    );
    let err = def.containers[0].options().unwrap_err();
    assert!(err.to_string().contains("container 'hero'"));
}

#[test]
fn script_parses_actions_and_inputs() {
    let def = page(
        r#"{
            "containers": [ { "id": "a", "attributes": { "data-carousel": "" } } ],
            "script": [
                { "at": 10, "container": "a", "action": "next" },
                { "at": 20, "container": "a", "action": { "go_to": 2 } },
                { "at": 30, "container": "a", "action": { "input": { "key_down": "left" } } },
                { "at": 40, "container": "a", "action": { "input": "click" } }
            ]
        }"#,
    );
    assert!(def.validate().is_ok());
    let actions: Vec<&Action> = def.script.iter().map(|s| &s.action).collect();
    assert_eq!(actions[0], &Action::Next);
    assert_eq!(actions[1], &Action::GoTo(2));
    assert_eq!(
        actions[2],
        &Action::Input(InputEvent::KeyDown(crate::session::interaction::Key::ArrowLeft))
    );
    assert_eq!(actions[3], &Action::Input(InputEvent::Click));
    assert_eq!(def.script[1].at, Millis(20));
}

#[test]
fn validate_rejects_unknown_script_targets_and_duplicate_ids() {
    let def = page(
        r#"{
            "containers": [ { "id": "a", "attributes": {} } ],
            "script": [ { "at": 0, "container": "a", "action": "next" } ]
        }"#,
    );
    assert!(def.validate().is_err(), "a is not a carousel");

    let def = page(r#"{ "containers": [ { "id": "a" }, { "id": "a" } ] }"#);
    assert!(def.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PageDef::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, CarouselError::Serde(_)));
}
