//! Alignment scenarios through the public API, one per documented case.

use caldiff_diff::{ChangeKind, ComponentWrapper, Entity, SkipSet};
use caldiff_types::{Component, Parameter, Property, QualifiedName, Value};

fn name(local: &str) -> QualifiedName {
    QualifiedName::local(local)
}

fn prop(local: &str, value: &str) -> Property {
    Property::new(name(local), value)
}

fn props(list: Vec<Property>) -> ComponentWrapper {
    let raw = list
        .into_iter()
        .fold(Component::new(name("vevent")), Component::with_property);
    ComponentWrapper::wrap(&raw, &SkipSet::empty())
        .unwrap()
        .unwrap()
}

fn kinds(left: &ComponentWrapper, right: &ComponentWrapper) -> Vec<(ChangeKind, String, Value)> {
    left.diff(right)
        .unwrap()
        .iter()
        .map(|c| {
            let leaf = c.subject.as_leaf().unwrap();
            (c.kind, leaf.name().local_name().to_string(), leaf.value().clone())
        })
        .collect()
}

#[test]
fn pure_addition_on_the_right() {
    let left = props(vec![prop("aaa", ""), prop("ccc", "")]);
    let right = props(vec![prop("aaa", ""), prop("bbb", ""), prop("ccc", "")]);
    assert_eq!(
        kinds(&left, &right),
        [(ChangeKind::Delete, "bbb".to_string(), Value::text(""))]
    );
}

#[test]
fn pure_deletion_on_the_right() {
    let left = props(vec![prop("aaa", ""), prop("bbb", ""), prop("ccc", "")]);
    let right = props(vec![prop("aaa", ""), prop("ccc", "")]);
    assert_eq!(
        kinds(&left, &right),
        [(ChangeKind::Add, "bbb".to_string(), Value::text(""))]
    );
}

#[test]
fn value_change_with_lookahead_room_is_a_replace_pair() {
    let left = props(vec![prop("aaa", "v1"), prop("bbb", "v2"), prop("ccc", "")]);
    let right = props(vec![prop("aaa", "v1"), prop("bbb", "v3"), prop("ccc", "")]);
    assert_eq!(
        kinds(&left, &right),
        [
            (ChangeKind::Delete, "bbb".to_string(), Value::text("v3")),
            (ChangeKind::Add, "bbb".to_string(), Value::text("v2")),
        ]
    );
}

#[test]
fn parameter_only_change_is_a_nested_update() {
    let with_p = |p: &str| prop("aaa", "v1").with_parameter(Parameter::new(name("p"), p));
    let left = props(vec![with_p("1"), prop("ccc", "")]);
    let right = props(vec![with_p("2"), prop("ccc", "")]);

    let changes = left.diff(&right).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Update);
    assert_eq!(changes[0].name(), &name("aaa"));

    let nested = &changes[0].nested;
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].kind, ChangeKind::Update);
    assert_eq!(nested[0].name(), &name("p"));
    assert_eq!(nested[0].subject.as_leaf().unwrap().value(), &Value::text("1"));
    assert_eq!(
        nested[0].previous.as_ref().unwrap().as_leaf().unwrap().value(),
        &Value::text("2")
    );
}

#[test]
fn single_elements_force_an_update() {
    let left = props(vec![prop("aaa", "v1")]);
    let right = props(vec![prop("aaa", "v2")]);

    let changes = left.diff(&right).unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeKind::Update);
    assert!(changes[0].nested.is_empty());
    assert_eq!(
        changes[0].previous.as_ref().map(|p| p.name().clone()),
        Some(name("aaa"))
    );
}
