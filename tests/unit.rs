//! Unit tests for the data model helpers and error types.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn generate_node_id_picks_the_smallest_free_slot() {
    let nodes = vec![
        node("node-1", "First"),
        node("node-3", "Third"),
        node("custom", "Named by hand"),
    ];
    assert_eq!(generate_node_id(&nodes), "node-2");
}

#[test]
fn generate_node_id_starts_at_one_for_an_empty_collection() {
    assert_eq!(generate_node_id(&[]), "node-1");
}

#[test]
fn can_connect_rejects_self_targets() {
    let source = node("a", "Source");
    assert!(!source.can_connect("a"));
}

#[test]
fn can_connect_rejects_duplicate_pairs() {
    let source = node_with_edges("a", "Source", &["b"]);
    assert!(!source.can_connect("b"));
    assert!(source.can_connect("c"));
}

#[test]
fn node_patch_builder_sets_only_what_was_asked() {
    let patch = NodePatch::new().description("Updated");
    assert_eq!(patch.description.as_deref(), Some("Updated"));
    assert_eq!(patch.id, None);
    assert_eq!(patch.prompt, None);
    assert_eq!(patch.edges, None);
}

#[test]
fn edge_constructors() {
    let plain = Edge::to("b");
    assert_eq!(plain.to_node_id, "b");
    assert_eq!(plain.condition, "");
    assert_eq!(plain.parameters, None);

    let guarded = Edge::when("b", "balance > 0");
    assert_eq!(guarded.condition, "balance > 0");
}

#[test]
fn parse_error_display() {
    let err = ParseError::Json("unexpected token".to_string());
    assert!(err.to_string().contains("unexpected token"));

    assert!(
        ParseError::EmptyNodes
            .to_string()
            .contains("non-empty nodes array")
    );
}

#[test]
fn slot_error_display_names_the_slot() {
    let err = SlotError::Corrupt {
        slot: "flows/session.json".to_string(),
        message: "trailing characters".to_string(),
    };
    assert!(err.to_string().contains("flows/session.json"));
    assert!(err.to_string().contains("trailing characters"));
}

#[test]
fn seeded_state_matches_the_default_session() {
    let state = FlowState::seeded();
    assert_eq!(state.nodes.len(), 1);
    assert_eq!(state.nodes[0].id, "node-1");
    assert_eq!(state.nodes[0].description, "Start node");
    assert_eq!(state.start_node_id.as_deref(), Some("node-1"));
    assert_eq!(state.selected_id.as_deref(), Some("node-1"));
}

#[test]
fn state_accessors_resolve_pointers() {
    let mut state = state_of(linear_flow());
    state.selected_id = Some("triage".to_string());

    assert!(state.contains("done"));
    assert!(!state.contains("ghost"));
    assert_eq!(state.start_node().unwrap().id, "intake");
    assert_eq!(state.selected_node().unwrap().id, "triage");
    assert!(state.is_start("intake"));
    assert!(!state.is_start("triage"));
}
