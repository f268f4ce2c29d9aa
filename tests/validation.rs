//! Structural error and reachability warning tests.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn blank_id_is_reported() {
    let nodes = vec![node("", "Described")];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].node_id, "");
    assert_eq!(errors[0].messages, vec!["ID is required"]);
}

#[test]
fn whitespace_only_id_counts_as_blank() {
    let nodes = vec![node("   ", "Described")];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].messages, vec!["ID is required"]);
}

#[test]
fn duplicate_ids_flag_every_sharer() {
    let nodes = vec![
        node("a", "First"),
        node("b", "Between"),
        node("a", "Second"),
    ];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 2);
    for entry in &errors {
        assert_eq!(entry.node_id, "a");
        assert_eq!(entry.messages, vec!["ID must be unique"]);
    }
}

#[test]
fn blank_ids_are_not_additionally_flagged_as_duplicates() {
    let nodes = vec![node("", "First"), node("", "Second")];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 2);
    for entry in &errors {
        assert_eq!(entry.messages, vec!["ID is required"]);
    }
}

#[test]
fn blank_description_is_reported() {
    let nodes = vec![node("a", "")];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].messages, vec!["Description is required"]);
}

#[test]
fn messages_accumulate_per_node_in_check_order() {
    let nodes = vec![node("", "")];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].messages,
        vec!["ID is required", "Description is required"]
    );
}

#[test]
fn error_entries_preserve_node_order() {
    let nodes = vec![
        node("z", ""),
        node("ok", "Fine"),
        node("", "Also broken"),
    ];
    let errors = validate_nodes(&nodes);

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].node_id, "z");
    assert_eq!(errors[1].node_id, "");
}

#[test]
fn valid_collection_produces_no_errors() {
    assert!(validate_nodes(&linear_flow()).is_empty());
}

#[test]
fn orphan_node_gets_exactly_one_warning() {
    let nodes = flow_with_orphan();
    let warnings = reachability_warnings(&nodes, Some("start"));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].node_id, "island");
    assert_eq!(
        warnings[0].messages,
        vec!["Not reachable from the start node"]
    );
}

#[test]
fn fully_connected_flow_warns_nothing() {
    assert!(reachability_warnings(&linear_flow(), Some("intake")).is_empty());
}

#[test]
fn single_node_collection_warns_nothing() {
    let nodes = vec![node("only", "Lonely")];
    assert!(reachability_warnings(&nodes, Some("only")).is_empty());
}

#[test]
fn empty_collection_warns_nothing() {
    assert!(reachability_warnings(&[], None).is_empty());
}

#[test]
fn dangling_edge_targets_are_skipped_not_followed() {
    let nodes = vec![
        node_with_edges("start", "Greet", &["ghost", "next"]),
        node("next", "Continue"),
    ];
    assert!(reachability_warnings(&nodes, Some("start")).is_empty());
}

#[test]
fn traversal_terminates_on_cycles() {
    let nodes = vec![
        node_with_edges("a", "First", &["b"]),
        node_with_edges("b", "Second", &["a"]),
        node("c", "Adrift"),
    ];
    let warnings = reachability_warnings(&nodes, Some("a"));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].node_id, "c");
}

#[test]
fn explicit_start_pointer_is_honored() {
    let nodes = vec![
        node_with_edges("a", "First", &["b"]),
        node("b", "Second"),
        node_with_edges("c", "Third", &["a"]),
    ];

    // From "c" everything is reachable; from the default first node, "c"
    // would be adrift.
    assert!(reachability_warnings(&nodes, Some("c")).is_empty());
    assert_eq!(reachability_warnings(&nodes, None).len(), 1);
}

#[test]
fn dangling_start_pointer_falls_back_to_the_first_node() {
    let nodes = flow_with_orphan();
    let warnings = reachability_warnings(&nodes, Some("ghost"));

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].node_id, "island");
}

#[test]
fn start_node_is_exempt_even_when_nothing_points_at_it() {
    let nodes = vec![
        node("start", "Entry, no inbound"),
        node_with_edges("a", "Points elsewhere", &["start"]),
    ];
    let warnings = reachability_warnings(&nodes, Some("start"));

    // "a" is unreached; "start" itself never warns.
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].node_id, "a");
}
