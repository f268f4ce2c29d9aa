//! # Keiro - Flow Definition Editing Engine
//!
//! **Keiro** is a graph-state engine for building, validating and persisting
//! directed flow definitions: nodes carrying prompts and descriptions,
//! connected by labeled edges. It is the core of a visual flow editor with
//! the visuals left out — a host UI renders the state and dispatches edits;
//! Keiro owns the state, keeps the graph consistent and derives the error
//! and warning sets the host displays.
//!
//! ## Core Workflow
//!
//! 1.  **Own the state**: create a [`store::FlowStore`] — seeded with a
//!     default start node, or backed by a [`persist::SlotStore`] so the last
//!     session's collection is picked up again.
//! 2.  **Edit**: dispatch [`store::Action`] values. Every transition is a
//!     pure, total function from state to state; deletes cascade dangling
//!     edges away and renames rewrite the adjacency graph in the same step.
//! 3.  **Validate**: re-derive structural errors and reachability warnings
//!     from the new state with [`validate::validate_nodes`] and
//!     [`validate::reachability_warnings`] (or the store's convenience
//!     methods).
//! 4.  **Exchange**: move whole flows in and out as JSON with
//!     [`codec::parse_flow`] / [`codec::serialize_flow`], or through the
//!     two-phase [`codec::import_flow`] when untrusted input needs a
//!     validate-then-confirm step.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A fresh session starts with one default start node.
//!     let mut store = FlowStore::new();
//!
//!     // Grow the graph through structural actions.
//!     let id = generate_node_id(&store.state().nodes);
//!     store.dispatch(Action::AddNode(Node::new(id.clone(), "Ask for the order")));
//!     store.dispatch(Action::UpdateNode {
//!         id: "node-1".to_string(),
//!         patch: NodePatch::new().edges(vec![Edge::when(id, "user is ready")]),
//!     });
//!
//!     // Validation is re-derived from the new state.
//!     assert!(store.errors().is_empty());
//!     assert!(store.warnings().is_empty());
//!
//!     // Export the canonical document form and read it back.
//!     let json = store.export()?;
//!     let document = parse_flow(&json)?;
//!     assert_eq!(document.nodes.len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod flow;
pub mod persist;
pub mod prelude;
pub mod store;
pub mod validate;
