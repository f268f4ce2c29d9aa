//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the keiro
//! crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/flow.json")?;
//! let mut store = FlowStore::new();
//!
//! match import_flow(&json)? {
//!     ImportOutcome::Clean(document) => {
//!         store.load_document(document);
//!     }
//!     ImportOutcome::Flagged { document, errors } => {
//!         eprintln!("{} node(s) have validation issues", errors.len());
//!         // ... ask the user, then commit explicitly:
//!         store.load_document(document);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// State container and actions
pub use crate::store::{Action, FlowState, FlowStore, reduce};

// Data model
pub use crate::flow::{Edge, Node, NodePatch, generate_node_id};

// Validation
pub use crate::validate::{NodeIssues, reachability_warnings, validate_nodes};

// JSON interchange
pub use crate::codec::{FlowDocument, ImportOutcome, import_flow, parse_flow, serialize_flow};

// Persistence
pub use crate::persist::{FileSlotStore, MemorySlot, SlotStore};

// Error types
pub use crate::error::{ParseError, SlotError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
