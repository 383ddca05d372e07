//! # schemalens
//!
//! Spelling-tolerant table selection for relational schemas.
//!
//! Given a schema and a free-text query such as `"custmer orders"`, schemalens
//!
//! - corrects query words against a vocabulary derived from the schema's
//!   table names, column names and descriptions, backed by an English
//!   spelling dictionary
//! - scores every table by TF-IDF cosine similarity to the query and keeps
//!   those at or above a threshold
//!
//! ```
//! use schemalens::prelude::*;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "orders": {"columns": [{"name": "order_id", "type": "integer"}]},
//!     "users": {"columns": [{"name": "email", "type": "string"}]}
//! }"#).unwrap();
//!
//! let system = SchemaSystem::new().unwrap();
//! let result = system.process("orders", &schema).unwrap();
//! assert!(result.relevant_tables.contains_key("orders"));
//! assert!(!result.relevant_tables.contains_key("users"));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod relevance;
pub mod schema;
pub mod spelling;
pub mod system;
pub mod terminology;
pub mod variation;
pub mod vocabulary;

pub mod prelude {
    pub use crate::config::SystemConfig;
    pub use crate::error::{Result, SchemaLensError};
    pub use crate::relevance::{RelevantTables, TableRelevance};
    pub use crate::schema::{ColumnSchema, Schema, TableSchema};
    pub use crate::spelling::{Suggestion, SuggestionSource};
    pub use crate::system::{ProcessResult, SchemaSystem};
    pub use crate::variation::{QueryVariation, VariationLabel};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
