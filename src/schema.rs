//! Relational schema documents.
//!
//! A schema maps table names to table descriptors, each an ordered list of
//! column descriptors. Table order follows the source document. Fields that
//! this crate does not interpret are kept and written back out unchanged.
//!
//! Every [`Schema`] value carries an identity. Cached state derived from a
//! schema (its vocabulary) is keyed by that identity rather than by content:
//! mutating a schema in place keeps its identity, while cloning or loading
//! produces a new one.
//!
//! ```
//! use schemalens::schema::Schema;
//!
//! let schema = Schema::from_json_str(r#"{
//!     "users": {"columns": [{"name": "user_id", "type": "integer"}]}
//! }"#).unwrap();
//!
//! let users = schema.table("users").unwrap();
//! assert_eq!(users.columns[0].name, "user_id");
//! assert_eq!(users.columns[0].column_type.as_deref(), Some("integer"));
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use crate::config::is_yaml_path;
use crate::error::{Result, SchemaLensError};

/// A column descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name; empty when the document omits it.
    #[serde(default)]
    pub name: String,

    /// Declared column type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub column_type: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any other fields present in the document.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ColumnSchema {
    /// Create a column with a name and type.
    pub fn new<N: Into<String>, T: Into<String>>(name: N, column_type: T) -> Self {
        ColumnSchema {
            name: name.into(),
            column_type: Some(column_type.into()),
            ..Default::default()
        }
    }

    /// Attach a description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A table descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Columns in declaration order; empty when the document omits them.
    #[serde(default)]
    pub columns: Vec<ColumnSchema>,

    /// Any other fields present in the document.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl TableSchema {
    /// Create a table from its columns.
    pub fn new(columns: Vec<ColumnSchema>) -> Self {
        TableSchema {
            columns,
            extra: IndexMap::new(),
        }
    }

    /// The whitespace-joined, lowercased text describing this table: the
    /// table name, then each column name followed by its description.
    pub fn context_text(&self, table_name: &str) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(1 + self.columns.len() * 2);
        parts.push(table_name);
        for column in &self.columns {
            parts.push(&column.name);
            if let Some(description) = &column.description {
                parts.push(description);
            }
        }
        parts.join(" ").to_lowercase()
    }
}

/// A relational schema: table name to table descriptor, in document order.
#[derive(Debug)]
pub struct Schema {
    id: Uuid,
    tables: IndexMap<String, TableSchema>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::from_tables(IndexMap::new())
    }

    /// Create a schema from an ordered table map.
    pub fn from_tables(tables: IndexMap<String, TableSchema>) -> Self {
        Schema {
            id: Uuid::new_v4(),
            tables,
        }
    }

    /// Builder-style table insertion.
    pub fn with_table<S: Into<String>>(mut self, name: S, table: TableSchema) -> Self {
        self.tables.insert(name.into(), table);
        self
    }

    /// Insert or replace a table. The schema keeps its identity.
    pub fn insert_table<S: Into<String>>(&mut self, name: S, table: TableSchema) {
        self.tables.insert(name.into(), table);
    }

    /// Identity of this schema value.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    /// Iterate over tables in document order.
    pub fn tables(&self) -> impl Iterator<Item = (&String, &TableSchema)> {
        self.tables.iter()
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check whether the schema has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Parse a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| SchemaLensError::schema(e.to_string()))
    }

    /// Parse a schema from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| SchemaLensError::schema(e.to_string()))
    }

    /// Load a schema file. `.yaml` and `.yml` files are read as YAML,
    /// everything else as JSON.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        if is_yaml_path(path) {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Schema {
    fn clone(&self) -> Self {
        Self::from_tables(self.tables.clone())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.tables.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IndexMap::<String, TableSchema>::deserialize(deserializer).map(Schema::from_tables)
    }
}
