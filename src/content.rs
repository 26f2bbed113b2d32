pub mod model;
pub mod query;
pub mod store;

use model::{FieldResolver, Row, TypeDefinition};
use query::NodeQuery;

/// The queryable store the theme builds against: type registration, resolver
/// attachment and node queries.
#[allow(async_fn_in_trait)]
pub trait ContentGraph {
    fn create_types(&mut self, definition: TypeDefinition) -> Result<(), SchemaError>;

    fn create_resolver(
        &mut self,
        type_name: &str,
        field: &str,
        resolver: FieldResolver,
    ) -> Result<(), SchemaError>;

    async fn query(&self, query: &NodeQuery) -> Result<Vec<Row>, QueryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Type '{0}' is already defined")]
    DuplicateType(String),
    #[error("Type '{0}' is not defined")]
    UnknownType(String),
    #[error("Field '{field}' is not declared on type '{type_name}'")]
    UnknownField { type_name: String, field: String },
    #[error("Field '{type_name}.{field}' is not declared as resolved")]
    NotResolved { type_name: String, field: String },
}

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Type '{0}' is not defined")]
    UnknownType(String),
    #[error("Missing required field '{field}'")]
    MissingField { field: String },
    #[error("Required field '{field}' is empty")]
    EmptyField { field: String },
    #[error("Field '{field}' must be a string, found {found}")]
    NotAString { field: String, found: String },
    #[error("Field '{field}' has an invalid date '{value}'")]
    InvalidDate { field: String, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Type '{0}' is not defined")]
    UnknownType(String),
    #[error("Cannot query field '{field}' on type '{type_name}'")]
    UnknownField { type_name: String, field: String },
    #[error("No resolver attached to '{type_name}.{field}'")]
    MissingResolver { type_name: String, field: String },
    #[error("Node '{node_id}' has an invalid value for '{field}'")]
    InvalidValue { node_id: String, field: String },
}
