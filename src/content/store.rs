use super::model::{
    parse_date, FieldDefinition, FieldResolver, FieldType, FieldValue, Node, RawRecord, Row,
    TypeDefinition, ID_FIELD,
};
use super::query::{NodeQuery, Select, SortOrder};
use super::{ContentGraph, NodeError, QueryError, SchemaError};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace};
use uuid::Uuid;

/// In-memory content graph. Nodes keep their raw data; declared fields are
/// resolved on every query.
#[derive(Default)]
pub struct NodeStore {
    types: HashMap<String, TypeDefinition>,
    resolvers: HashMap<(String, String), FieldResolver>,
    nodes: Vec<Node>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self, type_name: &str) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.type_name == type_name)
            .count()
    }

    /// Validates `raw` against the registered type and stores it, returning the new node id.
    #[tracing::instrument(skip(self, raw))]
    pub fn create_node(&mut self, type_name: &str, raw: RawRecord) -> Result<String, NodeError> {
        let definition = self
            .types
            .get(type_name)
            .ok_or_else(|| NodeError::UnknownType(type_name.to_string()))?;

        for field in definition
            .fields
            .iter()
            .filter(|field| !field.resolved && field.name != ID_FIELD)
        {
            validate_raw_field(field, &raw)?;
        }

        let id = Uuid::new_v4().to_string();

        trace!("Created node {}", id);

        self.nodes.push(Node {
            id: id.clone(),
            type_name: type_name.to_string(),
            raw,
        });

        Ok(id)
    }

    fn run_query(&self, query: &NodeQuery) -> Result<Vec<Row>, QueryError> {
        let definition = self
            .types
            .get(&query.type_name)
            .ok_or_else(|| QueryError::UnknownType(query.type_name.clone()))?;

        let referenced_fields = query
            .select
            .iter()
            .map(Select::field_name)
            .chain(query.filter.iter().map(|(field, _)| field.as_str()))
            .chain(query.sort.iter().map(|sort| sort.field.as_str()));

        for field in referenced_fields {
            self.check_queryable(definition, field)?;
        }

        let mut matches = Vec::new();

        for node in self.nodes.iter().filter(|node| node.type_name == query.type_name) {
            if let Some((field, expected)) = &query.filter {
                if self.resolve(definition, node, field)?.as_ref() != Some(expected) {
                    continue;
                }
            }

            let sort_key = match &query.sort {
                Some(sort) => self.resolve(definition, node, &sort.field)?,
                None => None,
            };

            matches.push((sort_key, node));
        }

        if let Some(sort) = &query.sort {
            matches.sort_by(|(a, _), (b, _)| match sort.order {
                SortOrder::Asc => a.cmp(b),
                SortOrder::Desc => b.cmp(a),
            });
        }

        debug!("Query matched {} {} nodes", matches.len(), query.type_name);

        matches
            .into_iter()
            .map(|(_, node)| self.project(definition, node, &query.select))
            .collect()
    }

    fn check_queryable(&self, definition: &TypeDefinition, field: &str) -> Result<(), QueryError> {
        match definition.get_field(field) {
            Some(declared) if declared.resolved => {
                let key = (definition.name.clone(), declared.name.clone());

                if self.resolvers.contains_key(&key) {
                    Ok(())
                } else {
                    Err(QueryError::MissingResolver {
                        type_name: definition.name.clone(),
                        field: field.to_string(),
                    })
                }
            }
            Some(_) => Ok(()),
            None if definition.infer => Ok(()),
            None => Err(QueryError::UnknownField {
                type_name: definition.name.clone(),
                field: field.to_string(),
            }),
        }
    }

    fn resolve(
        &self,
        definition: &TypeDefinition,
        node: &Node,
        field: &str,
    ) -> Result<Option<FieldValue>, QueryError> {
        let Some(declared) = definition.get_field(field) else {
            return Ok(node.get_str(field).map(FieldValue::from));
        };

        if declared.name == ID_FIELD {
            return Ok(Some(FieldValue::String(node.id.clone())));
        }

        if declared.resolved {
            let resolver = self
                .resolvers
                .get(&(definition.name.clone(), declared.name.clone()))
                .ok_or_else(|| QueryError::MissingResolver {
                    type_name: definition.name.clone(),
                    field: field.to_string(),
                })?;

            return Ok(Some(resolver(node)));
        }

        let Some(raw) = node.get_str(declared.source_key()) else {
            return Ok(None);
        };

        match declared.field_type {
            FieldType::Date => parse_date(raw)
                .map(|date| Some(FieldValue::Date(date)))
                .ok_or_else(|| QueryError::InvalidValue {
                    node_id: node.id.clone(),
                    field: field.to_string(),
                }),
            FieldType::Id | FieldType::String => Ok(Some(FieldValue::from(raw))),
        }
    }

    fn project(
        &self,
        definition: &TypeDefinition,
        node: &Node,
        select: &[Select],
    ) -> Result<Row, QueryError> {
        let mut row = Row::new();

        for selected in select {
            let value = self.resolve(definition, node, selected.field_name())?;
            let format = match selected {
                Select::Date { format, .. } => Some(format.as_str()),
                Select::Field(_) => None,
            };

            row.insert(
                selected.field_name().to_string(),
                value.map_or(Value::Null, |value| value.to_json(format)),
            );
        }

        Ok(row)
    }
}

fn validate_raw_field(field: &FieldDefinition, raw: &RawRecord) -> Result<(), NodeError> {
    let value = match raw.get(field.source_key()) {
        None | Some(Value::Null) if field.required => {
            return Err(NodeError::MissingField {
                field: field.source_key().to_string(),
            })
        }
        None | Some(Value::Null) => return Ok(()),
        Some(Value::String(value)) => value,
        Some(other) => {
            return Err(NodeError::NotAString {
                field: field.source_key().to_string(),
                found: json_type_name(other).to_string(),
            })
        }
    };

    match field.field_type {
        FieldType::Date if parse_date(value).is_none() => Err(NodeError::InvalidDate {
            field: field.source_key().to_string(),
            value: value.clone(),
        }),
        FieldType::String if field.required && value.is_empty() => Err(NodeError::EmptyField {
            field: field.source_key().to_string(),
        }),
        _ => Ok(()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

impl ContentGraph for NodeStore {
    #[tracing::instrument(skip(self, definition), fields(type_name = %definition.name))]
    fn create_types(&mut self, definition: TypeDefinition) -> Result<(), SchemaError> {
        if self.types.contains_key(&definition.name) {
            return Err(SchemaError::DuplicateType(definition.name));
        }

        debug!(
            "Registering type with fields [{}]",
            itertools::join(&definition.fields, ", ")
        );

        self.types.insert(definition.name.clone(), definition);
        Ok(())
    }

    #[tracing::instrument(skip(self, resolver))]
    fn create_resolver(
        &mut self,
        type_name: &str,
        field: &str,
        resolver: FieldResolver,
    ) -> Result<(), SchemaError> {
        let definition = self
            .types
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownType(type_name.to_string()))?;

        match definition.get_field(field) {
            None => Err(SchemaError::UnknownField {
                type_name: type_name.to_string(),
                field: field.to_string(),
            }),
            Some(declared) if !declared.resolved => Err(SchemaError::NotResolved {
                type_name: type_name.to_string(),
                field: field.to_string(),
            }),
            Some(_) => {
                self.resolvers
                    .insert((type_name.to_string(), field.to_string()), resolver);
                Ok(())
            }
        }
    }

    #[tracing::instrument(skip(self, query), fields(type_name = %query.type_name))]
    async fn query(&self, query: &NodeQuery) -> Result<Vec<Row>, QueryError> {
        self.run_query(query)
    }
}
