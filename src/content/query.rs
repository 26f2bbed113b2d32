use super::model::{FieldValue, ID_FIELD};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Select {
    Field(String),
    /// Date field rendered with a chrono format string
    Date { field: String, format: String },
}

impl Select {
    pub fn field_name(&self) -> &str {
        match self {
            Select::Field(field) => field,
            Select::Date { field, .. } => field,
        }
    }
}

/// Lookup over every node of one type, optionally filtered by exact match and sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeQuery {
    pub type_name: String,
    pub filter: Option<(String, FieldValue)>,
    pub sort: Option<Sort>,
    pub select: Vec<Select>,
}

impl NodeQuery {
    pub fn all(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            filter: None,
            sort: None,
            select: Vec::new(),
        }
    }

    pub fn by_id(type_name: &str, id: &str) -> Self {
        Self::all(type_name).filter_eq(ID_FIELD, FieldValue::from(id))
    }

    pub fn filter_eq(mut self, field: &str, value: FieldValue) -> Self {
        self.filter = Some((field.to_string(), value));
        self
    }

    pub fn sort_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort = Some(Sort {
            field: field.to_string(),
            order,
        });
        self
    }

    pub fn select(mut self, fields: &[&str]) -> Self {
        self.select
            .extend(fields.iter().map(|field| Select::Field(field.to_string())));
        self
    }

    pub fn select_date(mut self, field: &str, format: &str) -> Self {
        self.select.push(Select::Date {
            field: field.to_string(),
            format: format.to_string(),
        });
        self
    }
}
