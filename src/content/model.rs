use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub const ID_FIELD: &str = "id";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw record as it was read from a data file.
pub type RawRecord = Map<String, Value>;

/// One result row of a [crate::content::query::NodeQuery].
pub type Row = Map<String, Value>;

pub type FieldResolver = Arc<dyn Fn(&Node) -> FieldValue + Send + Sync>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::IntoStaticStr)]
pub enum FieldType {
    #[strum(serialize = "ID")]
    Id,
    String,
    Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Raw key the value is read from, when it differs from `name`
    pub proxy_from: Option<String>,
    /// Value comes from an attached resolver, never from raw data
    pub resolved: bool,
}

impl FieldDefinition {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: false,
            proxy_from: None,
            resolved: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn proxy(mut self, from: &str) -> Self {
        self.proxy_from = Some(from.to_string());
        self
    }

    pub fn resolved(mut self) -> Self {
        self.resolved = true;
        self
    }

    pub fn source_key(&self) -> &str {
        self.proxy_from.as_deref().unwrap_or(&self.name)
    }
}

impl Display for FieldDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field_type: &'static str = self.field_type.into();

        write!(f, "{}: {}", self.name, field_type)?;
        if self.required {
            write!(f, "!")?;
        }
        if let Some(from) = &self.proxy_from {
            write!(f, " @proxy(from: \"{}\")", from)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    /// When disabled only declared fields can be queried
    pub infer: bool,
    pub fields: Vec<FieldDefinition>,
}

impl TypeDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            infer: true,
            fields: vec![FieldDefinition::new(ID_FIELD, FieldType::Id).required()],
        }
    }

    pub fn dont_infer(mut self) -> Self {
        self.infer = false;
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.retain(|existing| existing.name != field.name);
        self.fields.push(field);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub type_name: String,
    pub raw: RawRecord,
}

impl Node {
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldValue {
    String(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn to_json(&self, date_format: Option<&str>) -> Value {
        match self {
            FieldValue::String(value) => Value::String(value.clone()),
            FieldValue::Date(date) => {
                Value::String(date.format(date_format.unwrap_or(DATE_FORMAT)).to_string())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only its calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.date_naive())
        })
}
