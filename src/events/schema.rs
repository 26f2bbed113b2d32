use super::{
    END_DATE_FIELD, EVENT_TYPE, LOCATION_FIELD, NAME_FIELD, SLUG_FIELD, START_DATE_FIELD,
    URL_FIELD,
};
use crate::content::model::{FieldDefinition, FieldType, TypeDefinition};
use crate::content::{ContentGraph, SchemaError};
use tracing::debug;

const START_DATE_SOURCE: &str = "start_date";
const END_DATE_SOURCE: &str = "end_date";

/// `Event` with inference disabled: dates are renamed from their snake case
/// source keys and `slug` is left to a resolver.
pub fn event_type_definition() -> TypeDefinition {
    TypeDefinition::new(EVENT_TYPE)
        .dont_infer()
        .field(FieldDefinition::new(NAME_FIELD, FieldType::String).required())
        .field(FieldDefinition::new(LOCATION_FIELD, FieldType::String).required())
        .field(
            FieldDefinition::new(START_DATE_FIELD, FieldType::Date)
                .required()
                .proxy(START_DATE_SOURCE),
        )
        .field(
            FieldDefinition::new(END_DATE_FIELD, FieldType::Date)
                .required()
                .proxy(END_DATE_SOURCE),
        )
        .field(FieldDefinition::new(URL_FIELD, FieldType::String).required())
        .field(
            FieldDefinition::new(SLUG_FIELD, FieldType::String)
                .required()
                .resolved(),
        )
}

pub fn define_event_type<G: ContentGraph>(graph: &mut G) -> Result<(), SchemaError> {
    debug!("Defining the {} type", EVENT_TYPE);

    graph.create_types(event_type_definition())
}
