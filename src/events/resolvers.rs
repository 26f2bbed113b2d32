use super::{EVENT_TYPE, NAME_FIELD, SLUG_FIELD};
use crate::content::model::{FieldValue, Node};
use crate::content::{ContentGraph, SchemaError};
use crate::slug::slugify;
use std::sync::Arc;
use tracing::debug;

/// Computes `Event.slug` from the event name every time it is queried.
pub fn bind_slug_resolver<G: ContentGraph>(
    graph: &mut G,
    base_path: &str,
) -> Result<(), SchemaError> {
    let base_path = base_path.to_string();

    debug!("Binding {}.{} under '{}'", EVENT_TYPE, SLUG_FIELD, base_path);

    graph.create_resolver(
        EVENT_TYPE,
        SLUG_FIELD,
        Arc::new(move |source: &Node| {
            FieldValue::String(slugify(
                source.get_str(NAME_FIELD).unwrap_or_default(),
                &base_path,
            ))
        }),
    )
}
