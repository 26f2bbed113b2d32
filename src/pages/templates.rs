use crate::content::model::ID_FIELD;
use crate::content::query::{NodeQuery, SortOrder};
use crate::content::{ContentGraph, QueryError};
use crate::events::model::{EventListItem, EventPageData};
use crate::events::{
    END_DATE_FIELD, EVENT_TYPE, LOCATION_FIELD, NAME_FIELD, SLUG_FIELD, START_DATE_FIELD,
    URL_FIELD,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::instrument;

/// "MMMM DD YYYY", e.g. `July 04 2024`
pub const DISPLAY_DATE_FORMAT: &str = "%B %d %Y";

/// Data of the single event template: the event with exactly this id.
#[instrument(skip(graph))]
pub async fn event_page_data<G: ContentGraph>(
    graph: &G,
    event_id: &str,
) -> Result<Option<EventPageData>, TemplateError> {
    let query = NodeQuery::by_id(EVENT_TYPE, event_id)
        .select(&[NAME_FIELD, URL_FIELD])
        .select_date(START_DATE_FIELD, DISPLAY_DATE_FORMAT)
        .select_date(END_DATE_FIELD, DISPLAY_DATE_FORMAT)
        .select(&[LOCATION_FIELD, SLUG_FIELD]);

    let mut events: Vec<EventPageData> = run(graph, &query).await?;

    Ok(events.pop())
}

/// Data of the events list template, by ascending start date.
#[instrument(skip(graph))]
pub async fn events_list_data<G: ContentGraph>(
    graph: &G,
) -> Result<Vec<EventListItem>, TemplateError> {
    let query = NodeQuery::all(EVENT_TYPE)
        .sort_by(START_DATE_FIELD, SortOrder::Asc)
        .select(&[
            ID_FIELD,
            NAME_FIELD,
            START_DATE_FIELD,
            END_DATE_FIELD,
            LOCATION_FIELD,
            URL_FIELD,
            SLUG_FIELD,
        ]);

    run(graph, &query).await
}

async fn run<G, T>(graph: &G, query: &NodeQuery) -> Result<Vec<T>, TemplateError>
where
    G: ContentGraph,
    T: DeserializeOwned,
{
    graph
        .query(query)
        .await?
        .into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(TemplateError::from))
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template query failed: {0}")]
    Query(#[from] QueryError),
    #[error("Unexpected template data: {0}")]
    UnexpectedRow(#[from] serde_json::Error),
}
