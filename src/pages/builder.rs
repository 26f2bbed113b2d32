use super::model::{output_key, Actions, Page};
use crate::config::model::{SlugCollisions, ThemeOptions};
use crate::content::model::ID_FIELD;
use crate::content::query::{NodeQuery, SortOrder};
use crate::content::{ContentGraph, QueryError};
use crate::events::model::EventSummary;
use crate::events::{EVENT_TYPE, SLUG_FIELD, START_DATE_FIELD};
use itertools::Itertools;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

/**
   Creates the index page and one page per event, in ascending start date order.

   Pages are only handed to `actions` once every event has been loaded, so a
   failed query leaves no page behind. Returns the number of pages created.
*/
#[instrument(skip_all, fields(base_path = %options.base_path))]
pub async fn create_pages<G, A>(
    graph: &G,
    actions: &mut A,
    options: &ThemeOptions,
) -> Result<usize, PageBuildError>
where
    G: ContentGraph,
    A: Actions,
{
    let mut pages = vec![Page::index(&options.base_path)];

    let events = match get_events_by_start_date(graph).await {
        Ok(events) => events,
        Err(err) => {
            error!("error loading events: {}", err);
            return Err(err);
        }
    };

    pages.extend(events.iter().map(|event| Page::event(&event.slug, &event.id)));

    resolve_slug_collisions(&mut pages, options.slug_collisions)?;

    let page_count = pages.len();

    for page in pages {
        debug!("Creating page {} with {} template", page.path, page.component);
        actions.create_page(page);
    }

    info!("Created {} pages", page_count);

    Ok(page_count)
}

async fn get_events_by_start_date<G: ContentGraph>(
    graph: &G,
) -> Result<Vec<EventSummary>, PageBuildError> {
    let query = NodeQuery::all(EVENT_TYPE)
        .sort_by(START_DATE_FIELD, SortOrder::Asc)
        .select(&[ID_FIELD, SLUG_FIELD]);

    let rows = graph.query(&query).await?;

    rows.into_iter()
        .map(|row| serde_json::from_value::<EventSummary>(Value::Object(row)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(PageBuildError::from)
}

fn resolve_slug_collisions(
    pages: &mut [Page],
    policy: SlugCollisions,
) -> Result<(), PageBuildError> {
    let shared_keys: Vec<String> = pages.iter().map(Page::output_key).duplicates().collect();

    if shared_keys.is_empty() {
        return Ok(());
    }

    match policy {
        SlugCollisions::Allow => {
            for key in &shared_keys {
                warn!("Several pages share the path '{}'", key);
            }
            Ok(())
        }
        SlugCollisions::Reject => Err(PageBuildError::SlugCollision(shared_keys.join(", "))),
        SlugCollisions::Suffix => {
            let mut taken: HashSet<String> = pages.iter().map(Page::output_key).collect();
            let mut seen = HashSet::new();

            for page in pages.iter_mut() {
                if seen.insert(page.output_key()) {
                    continue;
                }

                let stem = page.path.trim_end_matches('/');
                let mut suffix = 2;
                let renamed = loop {
                    let candidate = format!("{}-{}", stem, suffix);
                    if !taken.contains(&output_key(&candidate)) {
                        break candidate;
                    }
                    suffix += 1;
                };

                warn!("Moving a page from '{}' to '{}'", page.path, renamed);

                taken.insert(output_key(&renamed));
                page.path = renamed;
            }
            Ok(())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageBuildError {
    #[error("error loading events: {0}")]
    EventsQuery(#[from] QueryError),
    #[error("Unexpected event row: {0}")]
    UnexpectedRow(#[from] serde_json::Error),
    #[error("Several events share the paths [{0}]")]
    SlugCollision(String),
}
