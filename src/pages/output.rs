use super::model::{Page, PageContext, Template};
use super::templates::{event_page_data, events_list_data, TemplateError};
use crate::content::ContentGraph;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const PAGE_DATA_DIR: &str = "page-data";
const PAGE_DATA_FILE: &str = "page-data.json";

#[derive(Debug, Serialize)]
struct PageData<'a> {
    path: &'a str,
    component: Template,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a PageContext>,
    result: Value,
}

/// Writes `page-data/<path>/page-data.json` under `output_path` for every page,
/// replacing whatever a previous build left there. Two pages landing on the
/// same directory fail the write instead of overwriting each other.
#[instrument(skip(graph, pages), fields(page_count = %pages.len()))]
pub async fn write_page_data<G: ContentGraph>(
    graph: &G,
    pages: &[Page],
    output_path: &Path,
) -> Result<Vec<PathBuf>, PageDataError> {
    let page_data_root = output_path.join(PAGE_DATA_DIR);

    if page_data_root.exists() {
        debug!("Removing previous page data");
        fs::remove_dir_all(&page_data_root).map_err(|source| PageDataError::Write {
            path: page_data_root.clone(),
            source,
        })?;
    }

    let mut written = Vec::with_capacity(pages.len());
    let mut written_keys = HashSet::new();

    for page in pages {
        let key = page.output_key();
        if !written_keys.insert(key.clone()) {
            return Err(PageDataError::SharedPath(key));
        }

        let page_data = PageData {
            path: &page.path,
            component: page.component,
            context: page.context.as_ref(),
            result: get_template_data(graph, page).await?,
        };

        let directory = page_data_root.join(page_data_dir(&key));
        let file = directory.join(PAGE_DATA_FILE);

        fs::create_dir_all(&directory)
            .and_then(|_| fs::write(&file, serde_json::to_string_pretty(&page_data)?))
            .map_err(|source| PageDataError::Write {
                path: file.clone(),
                source,
            })?;

        written.push(file);
    }

    info!("Wrote page data for {} pages", written.len());

    Ok(written)
}

async fn get_template_data<G: ContentGraph>(
    graph: &G,
    page: &Page,
) -> Result<Value, PageDataError> {
    match page.component {
        Template::EventsList => Ok(json!({ "events": events_list_data(graph).await? })),
        Template::Event => {
            let event_id = &page
                .context
                .as_ref()
                .ok_or_else(|| PageDataError::MissingContext(page.path.clone()))?
                .event_id;

            let event = event_page_data(graph, event_id)
                .await?
                .ok_or_else(|| PageDataError::MissingEvent(event_id.clone()))?;

            Ok(json!({ "event": event }))
        }
    }
}

fn page_data_dir(output_key: &str) -> PathBuf {
    output_key.split('/').collect()
}

#[derive(Debug, thiserror::Error)]
pub enum PageDataError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("Page '{0}' has no event context")]
    MissingContext(String),
    #[error("Event '{0}' no longer exists")]
    MissingEvent(String),
    #[error("Several pages write their data to '{0}'")]
    SharedPath(String),
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}
