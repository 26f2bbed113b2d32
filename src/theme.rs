use crate::bootstrap::{ensure_content_dir, Provisioned};
use crate::config::model::ThemeOptions;
use crate::content::store::NodeStore;
use crate::content::{ContentGraph, SchemaError};
use crate::events::resolvers::bind_slug_resolver;
use crate::events::schema::define_event_type;
use crate::events::source::{load_content_dir, SourceError};
use crate::pages::builder::PageBuildError;
use crate::pages::model::{Actions, Page, PageCollector};
use crate::pages::output::{write_page_data, PageDataError};
use crate::pages::builder;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::{info, instrument};

/// The theme's build hooks, each one reading the same options.
#[derive(Debug, Clone)]
pub struct EventsTheme {
    options: ThemeOptions,
}

impl EventsTheme {
    pub fn new(options: ThemeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    #[instrument(skip(self))]
    pub fn on_pre_bootstrap(&self) -> io::Result<Provisioned> {
        ensure_content_dir(&self.options.content_path)
    }

    #[instrument(skip_all)]
    pub fn source_nodes<G: ContentGraph>(&self, graph: &mut G) -> Result<(), SchemaError> {
        define_event_type(graph)
    }

    #[instrument(skip_all)]
    pub fn create_resolvers<G: ContentGraph>(&self, graph: &mut G) -> Result<(), SchemaError> {
        bind_slug_resolver(graph, &self.options.base_path)
    }

    #[instrument(skip_all)]
    pub async fn create_pages<G, A>(
        &self,
        graph: &G,
        actions: &mut A,
    ) -> Result<usize, PageBuildError>
    where
        G: ContentGraph,
        A: Actions,
    {
        builder::create_pages(graph, actions, &self.options).await
    }
}

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub events: usize,
    pub pages: Vec<Page>,
    pub page_data: Vec<PathBuf>,
}

/**
   Runs a whole build: content directory, schema, resolvers, content, pages and
   page data, in that order. The first error aborts the build.
*/
#[instrument(
    skip_all,
    fields(content_path = %options.content_path.display(), base_path = %options.base_path)
)]
pub async fn build(options: ThemeOptions) -> Result<BuildReport, BuildError> {
    let theme = EventsTheme::new(options);

    theme.on_pre_bootstrap()?;

    let mut store = NodeStore::new();

    theme.source_nodes(&mut store)?;
    theme.create_resolvers(&mut store)?;

    let events = load_content_dir(&mut store, &theme.options().content_path)?;

    let mut actions = PageCollector::new();
    theme.create_pages(&store, &mut actions).await?;

    let pages = actions.into_pages();
    let page_data = write_page_data(&store, &pages, &theme.options().output_path).await?;

    info!("Built {} pages for {} events", pages.len(), events);

    Ok(BuildReport {
        events,
        pages,
        page_data,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to provision the content directory: {0}")]
    Provision(#[from] io::Error),
    #[error("Failed to define the schema: {0}")]
    Schema(#[from] SchemaError),
    #[error("Failed to source events: {0}")]
    Source(#[from] SourceError),
    #[error("Failed to create pages: {0}")]
    Pages(#[from] PageBuildError),
    #[error("Failed to write page data: {0}")]
    PageData(#[from] PageDataError),
}
