use itertools::Itertools;
use serde::{Deserialize, Serialize};

const INDEX_KEY: &str = "index";

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Template {
    /// Index page listing every event
    EventsList,
    /// Page of a single event
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    #[serde(rename = "eventID")]
    pub event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub component: Template,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PageContext>,
}

impl Page {
    pub fn index(base_path: &str) -> Self {
        Self {
            path: base_path.to_string(),
            component: Template::EventsList,
            context: None,
        }
    }

    pub fn event(slug: &str, event_id: &str) -> Self {
        Self {
            path: slug.to_string(),
            component: Template::Event,
            context: Some(PageContext {
                event_id: event_id.to_string(),
            }),
        }
    }

    /// Where the page lands once built. Paths differing only in slashes share
    /// a key, and the root is `index`.
    pub fn output_key(&self) -> String {
        output_key(&self.path)
    }
}

pub fn output_key(path: &str) -> String {
    let key = path.split('/').filter(|segment| !segment.is_empty()).join("/");

    if key.is_empty() {
        INDEX_KEY.to_string()
    } else {
        key
    }
}

/// Receives the page-creation requests of a build.
pub trait Actions {
    fn create_page(&mut self, page: Page);
}

/// Keeps the created pages in creation order.
#[derive(Debug, Default)]
pub struct PageCollector {
    pages: Vec<Page>,
}

impl PageCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

impl Actions for PageCollector {
    fn create_page(&mut self, page: Page) {
        self.pages.push(page);
    }
}
