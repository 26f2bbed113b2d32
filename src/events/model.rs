use serde::{Deserialize, Serialize};

/// What the page builder needs from each event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub slug: String,
}

/// Data of the single event template, dates already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPageData {
    pub name: String,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListItem {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub url: String,
    pub slug: String,
}
