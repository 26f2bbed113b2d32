use events_theme::config::model::{SlugCollisions, ThemeOptions};
use events_theme::pages::model::{Page, Template};
use events_theme::theme::{build, BuildError};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EVENTS_YAML: &str = r#"
- name: React Rally
  location: Salt Lake City, UT
  start_date: 2019-08-22
  end_date: 2019-08-23
  url: https://www.reactrally.com/

- name: DinosaurJS
  location: Denver, CO
  start_date: 2019-06-20
  end_date: 2019-06-21
  url: https://dinosaurjs.org/

- name: JSHeroes
  location: Cluj-Napoca, Romania
  start_date: 2019-04-11
  end_date: 2019-04-12
  url: https://jsheroes.io/
"#;

fn options_in(root: &Path, base_path: &str) -> ThemeOptions {
    ThemeOptions {
        content_path: root.join("data"),
        base_path: base_path.to_string(),
        output_path: root.join("public"),
        slug_collisions: SlugCollisions::Allow,
    }
}

const NAMELESS_SLUG_YAML: &str = r#"
- name: React Rally
  location: Salt Lake City, UT
  start_date: 2019-08-22
  end_date: 2019-08-23
  url: https://www.reactrally.com/

- name: "!!!"
  location: Porto
  start_date: 2019-09-01
  end_date: 2019-09-02
  url: https://example.com/
"#;

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test_log::test(tokio::test)]
async fn should_build_index_and_event_pages_by_start_date() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "events");
    fs::create_dir(&options.content_path).unwrap();
    fs::write(options.content_path.join("events.yml"), EVENTS_YAML).unwrap();

    let report = build(options).await.unwrap();

    let paths: Vec<&str> = report.pages.iter().map(|page| page.path.as_str()).collect();

    assert_eq!(report.events, 3);
    assert_eq!(
        paths,
        ["events", "/events/jsheroes", "/events/dinosaurjs", "/events/react-rally"]
    );
    assert_eq!(report.pages[0].component, Template::EventsList);
    assert!(report.pages[1..]
        .iter()
        .all(|page| page.component == Template::Event && page.context.is_some()));
}

#[test_log::test(tokio::test)]
async fn should_write_template_data_for_every_page() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "/");
    fs::create_dir(&options.content_path).unwrap();
    fs::write(options.content_path.join("events.yml"), EVENTS_YAML).unwrap();

    let report = build(options).await.unwrap();

    assert_eq!(report.page_data.len(), 4);

    let index = read_json(&root.path().join("public/page-data/index/page-data.json"));
    let names: Vec<&str> = index["result"]["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["name"].as_str().unwrap())
        .collect();

    assert_eq!(index["component"], "events-list");
    assert_eq!(names, ["JSHeroes", "DinosaurJS", "React Rally"]);

    let event = read_json(&root.path().join("public/page-data/dinosaurjs/page-data.json"));
    let dinosaur_page: &Page = report
        .pages
        .iter()
        .find(|page| page.path == "/dinosaurjs")
        .unwrap();

    assert_eq!(
        event["context"]["eventID"],
        dinosaur_page.context.as_ref().unwrap().event_id.as_str()
    );
    assert_eq!(event["result"]["event"]["startDate"], "June 20 2019");
    assert_eq!(event["result"]["event"]["endDate"], "June 21 2019");
    assert_eq!(event["result"]["event"]["location"], "Denver, CO");
}

#[test_log::test(tokio::test)]
async fn when_content_directory_is_missing_should_create_it_and_build_the_index() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "/");

    let report = build(options.clone()).await.unwrap();

    assert!(options.content_path.is_dir());
    assert_eq!(report.events, 0);
    assert_eq!(report.pages, [Page::index("/")]);
}

#[test_log::test(tokio::test)]
async fn when_an_event_has_an_invalid_date_should_abort_the_build() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "/");
    fs::create_dir(&options.content_path).unwrap();
    fs::write(
        options.content_path.join("events.yml"),
        "- name: Someday\n  location: Porto\n  start_date: someday\n  \
         end_date: 2019-01-01\n  url: https://example.com\n",
    )
    .unwrap();

    let result = build(options).await;

    assert!(matches!(result, Err(BuildError::Source(_))));
    assert!(!root.path().join("public").exists());
}

#[test_log::test(tokio::test)]
async fn when_events_share_a_name_and_collisions_are_rejected_should_abort_the_build() {
    let root = TempDir::new().unwrap();
    let mut options = options_in(root.path(), "/");
    options.slug_collisions = SlugCollisions::Reject;
    fs::create_dir(&options.content_path).unwrap();
    fs::write(options.content_path.join("a.yml"), EVENTS_YAML).unwrap();
    fs::write(options.content_path.join("b.yml"), EVENTS_YAML).unwrap();

    let result = build(options).await;

    assert!(matches!(result, Err(BuildError::Pages(_))));
}

#[test_log::test(tokio::test)]
async fn should_not_validate_end_date_against_start_date() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "/");
    fs::create_dir(&options.content_path).unwrap();
    fs::write(
        options.content_path.join("backwards.json"),
        r#"[{
            "name": "Backwards",
            "location": "Faro",
            "start_date": "2020-05-02",
            "end_date": "2020-05-01",
            "url": "https://example.com"
        }]"#,
    )
    .unwrap();

    let report = build(options).await.unwrap();

    assert_eq!(report.pages.len(), 2);
}

#[test_log::test(tokio::test)]
async fn when_an_event_takes_the_index_path_and_collisions_are_rejected_should_abort() {
    let root = TempDir::new().unwrap();
    let mut options = options_in(root.path(), "events");
    options.slug_collisions = SlugCollisions::Reject;
    fs::create_dir(&options.content_path).unwrap();
    fs::write(options.content_path.join("events.yml"), NAMELESS_SLUG_YAML).unwrap();

    let result = build(options).await;

    assert!(matches!(result, Err(BuildError::Pages(_))));
    assert!(!root.path().join("public").exists());
}

#[test_log::test(tokio::test)]
async fn when_an_event_takes_the_index_path_should_not_overwrite_the_index_data() {
    let root = TempDir::new().unwrap();
    let options = options_in(root.path(), "events");
    fs::create_dir(&options.content_path).unwrap();
    fs::write(options.content_path.join("events.yml"), NAMELESS_SLUG_YAML).unwrap();

    let result = build(options).await;

    assert!(matches!(result, Err(BuildError::PageData(_))));
    let index_data = read_json(&root.path().join("public/page-data/events/page-data.json"));
    assert_eq!(index_data["component"], "events-list");
}
