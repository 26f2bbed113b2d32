use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex =
        Regex::new("[^a-z0-9]+").expect("Failed to create slug regex");
    static ref EDGE_HYPHENS: Regex = Regex::new("(^-|-$)+").expect("Failed to create hyphen regex");
    static ref REPEATED_SLASHES: Regex =
        Regex::new("//+").expect("Failed to create slash regex");
}

/**
   Turns an event name into its URL path under `base_path`.

   Anything outside `[a-z0-9]` (after lower-casing) becomes a single hyphen, so
   non-Latin names may collapse to an empty segment and the result is just the
   base path. Equal names always give equal slugs.
*/
pub fn slugify(name: &str, base_path: &str) -> String {
    let lowercase = name.to_lowercase();
    let hyphenated = NON_SLUG_CHARS.replace_all(&lowercase, "-");
    let slug = EDGE_HYPHENS.replace_all(&hyphenated, "");

    REPEATED_SLASHES
        .replace_all(&format!("/{}/{}", base_path, slug), "/")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static! {
        static ref SLUG_SHAPE: Regex = Regex::new("^/events/[a-z0-9-]*$").unwrap();
    }

    #[test_log::test]
    fn should_slugify_name_under_root_base_path() {
        assert_eq!(slugify("Spring Festival 2024!", "/"), "/spring-festival-2024");
    }

    #[test_log::test]
    fn should_collapse_repeated_spaces_and_trim_edges() {
        assert_eq!(
            slugify("  Multiple   Spaces  ", "events"),
            "/events/multiple-spaces"
        );
    }

    #[test_log::test]
    fn should_not_duplicate_slashes_when_base_path_has_them() {
        assert_eq!(slugify("RustConf", "/events/"), "/events/rustconf");
        assert_eq!(slugify("RustConf", "//events"), "/events/rustconf");
    }

    #[test_log::test]
    fn when_name_has_no_slug_characters_should_get_only_base_path() {
        assert_eq!(slugify("!!!", "events"), "/events/");
        assert_eq!(slugify("", "/"), "/");
    }

    #[test_log::test]
    fn when_name_is_not_latin_should_collapse_to_hyphens() {
        assert_eq!(slugify("Festa de São João", "/"), "/festa-de-s-o-jo-o");
        assert_eq!(slugify("東京 Meetup", "/"), "/meetup");
    }

    #[test_log::test]
    fn when_names_are_equal_should_get_the_same_slug() {
        assert_eq!(
            slugify("DinosaurJS", "events"),
            slugify("DinosaurJS", "events")
        );
    }

    #[test_log::test]
    fn should_always_produce_a_clean_slug() {
        let names = [
            "Spring Festival 2024!",
            "--Leading and trailing--",
            "a__b..c",
            "UPPER case",
            "émigré café",
            "   ",
            "x",
        ];

        for name in names {
            let slug = slugify(name, "events");

            assert!(SLUG_SHAPE.is_match(&slug), "{name} -> {slug}");
            assert!(!slug.contains("--"), "{name} -> {slug}");
            assert!(!slug.contains("//"), "{name} -> {slug}");
            assert!(!slug.ends_with('-'), "{name} -> {slug}");
            assert!(!slug.starts_with("/events/-"), "{name} -> {slug}");
        }
    }
}
