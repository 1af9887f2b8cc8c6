const INTERACTIVE_TAGS: [&str; 2] = ["a", "button"];
const INTERACTIVE_CLASSES: [&str; 4] = ["theme-toggle", "mobile-menu-toggle", "pill", "tag"];

/// Whether hovering an element should switch the cursor to its pointer look.
pub fn is_interactive<'a>(tag_name: &str, classes: impl IntoIterator<Item = &'a str>) -> bool {
    let tag = tag_name.to_ascii_lowercase();
    if INTERACTIVE_TAGS.contains(&tag.as_str()) {
        return true;
    }

    classes
        .into_iter()
        .any(|class| INTERACTIVE_CLASSES.contains(&class))
}

pub fn position_style(x: i32, y: i32) -> (String, String) {
    (format!("{x}px"), format!("{y}px"))
}
