use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static PASSWORD_INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[type="password"]"#).unwrap());

/// The parts of a page the content heuristics look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub description: String,
    pub has_password_field: bool,
}

/// Extracts the first `<title>`, the first `<meta name="description">`
/// content, and whether any password input exists. Missing parts are empty.
///
/// Text is kept exactly as written; keyword matching runs over the raw
/// title and description joined together.
pub fn analyze_html(body: &str) -> PageSummary {
    let document = Html::parse_document(body);

    let title = document
        .select(&TITLE)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let description = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
        .unwrap_or_default();

    let has_password_field = document.select(&PASSWORD_INPUT).next().is_some();

    PageSummary {
        title,
        description,
        has_password_field,
    }
}
