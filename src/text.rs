//! Description-text cleanup helpers for rendered HTML fragments.

use regex::Regex;
use std::sync::LazyLock;

/// Link substituted for the `TSource` generic parameter.
pub const OBSERVABLE_LINK: &str =
    "<a href=\"https://bonsai-rx.org/docs/articles/observables.html\">Observable</a>";

static RE_OBSERVABLE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a.*IObservable.*&lt;").unwrap());

static RE_GROUPED_OBSERVABLE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a.*IGroupedObservable.*&lt;").unwrap());

/// Concatenate summary and remarks into a single description string.
pub fn join_docs(summary: Option<&str>, remarks: Option<&str>) -> String {
    let mut text = String::with_capacity(
        summary.map_or(0, str::len) + remarks.map_or(0, str::len),
    );
    text.push_str(summary.unwrap_or(""));
    text.push_str(remarks.unwrap_or(""));
    text
}

/// Tag the last opening-paragraph token with a no-bottom-margin style, so a
/// trailing paragraph does not add a blank line inside table cells.
pub fn remove_bottom_margin(text: &str) -> String {
    match text.rfind("<p") {
        Some(index) => {
            let mut out = String::with_capacity(text.len() + 32);
            out.push_str(&text[..index]);
            out.push_str("<p style=\"margin-bottom:0;\"");
            out.push_str(&text[index + 2..]);
            out
        }
        None => text.to_string(),
    }
}

/// Strip the observable-of-T wrapper from a rendered type display name and
/// substitute a user-guide link for the generic parameter.
///
/// Grouped-observable markup carries two closing `&gt;` tokens for the
/// stripped wrapper; plain `IObservable` carries one, and any further `&gt;`
/// belongs to a nested generic and must survive.
pub fn normalize_spec_name(spec_name: &str) -> String {
    if spec_name.contains("IGroupedObservable") {
        RE_GROUPED_OBSERVABLE_OPEN
            .replace(spec_name, "")
            .replacen("&gt;", "", 2)
            .replacen("TSource", OBSERVABLE_LINK, 1)
    } else if spec_name.contains("IObservable") {
        RE_OBSERVABLE_OPEN
            .replace(spec_name, "")
            .replacen("&gt;", "", 1)
            .replacen("TSource", OBSERVABLE_LINK, 1)
    } else {
        spec_name.to_string()
    }
}
