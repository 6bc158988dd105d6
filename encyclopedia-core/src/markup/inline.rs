//! Inline constructs: bold spans and links.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold regex"));

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*)\]\(((?:[^()\s]|\([^()\s]*\))*)\)").expect("valid link regex")
});

/// Schemes a link target may carry; targets without a scheme are relative
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Render the inline constructs of one line of text.
///
/// Links are cut out of the line before the bold pass and stand in as a
/// single marker character, so bold markers never reach a link target while
/// a bold span can still wrap a whole link. Text is HTML-escaped before tags
/// are added. Links with a disallowed scheme stay plain text.
pub fn render_inline(text: &str) -> String {
    let marker = link_marker(text);
    let mut links = Vec::new();
    let mut source = String::with_capacity(text.len());
    let mut last = 0;

    for caps in LINK_RE.captures_iter(text) {
        let (Some(whole), Some(label), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if !is_allowed_target(target.as_str()) {
            continue;
        }
        source.push_str(&html_escape(&text[last..whole.start()]));
        source.push(marker);
        links.push(format!(
            r#"<a href="{}">{}</a>"#,
            html_escape(target.as_str()),
            render_bold(&html_escape(label.as_str()))
        ));
        last = whole.end();
    }
    source.push_str(&html_escape(&text[last..]));

    let bolded = render_bold(&source);
    let mut pieces = bolded.split(marker);
    let mut html = pieces.next().unwrap_or_default().to_string();
    for (link, piece) in links.iter().zip(pieces) {
        html.push_str(link);
        html.push_str(piece);
    }
    html
}

fn render_bold(escaped: &str) -> String {
    BOLD_RE
        .replace_all(escaped, "<strong>${1}</strong>")
        .into_owned()
}

/// A private-use character that does not occur in `text`
fn link_marker(text: &str) -> char {
    ('\u{E000}'..='\u{F8FF}')
        .find(|c| !text.contains(*c))
        .unwrap_or('\u{E000}')
}

/// Relative, root-relative and fragment targets pass, as do http(s) and mailto
fn is_allowed_target(target: &str) -> bool {
    let head = target.split(['/', '?', '#']).next().unwrap_or_default();
    match head.split_once(':') {
        Some((scheme, _)) => ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed)),
        None => true,
    }
}

pub(crate) fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
