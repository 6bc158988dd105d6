//! Markup to HTML conversion.
//!
//! The dialect is line based: `#` headings (levels 1-6), `* ` list items,
//! `**bold**` and `[label](url)` inline, and one `<p>` per remaining line.
//! Each line is classified once and emitted; the only state carried between
//! lines is whether an unordered list is open.

mod inline;
mod line;

#[cfg(test)]
mod test_integration;

pub use inline::render_inline;
pub use line::{classify, LineKind};

/// Convert a markup document to an HTML fragment.
///
/// Pure and deterministic; empty input renders to an empty string.
pub fn render(content: &str) -> String {
    let mut html = String::with_capacity(content.len() + content.len() / 2);
    let mut in_list = false;

    for line in content.lines() {
        let kind = classify(line);

        if in_list && !matches!(kind, LineKind::ListItem(_)) {
            html.push_str("</ul>");
            in_list = false;
        }

        match kind {
            LineKind::Heading { level, text } => {
                html.push_str(&format!(
                    "<h{level}>{}</h{level}>",
                    render_inline(text)
                ));
            }
            LineKind::ListItem(text) => {
                if !in_list {
                    html.push_str("<ul>");
                    in_list = true;
                }
                html.push_str(&format!("<li>{}</li>", render_inline(text)));
            }
            LineKind::Paragraph(text) => {
                html.push_str(&format!("<p>{}</p>", render_inline(text)));
            }
            LineKind::Blank => {}
        }
    }

    if in_list {
        html.push_str("</ul>");
    }

    html
}
