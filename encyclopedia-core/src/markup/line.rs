//! Line classification for the markup dialect.

/// What a single source line contributes to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`..`######` followed by a space
    Heading { level: u8, text: &'a str },
    /// `* ` followed by the item text
    ListItem(&'a str),
    /// Empty or whitespace-only
    Blank,
    Paragraph(&'a str),
}

/// Classify one line (without its line terminator)
pub fn classify(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Blank;
    }

    if let Some(item) = line.strip_prefix("* ") {
        return LineKind::ListItem(item.trim());
    }

    if let Some((level, text)) = detect_heading(line) {
        return LineKind::Heading { level, text };
    }

    LineKind::Paragraph(line.trim())
}

fn detect_heading(line: &str) -> Option<(u8, &str)> {
    let pound_count = line.bytes().take_while(|b| *b == b'#').count();
    if pound_count == 0 || pound_count > 6 {
        return None;
    }

    let text = line[pound_count..].strip_prefix(' ')?;
    Some((pound_count as u8, text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(
            classify("# Title"),
            LineKind::Heading {
                level: 1,
                text: "Title"
            }
        );
        assert_eq!(
            classify("###### Deep  "),
            LineKind::Heading {
                level: 6,
                text: "Deep"
            }
        );
        assert_eq!(
            classify("## "),
            LineKind::Heading { level: 2, text: "" }
        );
    }

    #[test]
    fn test_not_headings() {
        assert_eq!(classify("####### Seven"), LineKind::Paragraph("####### Seven"));
        assert_eq!(classify("#hashtag"), LineKind::Paragraph("#hashtag"));
        assert_eq!(classify(" # indented"), LineKind::Paragraph("# indented"));
    }

    #[test]
    fn test_list_items() {
        assert_eq!(classify("* one"), LineKind::ListItem("one"));
        assert_eq!(classify("* "), LineKind::ListItem(""));
        assert_eq!(classify("*  spaced "), LineKind::ListItem("spaced"));
        assert_eq!(classify("*no space"), LineKind::Paragraph("*no space"));
        assert_eq!(
            classify("**bold** start"),
            LineKind::Paragraph("**bold** start")
        );
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify(" \t "), LineKind::Blank);
    }
}
