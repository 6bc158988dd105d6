//! Whole-document rendering of realistic entries

use super::*;

#[test]
fn test_full_entry() {
    let markdown = "\
# Git

Git is a version control tool made by **Linus Torvalds**.

## Links

* [GitHub](https://github.com)
* **Docs**: [git-scm](https://git-scm.com/doc)

See also [Python](/wiki/Python).
";

    insta::assert_snapshot!(render(markdown), @r#"<h1>Git</h1><p>Git is a version control tool made by <strong>Linus Torvalds</strong>.</p><h2>Links</h2><ul><li><a href="https://github.com">GitHub</a></li><li><strong>Docs</strong>: <a href="https://git-scm.com/doc">git-scm</a></li></ul><p>See also <a href="/wiki/Python">Python</a>.</p>"#);
}

#[test]
fn test_bold_at_line_start_and_later() {
    insta::assert_snapshot!(
        render("**Django** is a **web** framework\n"),
        @"<p><strong>Django</strong> is a <strong>web</strong> framework</p>"
    );
}

#[test]
fn test_markup_lookalikes_stay_paragraphs() {
    insta::assert_snapshot!(
        render("#tag\n####### seven\n*star\n"),
        @"<p>#tag</p><p>####### seven</p><p>*star</p>"
    );
}

#[test]
fn test_html_in_content_is_escaped() {
    insta::assert_snapshot!(
        render("<b>hi</b> & bye\n* <i>x</i>\n"),
        @"<p>&lt;b&gt;hi&lt;/b&gt; &amp; bye</p><ul><li>&lt;i&gt;x&lt;/i&gt;</li></ul>"
    );
}

#[test]
fn test_whitespace_only_line_is_separator() {
    insta::assert_snapshot!(
        render("first\n   \nsecond"),
        @"<p>first</p><p>second</p>"
    );
}

#[test]
fn test_link_target_is_left_verbatim() {
    insta::assert_snapshot!(
        render("[spec](http://e.com/a**b**c)\n* **[Wiki](https://en.wikipedia.org/wiki/Git_(software))**\n"),
        @r#"<p><a href="http://e.com/a**b**c">spec</a></p><ul><li><strong><a href="https://en.wikipedia.org/wiki/Git_(software)">Wiki</a></strong></li></ul>"#
    );
}

#[test]
fn test_script_links_render_as_text() {
    insta::assert_snapshot!(
        render("[click](javascript:alert(document.cookie))\n"),
        @"<p>[click](javascript:alert(document.cookie))</p>"
    );
}
