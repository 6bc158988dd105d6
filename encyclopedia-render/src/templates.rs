//! Askama template definitions.

use askama::Template;
use chrono::Datelike;
use encyclopedia_core::Config;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a title is used as a URL path segment or query value
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Site-wide values every page needs
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub site_title: String,
    pub base_url: String,
    pub year: i32,
}

impl SiteContext {
    pub fn new(site_title: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            base_url: base_url.into(),
            year: chrono::Local::now().year(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site.title.clone(), config.normalized_base_url())
    }

    /// URL of an entry page
    pub fn entry_url(&self, title: &str) -> String {
        format!("{}wiki/{}", self.base_url, encode_segment(title))
    }

    /// URL of an entry's edit form
    pub fn edit_url(&self, title: &str) -> String {
        format!("{}/edit", self.entry_url(title))
    }

    /// URL of the "create new page" form, optionally prefilled with a title
    pub fn add_url(&self, title: Option<&str>) -> String {
        match title {
            Some(title) => format!("{}add?name={}", self.base_url, encode_segment(title)),
            None => format!("{}add", self.base_url),
        }
    }

    pub fn entry_link(&self, title: &str) -> EntryLink {
        EntryLink {
            url: self.entry_url(title),
            title: title.to_string(),
        }
    }
}

/// Percent-encode a title for use as one URL path segment
fn encode_segment(title: &str) -> String {
    utf8_percent_encode(title, SEGMENT_ENCODE_SET).to_string()
}

/// A title with its page URL, for lists
#[derive(Debug, Clone)]
pub struct EntryLink {
    pub url: String,
    pub title: String,
}

/// Entry listing: the home page and search results
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_title: String,
    pub base_url: String,
    pub year: i32,

    pub heading: String,
    pub message: Option<String>,
    pub entries: Vec<EntryLink>,
}

impl IndexTemplate {
    pub fn new(site: &SiteContext, heading: &str, titles: &[String]) -> Self {
        Self {
            site_title: site.site_title.clone(),
            base_url: site.base_url.clone(),
            year: site.year,
            heading: heading.to_string(),
            message: None,
            entries: titles.iter().map(|t| site.entry_link(t)).collect(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A single rendered entry
#[derive(Template)]
#[template(path = "entry.html")]
pub struct EntryTemplate {
    pub site_title: String,
    pub base_url: String,
    pub year: i32,

    pub title: String,
    /// Rendered HTML, inserted unescaped
    pub content: String,
    pub edit_url: String,
}

impl EntryTemplate {
    pub fn new(site: &SiteContext, title: &str, content_html: String) -> Self {
        Self {
            site_title: site.site_title.clone(),
            base_url: site.base_url.clone(),
            year: site.year,
            title: title.to_string(),
            content: content_html,
            edit_url: site.edit_url(title),
        }
    }
}

/// Form for creating or editing an entry
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub site_title: String,
    pub base_url: String,
    pub year: i32,

    pub heading: String,
    pub action: String,
    pub message: Option<String>,
    pub name: String,
    pub content: String,
    /// Editing an existing entry keeps its title fixed
    pub title_locked: bool,
}

impl EditTemplate {
    /// Empty "new page" form
    pub fn add(site: &SiteContext, name: &str, content: &str) -> Self {
        Self {
            site_title: site.site_title.clone(),
            base_url: site.base_url.clone(),
            year: site.year,
            heading: "Create New Page".to_string(),
            action: site.add_url(None),
            message: None,
            name: name.to_string(),
            content: content.to_string(),
            title_locked: false,
        }
    }

    /// Form for an existing entry
    pub fn edit(site: &SiteContext, title: &str, content: &str) -> Self {
        Self {
            heading: format!("Edit {title}"),
            action: site.edit_url(title),
            title_locked: true,
            ..Self::add(site, title, content)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// 404 error page template
#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub site_title: String,
    pub base_url: String,
    pub year: i32,

    pub title: String,
    pub create_url: Option<String>,
}

impl NotFoundTemplate {
    pub fn new(site: &SiteContext, title: &str) -> Self {
        Self {
            site_title: site.site_title.clone(),
            base_url: site.base_url.clone(),
            year: site.year,
            title: title.to_string(),
            create_url: None,
        }
    }

    /// Offer a link to create the missing entry
    pub fn with_create_link(mut self, site: &SiteContext) -> Self {
        self.create_url = Some(site.add_url(Some(&self.title)));
        self
    }
}
