//! Title → document store on top of a [`Storage`] backend.

use crate::{
    config::Config,
    models::{Entry, SearchOutcome},
    storage::{FsStorage, Storage},
    title::{Title, TitleError},
};
use rand::seq::SliceRandom;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("Entry '{title}' is not valid UTF-8")]
    Encoding { title: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True for errors caused by caller input rather than storage
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StoreError::InvalidTitle(_) | StoreError::EmptyQuery)
    }
}

/// Entry store mapping titles to markup documents.
///
/// Nothing is cached: every call lists or reads the backend again, so a
/// write is always visible to the next read by the same caller.
#[derive(Debug)]
pub struct EntryStore<S> {
    storage: S,
    extension: String,
}

impl EntryStore<FsStorage> {
    /// Store over the entries directory named in the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(FsStorage::new(config.entries_dir()), config.extension())
    }
}

impl<S: Storage> EntryStore<S> {
    pub fn new(storage: S, extension: &str) -> Self {
        Self {
            storage,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// All entry titles, sorted case-sensitively
    pub fn list_titles(&self) -> Result<Vec<String>, StoreError> {
        let mut titles: Vec<String> = self
            .storage
            .list()?
            .iter()
            .filter_map(|key| Title::from_key(key, &self.extension))
            .map(Title::into_string)
            .collect();
        titles.sort();
        titles.dedup();
        Ok(titles)
    }

    /// Case-insensitive title search.
    ///
    /// The first title (in listing order) equal to the query wins outright;
    /// otherwise every title containing the query is a candidate.
    pub fn find(&self, query: &str) -> Result<SearchOutcome, StoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(StoreError::EmptyQuery);
        }
        let needle = query.to_lowercase();

        let mut candidates = Vec::new();
        for title in self.list_titles()? {
            let lowered = title.to_lowercase();
            if lowered == needle {
                tracing::debug!(query, %title, "exact match");
                return Ok(SearchOutcome::ExactMatch(title));
            }
            if lowered.contains(&needle) {
                candidates.push(title);
            }
        }

        tracing::debug!(query, count = candidates.len(), "search candidates");
        if candidates.is_empty() {
            Ok(SearchOutcome::NoMatch)
        } else {
            Ok(SearchOutcome::Candidates(candidates))
        }
    }

    /// Store a new entry; returns `false` without writing if it already exists
    pub fn create(&self, title: &str, content: &str) -> Result<bool, StoreError> {
        let title = Title::parse(title)?;
        let key = title.key(&self.extension);

        if self.storage.exists(&key)? {
            tracing::info!(%title, "entry already exists, not created");
            return Ok(false);
        }

        self.storage.write(&key, content.as_bytes())?;
        tracing::info!(%title, "created entry");
        Ok(true)
    }

    /// Store an entry, replacing any previous content
    pub fn upsert(&self, title: &str, content: &str) -> Result<bool, StoreError> {
        let title = Title::parse(title)?;
        let key = title.key(&self.extension);

        if self.storage.exists(&key)? {
            self.storage.delete(&key)?;
        }
        self.storage.write(&key, content.as_bytes())?;
        tracing::info!(%title, "saved entry");
        Ok(true)
    }

    /// Raw content of an entry, `None` if there is no such entry
    pub fn read(&self, title: &str) -> Result<Option<String>, StoreError> {
        let title = Title::parse(title)?;
        let Some(bytes) = self.storage.read(&title.key(&self.extension))? else {
            tracing::debug!(%title, "entry not found");
            return Ok(None);
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StoreError::Encoding {
                title: title.into_string(),
            })
    }

    /// Entry with its normalized title, `None` if there is no such entry
    pub fn entry(&self, title: &str) -> Result<Option<Entry>, StoreError> {
        let normalized = Title::parse(title)?;
        Ok(self.read(normalized.as_str())?.map(|content| Entry {
            title: normalized.into_string(),
            content,
        }))
    }

    /// A uniformly chosen title, `None` for an empty store
    pub fn random_title(&self) -> Result<Option<String>, StoreError> {
        let titles = self.list_titles()?;
        Ok(titles.choose(&mut rand::thread_rng()).cloned())
    }
}
