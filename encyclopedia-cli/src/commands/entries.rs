//! Entry commands: list, search, show, new, edit, random.

use super::open_store;
use crate::EntryFormat;
use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Print every entry title
pub fn list_entries(config_path: &Path, json: bool) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let titles = store.list_titles().context("Failed to list entries")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
    } else {
        for title in &titles {
            println!("{title}");
        }
    }

    Ok(())
}

/// Search titles and print the outcome
pub fn search_entries(config_path: &Path, query: &str, json: bool) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let outcome = store.find(query).context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if !outcome.is_match() {
        println!("No results found for '{}'", query);
    }
    for title in outcome.titles() {
        println!("{title}");
    }

    Ok(())
}

/// Print one entry in the requested format
pub fn show_entry(config_path: &Path, title: &str, format: EntryFormat) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let entry = store
        .entry(title)
        .with_context(|| format!("Failed to read entry '{}'", title))?
        .with_context(|| format!("Entry '{}' not found", title))?;

    match format {
        EntryFormat::Html => println!("{}", entry.to_html()),
        EntryFormat::Raw => print!("{}", entry.content),
        EntryFormat::Json => {
            let payload = serde_json::json!({
                "title": entry.title,
                "content": entry.content,
                "html": entry.to_html(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Create an entry; an existing entry is an error
pub fn new_entry(config_path: &Path, title: &str, file: Option<&Path>) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let content = read_content(file)?;

    if !store
        .create(title, &content)
        .with_context(|| format!("Failed to create entry '{}'", title))?
    {
        bail!("Entry '{}' already exists", title.trim());
    }

    println!("Created '{}'", title.trim());
    Ok(())
}

/// Create or replace an entry
pub fn edit_entry(config_path: &Path, title: &str, file: Option<&Path>) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    let content = read_content(file)?;

    store
        .upsert(title, &content)
        .with_context(|| format!("Failed to save entry '{}'", title))?;

    println!("Saved '{}'", title.trim());
    Ok(())
}

/// Print a random title
pub fn random_entry(config_path: &Path) -> Result<()> {
    let (_, store) = open_store(config_path)?;
    match store.random_title().context("Failed to list entries")? {
        Some(title) => {
            println!("{title}");
            Ok(())
        }
        None => bail!("The encyclopedia has no entries yet"),
    }
}

fn read_content(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
        }
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read content from stdin")?;
            Ok(content)
        }
    }
}
