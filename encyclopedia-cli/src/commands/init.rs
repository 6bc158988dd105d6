//! Init command implementation.

use anyhow::{Context, Result};
use encyclopedia_core::{Config, EntryStore};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../encyclopedia.yml.example");

const STARTER_ENTRIES: &[(&str, &str)] = &[
    (
        "CSS",
        "# CSS\n\nCSS is a language that can be used to add style to an [HTML](/wiki/HTML) page.\n",
    ),
    (
        "Git",
        "# Git\n\nGit is a version control tool that can be used to keep track of versions of a software project.\n\n## GitHub\n\nGitHub is an online service for hosting git repositories.\n",
    ),
    (
        "HTML",
        "# HTML\n\nHTML is a markup language that can be used to define the structure of a web page. HTML elements include\n\n* headings\n* paragraphs\n* lists\n* links\n* and more!\n\nThe most recent major version of HTML is HTML5.\n",
    ),
    (
        "Python",
        "# Python\n\nPython is a programming language that can be used both for writing **command-line scripts** or building **web applications**.\n",
    ),
];

/// Initialize a new encyclopedia
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config_path = write_config(root)?;
    scaffold_entries(&config_path)?;

    println!("✓ encyclopedia initialized in {:?}", root);
    println!("  - Edit encyclopedia.yml to customize the site");
    println!("  - Run `encyclopedia serve` and open the printed address");
    Ok(())
}

fn write_config(root: &Path) -> Result<std::path::PathBuf> {
    let config_path = root.join("encyclopedia.yml");
    if config_path.exists() {
        println!("encyclopedia.yml already exists at {:?}", config_path);
        return Ok(config_path);
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(config_path)
}

fn scaffold_entries(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;
    let entries_dir = config.entries_dir();
    fs::create_dir_all(&entries_dir)
        .with_context(|| format!("Failed to create {:?}", entries_dir))?;

    let store = EntryStore::from_config(&config);
    for (title, content) in STARTER_ENTRIES {
        if store.create(title, content)? {
            println!("Created entry '{}'", title);
        }
    }

    Ok(())
}
