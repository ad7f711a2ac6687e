//! Loader module — build a [`Repository`] from a checkout on disk.
//!
//! Expected layout: `<root>/archive/<letter>/<language>/<program files>`,
//! with an optional `testinfo.yml` per language folder.

pub mod testinfo;

use crate::error::LoadError;
use crate::model::{Language, Program, Repository};
use crate::naming;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};

/// Files in a language folder that are not sample programs.
const IGNORED_FILES: &[&str] = &["README.md", testinfo::FILE_NAME];

/// Load every language folder under `<root>/archive`.
pub fn load(root: &Path) -> Result<Repository, LoadError> {
    let archive = root.join("archive");
    if !archive.is_dir() {
        return Err(LoadError::MissingArchive(root.to_path_buf()));
    }

    let mut languages: Vec<Language> = Vec::new();
    for dir in language_dirs(&archive)? {
        let language = load_language(&dir)?;
        if languages.iter().any(|l| l.name == language.name) {
            tracing::warn!(
                language = %language.name,
                dir = %dir.display(),
                "duplicate language folder, skipping"
            );
            continue;
        }
        tracing::debug!(
            language = %language.name,
            programs = language.programs.len(),
            "loaded language"
        );
        languages.push(language);
    }

    Ok(Repository { languages })
}

/// Language folders sorted by folder name, then by full path.
fn language_dirs(archive: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let pattern = format!("{}/*/*", Pattern::escape(&archive.to_string_lossy()));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        // An unreadable letter folder would hide every language under it
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            LoadError::io(path, e.into_error())
        })?;
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    Ok(dirs)
}

fn load_language(dir: &Path) -> Result<Language, LoadError> {
    let name = dir
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoadError::InvalidName(dir.to_path_buf()))?;

    let mut names: Vec<String> = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        if !path.is_file() {
            continue;
        }
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoadError::InvalidName(path.clone()))?;
        if file_name.starts_with('.') || IGNORED_FILES.contains(&file_name) {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let normalized = naming::normalize_program_name(stem);
        if !normalized.is_empty() {
            names.push(normalized);
        }
    }

    // Sort for deterministic output; helper files share their program's stem
    names.sort();
    names.dedup();

    let programs = names.iter().map(|n| Program::new(n, name)).collect();
    let test_config = testinfo::load(&dir.join(testinfo::FILE_NAME))?;
    Ok(Language::new(name, programs, test_config).with_dir(dir.to_path_buf()))
}
