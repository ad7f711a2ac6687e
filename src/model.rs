//! Repository metadata model — read-only views consumed by the README builder.

use crate::naming;
use crate::templates::fill;
use std::path::PathBuf;

const LANGUAGE_URL: &str = "https://sampleprograms.io/languages/${language}";
const PROGRAM_DOC_URL: &str = "https://sampleprograms.io/projects/${program}/${language}";
const PROGRAM_REQUIREMENTS_URL: &str = "https://sampleprograms.io/projects/${program}";
const PROGRAM_ISSUE_URL: &str = "https://github.com/TheRenegadeCoder/sample-programs-website/issues?q=is%3Aissue+is%3Aopen+${program}+${language}";

/// Every language collection found in a repository, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub languages: Vec<Language>,
}

/// One language folder, e.g. `archive/p/python`.
#[derive(Debug, Clone)]
pub struct Language {
    /// Folder name, unique per repository (e.g. "c-plus-plus")
    pub name: String,
    /// Human-facing name (e.g. "C++")
    pub readable_name: String,
    /// Language page on the documentation site
    pub sample_program_url: String,
    pub programs: Vec<Program>,
    pub test_config: TestConfig,
    /// Folder on disk; empty for models built in memory
    pub dir: PathBuf,
}

impl Language {
    /// Build a language view from its folder name, deriving the readable
    /// name and documentation URL.
    pub fn new(name: &str, programs: Vec<Program>, test_config: TestConfig) -> Self {
        Self {
            name: name.to_string(),
            readable_name: naming::readable_language_name(name),
            sample_program_url: fill(LANGUAGE_URL, &[("language", name)]),
            programs,
            test_config,
            dir: PathBuf::new(),
        }
    }

    pub fn with_dir(mut self, dir: PathBuf) -> Self {
        self.dir = dir;
        self
    }
}

/// A single sample program within a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Hyphen-delimited lowercase tokens (e.g. "hello-world")
    pub normalized_name: String,
    pub doc_url: String,
    /// Issue tracker query used when no article exists yet
    pub issue_url: String,
    pub requirements_url: String,
}

impl Program {
    pub fn new(normalized_name: &str, language: &str) -> Self {
        let vars = [("program", normalized_name), ("language", language)];
        Self {
            normalized_name: normalized_name.to_string(),
            doc_url: fill(PROGRAM_DOC_URL, &vars),
            issue_url: fill(PROGRAM_ISSUE_URL, &vars),
            requirements_url: fill(PROGRAM_REQUIREMENTS_URL, &vars),
        }
    }
}

/// Container-based test runner configuration from `testinfo.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TestConfig {
    #[default]
    Absent,
    Present { image: String, tag: String },
}
