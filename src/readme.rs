//! README builder — one [`Document`] per language.
//!
//! Building a language's page never fails: an unreachable link selects an
//! alternate rendering and a missing test descriptor selects the
//! "no testing" section.

use crate::document::{Document, Inline, Paragraph};
use crate::links::LinkChecker;
use crate::model::{Language, Program, Repository, TestConfig};
use crate::naming::display_name;
use crate::templates::{self, fill};
use indexmap::IndexMap;
use rayon::prelude::*;

/// Rendered pages keyed by language name, in repository order.
pub type Catalog = IndexMap<String, Document>;

pub struct ReadmeBuilder<'a> {
    checker: &'a dyn LinkChecker,
}

impl<'a> ReadmeBuilder<'a> {
    pub fn new(checker: &'a dyn LinkChecker) -> Self {
        Self { checker }
    }

    /// Build every language's page. Languages are independent and are built
    /// in parallel; each key is written exactly once.
    pub fn build_all(&self, repo: &Repository) -> Catalog {
        let pages: Vec<(String, Document)> = repo
            .languages
            .par_iter()
            .map(|language| (language.name.clone(), self.build_one(language)))
            .collect();
        pages.into_iter().collect()
    }

    pub fn build_one(&self, language: &Language) -> Document {
        let readable = language.readable_name.as_str();
        let mut page = Document::new();

        page.add_heading(fill(templates::TITLE, &[("language", readable)]), 1)
            .add_paragraph(self.introduction(language));

        page.add_heading(templates::PROGRAMS_HEADING, 2)
            .add_paragraph(Paragraph::text(templates::PROGRAMS_LEGEND))
            .add_list(self.program_list(language), true);

        testing_section(&mut page, language);

        page.add_horizontal_rule().add_paragraph(credit());

        tracing::debug!(
            language = %language.name,
            programs = language.programs.len(),
            "built readme"
        );
        page
    }

    fn introduction(&self, language: &Language) -> Paragraph {
        let vars = [("language", language.readable_name.as_str())];
        let welcome = Inline::text(fill(templates::WELCOME, &vars));

        if !self.checker.is_reachable(&language.sample_program_url) {
            tracing::info!(
                language = %language.name,
                url = %language.sample_program_url,
                "language page unreachable, omitting link"
            );
            return Paragraph::new(vec![welcome]);
        }

        Paragraph::new(vec![
            welcome,
            Inline::text(fill(templates::INTRO_LEAD_IN, &vars)),
            Inline::link(templates::INTRO_ANCHOR, language.sample_program_url.as_str()),
            Inline::text(templates::INTRO_END),
        ])
    }

    fn program_list(&self, language: &Language) -> Vec<Paragraph> {
        language
            .programs
            .iter()
            .map(|program| self.program_entry(program, &language.readable_name))
            .collect()
    }

    fn program_entry(&self, program: &Program, language: &str) -> Paragraph {
        let (icon, target) = if self.checker.is_reachable(&program.doc_url) {
            (templates::VERIFIED_ICON, &program.doc_url)
        } else {
            tracing::info!(
                program = %program.normalized_name,
                language,
                "article missing, linking issue query"
            );
            (templates::WARNING_ICON, &program.issue_url)
        };

        let name = display_name(&program.normalized_name);
        let line = fill(
            templates::PROGRAM_LINE,
            &[("icon", icon), ("program", name.as_str()), ("language", language)],
        );
        Paragraph::new(vec![Inline::link(line, target.as_str())])
            .insert_link(templates::REQUIREMENTS_ANCHOR, &program.requirements_url)
    }
}

fn testing_section(page: &mut Document, language: &Language) {
    page.add_heading(templates::TESTING_HEADING, 2);

    match &language.test_config {
        TestConfig::Absent => {
            page.add_paragraph(Paragraph::text(templates::NO_TESTING))
                .add_code(templates::TESTINFO_SKELETON, templates::TESTINFO_LANG);
        }
        TestConfig::Present { image, tag } => {
            let summary = fill(
                templates::TESTING_SUMMARY,
                &[("language", language.readable_name.as_str())],
            );
            page.add_paragraph(Paragraph::text(summary)).add_list(
                vec![
                    Paragraph::text(fill(templates::DOCKER_IMAGE, &[("image", image.as_str())])),
                    Paragraph::text(fill(templates::DOCKER_TAG, &[("tag", tag.as_str())])),
                ],
                false,
            );
        }
    }

    page.add_paragraph(
        Paragraph::text(templates::GLOTTER)
            .insert_link(templates::GLOTTER_ANCHOR, templates::GLOTTER_URL),
    );
}

fn credit() -> Paragraph {
    Paragraph::text(templates::CREDIT).insert_link(templates::CREDIT_ANCHOR, templates::CREDIT_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Block;
    use crate::links::Assume;
    use crate::render::markdown::MarkdownRenderer;
    use crate::render::Renderer;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TWO_FER_DOC: &str = "https://sampleprograms.io/projects/two-fer/python";

    fn python(test_config: TestConfig) -> Language {
        Language::new(
            "python",
            vec![
                Program::new("hello-world", "python"),
                Program::new("two-fer", "python"),
            ],
            test_config,
        )
    }

    fn paragraph(block: &Block) -> &Paragraph {
        match block {
            Block::Paragraph { content } => content,
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    fn list(block: &Block) -> (bool, &[Paragraph]) {
        match block {
            Block::List { ordered, items } => (*ordered, items.as_slice()),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn intro_links_reachable_page() {
        let checker = Assume(true);
        let doc = ReadmeBuilder::new(&checker).build_one(&python(TestConfig::Absent));
        let intro = paragraph(&doc.blocks()[1]);
        let links: Vec<_> = intro.links().collect();
        assert_eq!(links, vec![("here", "https://sampleprograms.io/languages/python")]);
        assert_eq!(
            intro.plain_text(),
            "Welcome to Sample Programs in Python! To find documentation related to the \
             Python code in this repo, look here."
        );
    }

    #[test]
    fn intro_drops_link_when_unreachable() {
        let checker = |url: &str| !url.ends_with("/languages/python");
        let doc = ReadmeBuilder::new(&checker).build_one(&python(TestConfig::Absent));
        let intro = paragraph(&doc.blocks()[1]);
        assert_eq!(intro.links().count(), 0);
        assert_eq!(intro.plain_text(), "Welcome to Sample Programs in Python!");
    }

    #[test]
    fn program_entries_follow_doc_reachability() {
        let checker = |url: &str| url != TWO_FER_DOC;
        let doc = ReadmeBuilder::new(&checker).build_one(&python(TestConfig::Absent));
        let (ordered, items) = list(&doc.blocks()[4]);
        assert!(ordered);
        assert_eq!(items.len(), 2);

        let hello: Vec<_> = items[0].links().collect();
        assert!(hello[0].0.starts_with(templates::VERIFIED_ICON));
        assert_eq!(hello[0].1, "https://sampleprograms.io/projects/hello-world/python");
        assert!(hello.contains(&("Requirements", "https://sampleprograms.io/projects/hello-world")));
        assert_eq!(
            items[0].plain_text(),
            ":white_check_mark: Hello World in Python [Requirements]"
        );

        let two_fer: Vec<_> = items[1].links().collect();
        assert!(two_fer[0].0.starts_with(templates::WARNING_ICON));
        assert_eq!(
            two_fer[0].1,
            "https://github.com/TheRenegadeCoder/sample-programs-website/issues?q=is%3Aissue+is%3Aopen+two-fer+python"
        );
        assert!(two_fer.contains(&("Requirements", "https://sampleprograms.io/projects/two-fer")));
    }

    #[test]
    fn every_program_url_checked_once() {
        let calls = AtomicUsize::new(0);
        let checker = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        };
        ReadmeBuilder::new(&checker).build_one(&python(TestConfig::Absent));
        // language page + two program articles
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn testing_without_config_shows_skeleton() {
        let checker = Assume(true);
        let doc = ReadmeBuilder::new(&checker).build_one(&python(TestConfig::Absent));
        let blocks = doc.blocks();
        assert_eq!(
            blocks[5],
            Block::Heading {
                level: 2,
                text: "Testing".into()
            }
        );
        assert_eq!(paragraph(&blocks[6]).plain_text(), templates::NO_TESTING);
        assert_eq!(
            blocks[7],
            Block::Code {
                lang: "yml".into(),
                code: templates::TESTINFO_SKELETON.into()
            }
        );
        assert!(!blocks
            .iter()
            .any(|b| matches!(b, Block::List { ordered: false, .. })));
    }

    #[test]
    fn testing_with_config_lists_image_and_tag() {
        let checker = Assume(true);
        let config = TestConfig::Present {
            image: "python".into(),
            tag: "3.7-alpine".into(),
        };
        let doc = ReadmeBuilder::new(&checker).build_one(&python(config));
        let blocks = doc.blocks();
        assert!(paragraph(&blocks[6]).plain_text().contains("Sample Programs in Python."));
        let (ordered, items) = list(&blocks[7]);
        assert!(!ordered);
        let texts: Vec<_> = items.iter().map(Paragraph::plain_text).collect();
        assert_eq!(texts, vec!["Docker Image: python", "Docker Tag: 3.7-alpine"]);
        assert!(!blocks.iter().any(|b| matches!(b, Block::Code { .. })));
    }

    #[test]
    fn glotter_and_credit_links_in_both_branches() {
        let checker = Assume(false);
        for config in [
            TestConfig::Absent,
            TestConfig::Present {
                image: "i".into(),
                tag: "t".into(),
            },
        ] {
            let doc = ReadmeBuilder::new(&checker).build_one(&python(config));
            let blocks = doc.blocks();
            let n = blocks.len();
            let glotter: Vec<_> = paragraph(&blocks[n - 3]).links().collect();
            assert_eq!(glotter, vec![("Glotter project", templates::GLOTTER_URL)]);
            assert_eq!(blocks[n - 2], Block::HorizontalRule);
            let credit: Vec<_> = paragraph(&blocks[n - 1]).links().collect();
            assert_eq!(credit, vec![("this project", templates::CREDIT_URL)]);
        }
    }

    #[test]
    fn python_end_to_end() {
        let checker = |url: &str| url != TWO_FER_DOC;
        let repo = Repository {
            languages: vec![python(TestConfig::Absent)],
        };
        let catalog = ReadmeBuilder::new(&checker).build_all(&repo);
        assert_eq!(catalog.len(), 1);
        let doc = &catalog["python"];
        let blocks = doc.blocks();

        assert_eq!(
            blocks[0],
            Block::Heading {
                level: 1,
                text: "Sample Programs in Python".into()
            }
        );
        assert_eq!(paragraph(&blocks[1]).links().count(), 1);
        assert_eq!(
            blocks[2],
            Block::Heading {
                level: 2,
                text: "Sample Programs List".into()
            }
        );
        let legend = paragraph(&blocks[3]).plain_text();
        assert!(legend.contains(templates::WARNING_ICON));
        assert!(legend.contains(templates::VERIFIED_ICON));

        let (_, items) = list(&blocks[4]);
        assert!(items[0].plain_text().starts_with(templates::VERIFIED_ICON));
        assert!(items[1].plain_text().starts_with(templates::WARNING_ICON));
        assert!(blocks.contains(&Block::Code {
            lang: "yml".into(),
            code: templates::TESTINFO_SKELETON.into()
        }));
        assert_eq!(blocks[blocks.len() - 2], Block::HorizontalRule);
        assert!(paragraph(blocks.last().unwrap())
            .plain_text()
            .starts_with("This page was generated automatically"));
    }

    #[test]
    fn catalog_keeps_input_order() {
        let checker = Assume(true);
        let repo = Repository {
            languages: ["rust", "ada", "python", "c-plus-plus"]
                .iter()
                .map(|name| Language::new(name, Vec::new(), TestConfig::Absent))
                .collect(),
        };
        let catalog = ReadmeBuilder::new(&checker).build_all(&repo);
        let keys: Vec<_> = catalog.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rust", "ada", "python", "c-plus-plus"]);
        assert_eq!(
            catalog["c-plus-plus"].blocks()[0],
            Block::Heading {
                level: 1,
                text: "Sample Programs in C++".into()
            }
        );
    }

    #[test]
    fn empty_repository_gives_empty_catalog() {
        let checker = Assume(true);
        let catalog = ReadmeBuilder::new(&checker).build_all(&Repository::default());
        assert!(catalog.is_empty());
    }

    #[test]
    fn language_without_programs_has_empty_list() {
        let checker = Assume(true);
        let doc = ReadmeBuilder::new(&checker)
            .build_one(&Language::new("ada", Vec::new(), TestConfig::Absent));
        let (_, items) = list(&doc.blocks()[4]);
        assert!(items.is_empty());
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let checker = |url: &str| url != TWO_FER_DOC;
        let repo = Repository {
            languages: vec![
                python(TestConfig::Absent),
                Language::new(
                    "go",
                    vec![Program::new("fizz-buzz", "go")],
                    TestConfig::Present {
                        image: "golang".into(),
                        tag: "1.21".into(),
                    },
                ),
            ],
        };
        let builder = ReadmeBuilder::new(&checker);
        let render = |catalog: &Catalog| -> Vec<String> {
            catalog.values().map(|doc| MarkdownRenderer.render(doc)).collect()
        };
        let first = builder.build_all(&repo);
        let second = builder.build_all(&repo);
        assert_eq!(first, second);
        assert_eq!(render(&first), render(&second));
    }
}
