//! Fixed README text. Placeholders use `${key}` and are expanded by [`fill`].

pub const TITLE: &str = "Sample Programs in ${language}";

pub const WELCOME: &str = "Welcome to Sample Programs in ${language}!";
pub const INTRO_LEAD_IN: &str =
    " To find documentation related to the ${language} code in this repo, look ";
pub const INTRO_ANCHOR: &str = "here";
pub const INTRO_END: &str = ".";

pub const PROGRAMS_HEADING: &str = "Sample Programs List";
pub const PROGRAMS_LEGEND: &str = "Below, you'll find a list of code snippets in this collection. \
Code snippets preceded by :warning: link to a GitHub issue query featuring a possible article request issue. \
If an article request issue doesn't exist, we encourage you to create one. \
Meanwhile, code snippets preceded by :white_check_mark: link to an existing article which provides further documentation.";

pub const VERIFIED_ICON: &str = ":white_check_mark:";
pub const WARNING_ICON: &str = ":warning:";
pub const PROGRAM_LINE: &str = "${icon} ${program} in ${language} [Requirements]";
pub const REQUIREMENTS_ANCHOR: &str = "Requirements";

pub const TESTING_HEADING: &str = "Testing";
pub const NO_TESTING: &str = "This language currently does not feature testing. \
If you'd like to help in the efforts to test all of the code in this repo, \
consider creating a testinfo.yml file with the following information:";
pub const TESTINFO_SKELETON: &str =
    "folder:\n  extension:\n  naming:\n\ncontainer:\n  image:\n  tag:\n  cmd:";
pub const TESTINFO_LANG: &str = "yml";
pub const TESTING_SUMMARY: &str = "The following list shares details about what we're using \
to test all Sample Programs in ${language}.";
pub const DOCKER_IMAGE: &str = "Docker Image: ${image}";
pub const DOCKER_TAG: &str = "Docker Tag: ${tag}";

pub const GLOTTER: &str =
    "See the Glotter project for more information on how to create a testinfo file.";
pub const GLOTTER_ANCHOR: &str = "Glotter project";
pub const GLOTTER_URL: &str = "https://github.com/auroq/glotter";

pub const CREDIT: &str = "This page was generated automatically by the Sample Programs Docs Generator. \
Find out how to support this project on Github.";
pub const CREDIT_ANCHOR: &str = "this project";
pub const CREDIT_URL: &str = "https://github.com/TheRenegadeCoder/sample-programs-docs-generator";

/// Substitute every `${key}` in `template` with its value.
/// Unknown placeholders are left untouched.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("${{{}}}", key), value)
    })
}
