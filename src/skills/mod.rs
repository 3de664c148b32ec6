//! Skill catalogue and matching for the `matched` and `missing` report fields.

mod catalog;

use crate::error::{Error, Result};
use regex::Regex;
use std::{fs, path::Path};

pub use catalog::DEFAULT_SKILLS;

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    patterns: Vec<Regex>,
}

impl Skill {
    pub fn new(name: &str, aliases: &[&str]) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Generic("Skill name is empty".to_string()));
        }

        let mut patterns = aliases
            .iter()
            .map(|alias| alias_pattern(alias))
            .collect::<Result<Vec<_>>>()?;

        if patterns.is_empty() {
            patterns.push(alias_pattern(name)?);
        }

        Ok(Self {
            name: name.to_string(),
            patterns,
        })
    }

    /// Byte offset of the first mention in `text`.
    pub fn first_mention(&self, text: &str) -> Option<usize> {
        self.patterns
            .iter()
            .filter_map(|pattern| pattern.captures(text)?.get(1))
            .map(|found| found.start())
            .min()
    }
}

/// Compiles an alias into a case-insensitive pattern bounded by non-word
/// characters, so `c++` does not match inside `c++17x` and `java` does not
/// match `javascript`.
fn alias_pattern(alias: &str) -> Result<Regex> {
    let body = alias
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    if body.is_empty() {
        return Err(Error::Generic("Skill alias is empty".to_string()));
    }

    Regex::new(&format!(r"(?i)(?:^|[^\w])({body})(?:$|[^\w])"))
        .map_err(|e| Error::Generic(format!("Failed to compile alias '{alias}': {e}")))
}

#[derive(Debug, Clone)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

/// Skills mentioned by the job description, split by whether the resume has them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// `matched / requested * 100`, rounded; 0 when the job names no skills
    pub coverage: u32,
}

fn coverage(matched: usize, requested: usize) -> u32 {
    if requested == 0 {
        return 0;
    }

    (matched as f64 / requested as f64 * 100.0).round() as u32
}

impl SkillCatalog {
    pub fn builtin() -> Result<Self> {
        let skills = DEFAULT_SKILLS
            .iter()
            .map(|&(name, aliases)| Skill::new(name, aliases))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { skills })
    }

    /// Parses one skill per line: `Name` or `Name: alias, alias`.
    /// Blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut skills = Vec::new();

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, aliases) = match line.split_once(':') {
                Some((name, aliases)) => (
                    name,
                    aliases
                        .split(',')
                        .map(str::trim)
                        .filter(|alias| !alias.is_empty())
                        .collect::<Vec<_>>(),
                ),
                None => (line, Vec::new()),
            };

            let skill = Skill::new(name, &aliases).map_err(|e| Error::SkillCatalog {
                line: number + 1,
                reason: match e {
                    Error::Generic(reason) => reason,
                    other => other.to_string(),
                },
            })?;
            skills.push(skill);
        }

        Ok(Self { skills })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::parse(&source)?;

        tracing::info!(
            "Loaded {} skills from {}",
            catalog.skills.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Splits the skills the job asks for into those the resume mentions and
    /// those it lacks, both ordered by first mention in the job description.
    pub fn match_skills(&self, resume: &str, job_description: &str) -> SkillMatch {
        let mut requested: Vec<(usize, &Skill)> = self
            .skills
            .iter()
            .filter_map(|skill| {
                skill
                    .first_mention(job_description)
                    .map(|position| (position, skill))
            })
            .collect();
        requested.sort_by_key(|(position, _)| *position);

        let mut result = SkillMatch::default();
        for (_, skill) in requested {
            if result.matched.contains(&skill.name) || result.missing.contains(&skill.name) {
                continue;
            }

            if skill.first_mention(resume).is_some() {
                result.matched.push(skill.name.clone());
            } else {
                result.missing.push(skill.name.clone());
            }
        }

        result.coverage = coverage(
            result.matched.len(),
            result.matched.len() + result.missing.len(),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_compiles() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        assert_eq!(catalog.len(), DEFAULT_SKILLS.len());
    }

    #[test]
    fn matches_in_job_order() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills(
            "Python developer with machine learning experience",
            "Looking for a Python machine learning engineer",
        );

        assert_eq!(result.matched, vec!["Python", "Machine Learning"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn reports_missing_skills() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills(
            "Built dashboards in React and Node.js",
            "Need Docker, React and Kubernetes (k8s) experience",
        );

        assert_eq!(result.matched, vec!["React"]);
        assert_eq!(result.missing, vec!["Docker", "Kubernetes"]);
        assert_eq!(result.coverage, 33);
    }

    #[test]
    fn full_coverage() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills("Python and SQL analyst", "SQL, Python");

        assert_eq!(result.matched, vec!["SQL", "Python"]);
        assert_eq!(result.coverage, 100);
    }

    #[test]
    fn no_requested_skills_is_zero_coverage() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills("Python developer", "Friendly barista wanted");

        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage, 0);
    }

    #[test]
    fn common_words_are_not_skills() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills(
            "Led the rest of the team through a swift spring release, an agile express effort",
            "Build a REST API with Spring Boot and Express.js, Swift for iOS, Agile methodology",
        );

        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["REST", "Spring", "Express", "Swift", "Agile"]);
    }

    #[test]
    fn empty_custom_catalog() {
        let catalog = SkillCatalog::parse("# nothing yet\n").expect("Failed to parse catalog");

        assert!(catalog.is_empty());
        assert_eq!(catalog.match_skills("Rust", "Rust"), SkillMatch::default());
    }

    #[test]
    fn aliases_respect_word_boundaries() {
        let catalog = SkillCatalog::builtin().expect("Failed to build catalog");

        let result = catalog.match_skills("JavaScript and C++", "Java, C++ and javascript");

        assert_eq!(result.matched, vec!["C++", "JavaScript"]);
        assert_eq!(result.missing, vec!["Java"]);
    }

    #[test]
    fn multi_word_alias_spans_line_breaks() {
        let skill = Skill::new("Machine Learning", &["machine learning"])
            .expect("Failed to build skill");

        assert_eq!(skill.first_mention("applied machine\nlearning"), Some(8));
        assert_eq!(skill.first_mention("machinelearning"), None);
    }

    #[test]
    fn parse_custom_catalog() {
        let catalog = SkillCatalog::parse(
            "# skills\n\nRust\nEmbedded: embedded, firmware, bare metal\n",
        )
        .expect("Failed to parse catalog");

        assert_eq!(catalog.len(), 2);

        let result = catalog.match_skills("Bare-metal firmware in C", "Rust firmware engineer");

        assert_eq!(result.matched, vec!["Embedded"]);
        assert_eq!(result.missing, vec!["Rust"]);
    }

    #[test]
    fn parse_rejects_unnamed_skill() {
        let err = SkillCatalog::parse("Rust\n: alias\n").expect_err("unnamed skill should fail");

        assert!(matches!(err, Error::SkillCatalog { line: 2, .. }));
    }
}
