use crate::{
    config::ScoringConfig,
    error::{Error, Result},
    extractor::extract_text,
    report::MatchReport,
    similarity::{cosine_similarity, to_score},
    skills::SkillCatalog,
    tokenizer::Tokenizer,
    vectorizer::TfIdfVectorizer,
};
use std::path::Path;

/// Scores resumes against job descriptions.
pub struct Matcher {
    tokenizer: Tokenizer,
    /// Unfiltered tokenizer, retried when stop-word removal empties both documents
    fallback_tokenizer: Option<Tokenizer>,
    skills: SkillCatalog,
    config: ScoringConfig,
}

impl Matcher {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        let skills = match &config.skills_path {
            Some(path) => SkillCatalog::from_path(path)?,
            None => SkillCatalog::builtin()?,
        };
        if skills.is_empty() {
            tracing::warn!("Skill catalogue is empty, no skills will be matched");
        }

        let fallback_tokenizer = if config.stop_words {
            Some(Tokenizer::new(false, config.stem)?)
        } else {
            None
        };

        Ok(Self {
            tokenizer: Tokenizer::new(config.stop_words, config.stem)?,
            fallback_tokenizer,
            skills,
            config,
        })
    }

    /// Extracts the resume at `resume_path` and scores it.
    pub fn score_resume_file(
        &self,
        resume_path: &Path,
        job_description: &str,
    ) -> Result<MatchReport> {
        let resume = extract_text(resume_path)?;
        self.score_texts(&resume, job_description)
    }

    pub fn score_texts(&self, resume: &str, job_description: &str) -> Result<MatchReport> {
        let similarity = self.similarity(resume, job_description)?;
        let score = to_score(similarity);

        let skills = self.skills.match_skills(resume, job_description);
        tracing::info!(
            "Score {score} with {} matched and {} missing skills ({}% coverage)",
            skills.matched.len(),
            skills.missing.len(),
            skills.coverage
        );

        let report = MatchReport::new(score, skills.matched);
        if self.config.detailed {
            let missing = skills
                .missing
                .into_iter()
                .take(self.config.missing_limit)
                .collect();
            return Ok(report.with_skill_gap(missing, skills.coverage));
        }

        Ok(report)
    }

    fn similarity(&self, resume: &str, job_description: &str) -> Result<f64> {
        let documents = [resume, job_description];
        let vectorizer = TfIdfVectorizer::new(&self.tokenizer, self.config.sublinear_tf);

        let result = match (vectorizer.fit_transform(&documents), &self.fallback_tokenizer) {
            (Err(Error::EmptyVocabulary), Some(fallback)) => {
                tracing::debug!("Only stop words left, retrying without stop-word removal");
                TfIdfVectorizer::new(fallback, self.config.sublinear_tf).fit_transform(&documents)
            }
            (result, _) => result,
        };

        match result {
            Ok((_, vectors)) => cosine_similarity(&vectors[0], &vectors[1]),
            Err(Error::EmptyVocabulary) => {
                tracing::warn!("Neither document has any terms, scoring as 0");
                Ok(0.0)
            }
            Err(e) => Err(e),
        }
    }
}
