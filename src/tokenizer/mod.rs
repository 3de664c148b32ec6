mod stop_words;

use crate::error::{Error, Result};
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

pub use stop_words::is_stop_word;

/// Splits text into lowercase terms of two or more word characters.
pub struct Tokenizer {
    regex: Regex,
    stemmer: Option<Stemmer>,
    stop_words: bool,
}

impl Tokenizer {
    pub fn new(stop_words: bool, stem: bool) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"\b\w\w+\b")
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
            stemmer: stem.then(|| Stemmer::create(Algorithm::English)),
            stop_words,
        })
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        self.regex
            .find_iter(&lowered)
            .map(|token| token.as_str())
            .filter(|token| !(self.stop_words && is_stop_word(token)))
            .map(|token| match &self.stemmer {
                Some(stemmer) => stemmer.stem(token).into_owned(),
                None => token.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_drops_single_characters() {
        let tokenizer = Tokenizer::new(false, false).expect("Failed to create tokenizer");

        assert_eq!(
            tokenizer.tokenize("Built a REST API in Go, 2 years"),
            vec!["built", "rest", "api", "in", "go", "years"]
        );
    }

    #[test]
    fn removes_stop_words() {
        let tokenizer = Tokenizer::new(true, false).expect("Failed to create tokenizer");

        assert_eq!(
            tokenizer.tokenize("Looking for a Python machine learning engineer"),
            vec!["python", "machine", "learning", "engineer"]
        );
    }

    #[test]
    fn stems_terms() {
        let tokenizer = Tokenizer::new(false, true).expect("Failed to create tokenizer");

        assert_eq!(
            tokenizer.tokenize("Deploying services"),
            vec!["deploy", "servic"]
        );
    }

    #[test]
    fn keeps_unicode_words() {
        let tokenizer = Tokenizer::new(true, false).expect("Failed to create tokenizer");

        assert_eq!(tokenizer.tokenize("Café Müller"), vec!["café", "müller"]);
    }

    #[test]
    fn empty_text_has_no_terms() {
        let tokenizer = Tokenizer::new(true, true).expect("Failed to create tokenizer");

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t").is_empty());
    }
}
