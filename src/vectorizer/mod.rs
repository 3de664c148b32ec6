//! TF-IDF vectorization over a small in-memory corpus.
//!
//! Weights follow the usual smoothed scheme:
//! `tf(t, d) * (ln((1 + n) / (1 + df(t))) + 1)`, after which every document
//! vector is L2-normalized.

mod vocabulary;

use crate::{
    error::{Error, Result},
    tokenizer::Tokenizer,
};
use std::collections::HashMap;

pub use vocabulary::Vocabulary;

pub type TF = f64;
pub type TFIDF = f64;

/// Dense weight vector indexed by a [`Vocabulary`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermVector(Vec<TFIDF>);

impl TermVector {
    pub fn new(weights: Vec<TFIDF>) -> Self {
        Self(weights)
    }

    pub fn weights(&self) -> &[TFIDF] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            self.0.iter_mut().for_each(|weight| *weight /= norm);
        }
    }
}

pub struct TfIdfVectorizer<'a> {
    tokenizer: &'a Tokenizer,
    sublinear_tf: bool,
}

impl<'a> TfIdfVectorizer<'a> {
    pub const fn new(tokenizer: &'a Tokenizer, sublinear_tf: bool) -> Self {
        Self {
            tokenizer,
            sublinear_tf,
        }
    }

    /// Learns the vocabulary and document frequencies of `documents` and returns
    /// one normalized vector per document, in input order.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<(Vocabulary, Vec<TermVector>)> {
        let tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|document| self.tokenizer.tokenize(document))
            .collect();

        let vocabulary = Vocabulary::from_documents(tokens.iter().map(Vec::as_slice));
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let word_counts: Vec<HashMap<usize, u32>> = tokens
            .iter()
            .map(|terms| count_terms(terms, &vocabulary))
            .collect();

        let mut document_frequency = vec![0_u32; vocabulary.len()];
        for counts in &word_counts {
            for &column in counts.keys() {
                document_frequency[column] += 1;
            }
        }

        let num_docs = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| calculate_idf(f64::from(df), num_docs))
            .collect();

        let vectors = word_counts
            .iter()
            .map(|counts| {
                let mut weights = vec![0.0; vocabulary.len()];
                for (&column, &count) in counts {
                    weights[column] = self.term_frequency(f64::from(count)) * idf[column];
                }

                let mut vector = TermVector::new(weights);
                vector.normalize();
                vector
            })
            .collect();

        tracing::debug!(
            "Vectorized {} documents over {} terms",
            documents.len(),
            vocabulary.len()
        );

        Ok((vocabulary, vectors))
    }

    fn term_frequency(&self, count: TF) -> TF {
        if self.sublinear_tf {
            1.0 + count.ln()
        } else {
            count
        }
    }
}

fn count_terms(terms: &[String], vocabulary: &Vocabulary) -> HashMap<usize, u32> {
    let mut word_count = HashMap::new();

    terms
        .iter()
        .filter_map(|term| vocabulary.get(term))
        .for_each(|column| {
            let count = word_count.entry(column).or_insert(0);
            *count += 1;
        });

    word_count
}

fn calculate_idf(df: f64, n: f64) -> f64 {
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(false, false).expect("Failed to create tokenizer")
    }

    #[test]
    fn shared_terms_get_lower_idf() {
        assert!((calculate_idf(2.0, 2.0) - 1.0).abs() < EPSILON);
        assert!((calculate_idf(1.0, 2.0) - (1.0 + 1.5_f64.ln())).abs() < EPSILON);
    }

    #[test]
    fn vectors_are_unit_length() {
        let tokenizer = tokenizer();
        let vectorizer = TfIdfVectorizer::new(&tokenizer, false);

        let (vocabulary, vectors) = vectorizer
            .fit_transform(&["rust rust tokio", "rust axum"])
            .expect("Failed to vectorize");

        assert_eq!(vocabulary.terms(), &["axum", "rust", "tokio"]);
        assert_eq!(vectors.len(), 2);
        for vector in &vectors {
            assert_eq!(vector.len(), 3);
            assert!((vector.norm() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn weights_match_smoothed_tf_idf() {
        let tokenizer = tokenizer();
        let vectorizer = TfIdfVectorizer::new(&tokenizer, false);

        let (vocabulary, vectors) = vectorizer
            .fit_transform(&["rust rust tokio", "rust axum"])
            .expect("Failed to vectorize");

        // rust: tf 2, idf 1; tokio: tf 1, idf 1 + ln(1.5)
        let rust = 2.0_f64;
        let tokio = 1.0 + 1.5_f64.ln();
        let norm = rust.hypot(tokio);

        let resume = vectors[0].weights();
        let rust_column = vocabulary.get("rust").expect("rust is in the vocabulary");
        let tokio_column = vocabulary.get("tokio").expect("tokio is in the vocabulary");
        let axum_column = vocabulary.get("axum").expect("axum is in the vocabulary");

        assert!((resume[rust_column] - rust / norm).abs() < EPSILON);
        assert!((resume[tokio_column] - tokio / norm).abs() < EPSILON);
        assert!(resume[axum_column].abs() < EPSILON);
    }

    #[test]
    fn sublinear_term_frequency() {
        let tokenizer = tokenizer();
        let vectorizer = TfIdfVectorizer::new(&tokenizer, true);

        assert!((vectorizer.term_frequency(1.0) - 1.0).abs() < EPSILON);
        assert!((vectorizer.term_frequency(10.0) - (1.0 + 10.0_f64.ln())).abs() < EPSILON);
    }

    #[test]
    fn empty_document_is_zero_vector() {
        let tokenizer = tokenizer();
        let vectorizer = TfIdfVectorizer::new(&tokenizer, false);

        let (_, vectors) = vectorizer
            .fit_transform(&["", "python engineer"])
            .expect("Failed to vectorize");

        assert!(vectors[0].norm().abs() < EPSILON);
        assert!((vectors[1].norm() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn empty_corpus_has_no_vocabulary() {
        let tokenizer = tokenizer();
        let vectorizer = TfIdfVectorizer::new(&tokenizer, false);

        let err = vectorizer
            .fit_transform(&["", " a "])
            .expect_err("empty corpus should fail");

        assert!(matches!(err, Error::EmptyVocabulary));
    }
}
