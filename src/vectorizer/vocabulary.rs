use std::collections::{BTreeSet, HashMap};

/// Sorted set of terms shared by every vector of one corpus.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let terms: BTreeSet<&String> = documents.into_iter().flatten().collect();
        let terms: Vec<String> = terms.into_iter().cloned().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(position, term)| (term.clone(), position))
            .collect();

        Self { terms, index }
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
