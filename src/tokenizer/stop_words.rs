use std::{collections::HashSet, sync::LazyLock};

pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // English function words
        "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
        "at", "be", "been", "being", "both", "but", "by", "can", "could", "did", "do", "does",
        "each", "few", "for", "from", "had", "has", "have", "he", "her", "here", "him", "his",
        "how", "if", "in", "into", "is", "it", "its", "me", "more", "most", "my", "no", "nor",
        "not", "of", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
        "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "them",
        "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
        "until", "up", "us", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
        // Job posting boilerplate
        "ability", "candidate", "candidates", "etc", "experience", "experienced", "ideal",
        "join", "looking", "must", "need", "plus", "preferred", "required", "requirements",
        "responsibilities", "role", "seeking", "strong", "year", "years",
    ]
    .into_iter()
    .collect()
});

pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(term)
}
