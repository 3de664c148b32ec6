use crate::{
    error::{Error, Result},
    vectorizer::TermVector,
};

/// Cosine of the angle between `a` and `b`. Zero-magnitude vectors score 0.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let magnitude = a.norm() * b.norm();
    if magnitude == 0.0 {
        return Ok(0.0);
    }

    Ok(a.dot(b) / magnitude)
}

/// Scales a similarity to a percentage with two decimal places.
pub fn to_score(similarity: f64) -> f64 {
    if similarity.is_nan() {
        return 0.0;
    }

    ((similarity * 100.0).clamp(0.0, 100.0) * 100.0).round() / 100.0
}
