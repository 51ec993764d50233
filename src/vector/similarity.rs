use super::VectorError;

fn check_pair(a: &[f32], b: &[f32]) -> Result<(), VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Straight-line (L2) distance between two vectors
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
    check_pair(a, b)?;

    let sum: f32 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sum.sqrt())
}

/// Returns 0.0 when either vector has zero norm, empty vectors included
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
    check_pair(a, b)?;

    let mut dot = 0.0;
    let mut na = 0.0;
    let mut nb = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }

    if na == 0.0 || nb == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (na.sqrt() * nb.sqrt()))
}

pub fn cosine_distance(a: &[f32], b: &[f32]) -> Result<f32, VectorError> {
    Ok(1.0 - cosine_similarity(a, b)?)
}
