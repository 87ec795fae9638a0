//! Cosine similarity over f32 vectors, accumulated in f64.

/// Cosine similarity between two vectors.
/// Returns 0.0 for mismatched lengths or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(d, na, nb), (&x, &y)| {
            let (x, y) = (x as f64, y as f64);
            (d + x * y, na + x * x, nb + y * y)
        },
    );
    let denom = (norm_a * norm_b).sqrt();
    if denom <= f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}
