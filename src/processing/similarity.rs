//! Lexical similarity metrics between two texts

use crate::config::NoiseMode;
use crate::processing::text_processor::{round_to, similarity_tokens};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMetrics {
    pub semantic_similarity: f64,
    pub keyword_overlap: f64,
    pub tfidf_similarity: f64,
    pub overall_similarity: f64,
}

/// Supplies the perturbation draws for the heuristic similarity components.
pub trait NoiseSource: Send {
    /// A draw in `[0, 1]`. `base` is the keyword overlap being perturbed.
    fn draw(&mut self, base: f64) -> f64;
}

/// Uniform draws from a standard RNG.
pub struct RandomNoise {
    rng: StdRng,
}

impl RandomNoise {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl NoiseSource for RandomNoise {
    fn draw(&mut self, _base: f64) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Deterministic source: every draw equals the base overlap.
pub struct NeutralNoise;

impl NoiseSource for NeutralNoise {
    fn draw(&mut self, base: f64) -> f64 {
        base
    }
}

pub fn noise_source(mode: NoiseMode) -> Box<dyn NoiseSource> {
    match mode {
        NoiseMode::Random => Box::new(RandomNoise::from_entropy()),
        NoiseMode::Seeded { seed } => Box::new(RandomNoise::seeded(seed)),
        NoiseMode::Neutral => Box::new(NeutralNoise),
    }
}

/// Jaccard index of the two token sets. Two empty sets are identical (1.0);
/// one empty set against a non-empty one shares nothing (0.0).
pub fn keyword_overlap(text_a: &str, text_b: &str) -> f64 {
    let a = similarity_tokens(text_a);
    let b = similarity_tokens(text_b);

    let union = a.union(&b).count();
    if union == 0 {
        return 1.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Compute all similarity metrics. The tf-idf and semantic figures are the
/// overlap perturbed by two independent draws from `noise`.
pub fn calculate_similarity(text_a: &str, text_b: &str, noise: &mut dyn NoiseSource) -> SimilarityMetrics {
    let overlap = keyword_overlap(text_a, text_b);

    let tfidf = overlap * 0.8 + noise.draw(overlap) * 0.2;
    let semantic = (overlap * 1.2 + noise.draw(overlap) * 0.3).min(1.0);
    let overall = (overlap + tfidf + semantic) / 3.0;

    SimilarityMetrics {
        semantic_similarity: round_to(semantic, 3),
        keyword_overlap: round_to(overlap, 3),
        tfidf_similarity: round_to(tfidf, 3),
        overall_similarity: round_to(overall, 3),
    }
}
