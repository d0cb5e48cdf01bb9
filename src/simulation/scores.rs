//! Cosmetic SEO and clickbait score generators.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::domain::entities::LinkScores;

/// Range of simulated SEO scores.
pub const SEO_SCORE_RANGE: RangeInclusive<u32> = 60..=99;

/// Range of simulated clickbait scores.
pub const CLICKBAIT_SCORE_RANGE: RangeInclusive<u32> = 10..=39;

/// Assigns cosmetic scores to a newly created link.
pub trait ScoreSource: Send + Sync {
    fn scores(&self, original_url: &str) -> LinkScores;
}

/// Uniformly random scores, ignoring the URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScores;

impl ScoreSource for RandomScores {
    fn scores(&self, _original_url: &str) -> LinkScores {
        let mut rng = rand::rng();
        LinkScores {
            seo_score: rng.random_range(SEO_SCORE_RANGE),
            clickbait_score: rng.random_range(CLICKBAIT_SCORE_RANGE),
        }
    }
}

/// Always returns the same scores.
#[derive(Debug, Clone, Copy)]
pub struct FixedScores(pub LinkScores);

impl FixedScores {
    pub fn new(seo_score: u32, clickbait_score: u32) -> Self {
        Self(LinkScores {
            seo_score,
            clickbait_score,
        })
    }
}

impl ScoreSource for FixedScores {
    fn scores(&self, _original_url: &str) -> LinkScores {
        self.0
    }
}
