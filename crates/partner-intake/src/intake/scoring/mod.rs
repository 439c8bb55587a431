//! Lead qualification rubric.
//!
//! Each rule in [`rules::RULES`] reads one signal of an [`ApplicantProfile`] and
//! returns a non-negative number of points. The points are summed and clamped
//! once to [`MAX_SCORE`]; the clamped score alone determines the [`Tier`].
//! Scoring never fails: missing values simply contribute nothing.

pub mod rules;
mod tier;

pub use rules::{ScoringRule, Signal, RULES};
pub use tier::Tier;

use super::domain::ApplicantProfile;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

/// Qualification score in `0..=100`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub fn clamped(raw: u32) -> Self {
        Self(raw.min(u32::from(MAX_SCORE)) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::from_score(self)
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > MAX_SCORE {
            Err(format!("score {value} exceeds maximum of {MAX_SCORE}"))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Points a single signal contributed to an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: Signal,
    pub points: u32,
}

impl ScoreComponent {
    pub fn label(&self) -> &'static str {
        self.signal.label()
    }
}

/// Auditable result: clamped score, tier and every non-zero contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub score: Score,
    pub tier: Tier,
    pub raw_total: u32,
    pub components: Vec<ScoreComponent>,
}

impl Qualification {
    pub fn follow_up(&self) -> &'static str {
        self.tier.follow_up()
    }
}

/// Sum of every rule before clamping.
pub fn raw_total(profile: &ApplicantProfile) -> u32 {
    RULES.iter().map(|rule| rule.apply(profile)).sum()
}

pub fn score(profile: &ApplicantProfile) -> Score {
    Score::clamped(raw_total(profile))
}

pub fn classify(score: Score) -> Tier {
    Tier::from_score(score)
}

/// Score a profile and keep the per-signal breakdown in rubric order.
pub fn assess(profile: &ApplicantProfile) -> Qualification {
    let components: Vec<ScoreComponent> = RULES
        .iter()
        .map(|rule| ScoreComponent {
            signal: rule.signal,
            points: rule.apply(profile),
        })
        .filter(|component| component.points > 0)
        .collect();

    let raw_total = components.iter().map(|component| component.points).sum();
    let score = Score::clamped(raw_total);

    Qualification {
        score,
        tier: classify(score),
        raw_total,
        components,
    }
}
