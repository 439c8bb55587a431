use serde::{Deserialize, Serialize};

use super::Score;

/// Qualification band derived from the score alone. Variants are ordered from
/// weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Emerging,
    Established,
    Strong,
    #[serde(rename = "Strategic Partner")]
    StrategicPartner,
}

// Descending; the first band whose floor the score reaches wins.
const BANDS: [(u8, Tier); 3] = [
    (80, Tier::StrategicPartner),
    (60, Tier::Strong),
    (30, Tier::Established),
];

impl Tier {
    pub fn from_score(score: Score) -> Self {
        BANDS
            .iter()
            .find(|(floor, _)| score.value() >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Emerging)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Emerging => "Emerging",
            Self::Established => "Established",
            Self::Strong => "Strong",
            Self::StrategicPartner => "Strategic Partner",
        }
    }

    /// Lowest score that lands in this band.
    pub const fn floor(self) -> u8 {
        match self {
            Self::Emerging => 0,
            Self::Established => 30,
            Self::Strong => 60,
            Self::StrategicPartner => 80,
        }
    }

    /// Next step the partnerships team takes with a lead in this band.
    pub const fn follow_up(self) -> &'static str {
        match self {
            Self::StrategicPartner => "Invite to strategic partner call within 48h.",
            Self::Strong => "Schedule capabilities deep-dive and brand alignment.",
            Self::Established => {
                "Request additional proof (references, case studies) and pilot region."
            }
            Self::Emerging => "Add more details; consider a referral-only pilot to build traction.",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_at(value: u32) -> Tier {
        Tier::from_score(Score::clamped(value))
    }

    #[test]
    fn boundaries_are_inclusive_floors() {
        assert_eq!(tier_at(0), Tier::Emerging);
        assert_eq!(tier_at(29), Tier::Emerging);
        assert_eq!(tier_at(30), Tier::Established);
        assert_eq!(tier_at(59), Tier::Established);
        assert_eq!(tier_at(60), Tier::Strong);
        assert_eq!(tier_at(79), Tier::Strong);
        assert_eq!(tier_at(80), Tier::StrategicPartner);
        assert_eq!(tier_at(100), Tier::StrategicPartner);
    }

    #[test]
    fn floors_agree_with_classifier() {
        for tier in [
            Tier::Emerging,
            Tier::Established,
            Tier::Strong,
            Tier::StrategicPartner,
        ] {
            assert_eq!(tier_at(u32::from(tier.floor())), tier);
        }
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Tier::StrategicPartner).expect("serialize tier");
        assert_eq!(json, "\"Strategic Partner\"");
    }
}
