use serde::{Deserialize, Serialize};

use super::super::domain::{ApplicantProfile, PartnerRole};

pub const ROLE_DISTRIBUTOR_POINTS: u32 = 8;
pub const ROLE_REFERRAL_POINTS: u32 = 4;
pub const ROLE_BOTH_POINTS: u32 = 10;

// Threshold tables stack: every step at or below the value is paid out.
pub const GEOGRAPHY_STEPS: [(usize, u32); 3] = [(1, 4), (3, 8), (6, 12)];
pub const NETWORK_STEPS: [(u64, u32); 3] = [(10, 6), (50, 12), (150, 20)];
pub const DOORS_STEPS: [(f64, u32); 3] = [(10.0, 4), (50.0, 10), (150.0, 16)];
pub const DECISION_MAKER_STEPS: [(f64, u32); 3] = [(5.0, 4), (25.0, 8), (75.0, 12)];
pub const SELL_IN_STEPS: [(f64, u32); 3] = [(10_000.0, 6), (50_000.0, 10), (200_000.0, 14)];
pub const DEALS_STEPS: [(f64, u32); 3] = [(3.0, 4), (10.0, 8), (25.0, 12)];
pub const WAREHOUSE_STEPS: [(f64, u32); 3] = [(1_000.0, 3), (5_000.0, 6), (20_000.0, 10)];

pub const LANGUAGE_POINTS: u32 = 2;
pub const LANGUAGE_CAP: u32 = 6;
pub const CHAIN_POINTS: u32 = 4;
pub const CHAIN_CAP: u32 = 20;

pub const COLD_CHAIN_POINTS: u32 = 5;
pub const FLEET_MIN_TRUCKS: u32 = 2;
pub const FLEET_POINTS: u32 = 4;
pub const OWN_LOGISTICS_POINTS: u32 = 2;

pub const CFIA_IMPORTER_POINTS: u32 = 5;
pub const FDA_REGISTERED_POINTS: u32 = 5;
pub const GS1_POINTS: u32 = 3;
pub const COI_INSURANCE_POINTS: u32 = 3;

pub const PROOF_POINTS: u32 = 2;
pub const CATEGORY_FIT_POINTS: u32 = 2;

/// Input signal a rule reads; one rule per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Role,
    GeographyBreadth,
    LanguageBreadth,
    NetworkSize,
    MonthlyDoors,
    DecisionMakers,
    MonthlySellIn,
    DealsClosed,
    ChainAccess,
    WarehouseSize,
    ColdChain,
    TruckFleet,
    LogisticsIndependence,
    CfiaImporter,
    FdaRegistered,
    Gs1Barcodes,
    CoiInsurance,
    LinkedIn,
    FirstReference,
    SecondReference,
    CategoryFit,
}

impl Signal {
    pub const fn label(self) -> &'static str {
        match self {
            Signal::Role => "Role",
            Signal::GeographyBreadth => "Geography breadth",
            Signal::LanguageBreadth => "Language breadth",
            Signal::NetworkSize => "Network size",
            Signal::MonthlyDoors => "Monthly doors serviced",
            Signal::DecisionMakers => "Decision-maker contacts",
            Signal::MonthlySellIn => "Average monthly sell-in",
            Signal::DealsClosed => "Deals closed (12 months)",
            Signal::ChainAccess => "Chain access",
            Signal::WarehouseSize => "Warehouse size",
            Signal::ColdChain => "Cold chain",
            Signal::TruckFleet => "Trucks owned",
            Signal::LogisticsIndependence => "Logistics independence",
            Signal::CfiaImporter => "CFIA importer licence",
            Signal::FdaRegistered => "FDA registration",
            Signal::Gs1Barcodes => "GS1 barcodes",
            Signal::CoiInsurance => "Certificate of insurance",
            Signal::LinkedIn => "LinkedIn profile",
            Signal::FirstReference => "Reference 1",
            Signal::SecondReference => "Reference 2",
            Signal::CategoryFit => "Category fit",
        }
    }
}

/// One additive entry of the qualification rubric.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    pub signal: Signal,
    contribution: fn(&ApplicantProfile) -> u32,
}

impl ScoringRule {
    pub fn apply(&self, profile: &ApplicantProfile) -> u32 {
        (self.contribution)(profile)
    }
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule")
            .field("signal", &self.signal)
            .finish()
    }
}

pub const RULES: [ScoringRule; 21] = [
    ScoringRule {
        signal: Signal::Role,
        contribution: role,
    },
    ScoringRule {
        signal: Signal::GeographyBreadth,
        contribution: geography_breadth,
    },
    ScoringRule {
        signal: Signal::LanguageBreadth,
        contribution: language_breadth,
    },
    ScoringRule {
        signal: Signal::NetworkSize,
        contribution: network_size,
    },
    ScoringRule {
        signal: Signal::MonthlyDoors,
        contribution: monthly_doors,
    },
    ScoringRule {
        signal: Signal::DecisionMakers,
        contribution: decision_makers,
    },
    ScoringRule {
        signal: Signal::MonthlySellIn,
        contribution: monthly_sell_in,
    },
    ScoringRule {
        signal: Signal::DealsClosed,
        contribution: deals_closed,
    },
    ScoringRule {
        signal: Signal::ChainAccess,
        contribution: chain_access,
    },
    ScoringRule {
        signal: Signal::WarehouseSize,
        contribution: warehouse_size,
    },
    ScoringRule {
        signal: Signal::ColdChain,
        contribution: cold_chain,
    },
    ScoringRule {
        signal: Signal::TruckFleet,
        contribution: truck_fleet,
    },
    ScoringRule {
        signal: Signal::LogisticsIndependence,
        contribution: logistics_independence,
    },
    ScoringRule {
        signal: Signal::CfiaImporter,
        contribution: cfia_importer,
    },
    ScoringRule {
        signal: Signal::FdaRegistered,
        contribution: fda_registered,
    },
    ScoringRule {
        signal: Signal::Gs1Barcodes,
        contribution: gs1_barcodes,
    },
    ScoringRule {
        signal: Signal::CoiInsurance,
        contribution: coi_insurance,
    },
    ScoringRule {
        signal: Signal::LinkedIn,
        contribution: linkedin,
    },
    ScoringRule {
        signal: Signal::FirstReference,
        contribution: first_reference,
    },
    ScoringRule {
        signal: Signal::SecondReference,
        contribution: second_reference,
    },
    ScoringRule {
        signal: Signal::CategoryFit,
        contribution: category_fit,
    },
];

/// Sum every step whose threshold the value reaches. NaN reaches nothing.
pub(crate) fn stacked<T: PartialOrd + Copy>(value: T, steps: &[(T, u32)]) -> u32 {
    steps
        .iter()
        .filter(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| points)
        .sum()
}

fn flag(set: bool, points: u32) -> u32 {
    if set {
        points
    } else {
        0
    }
}

fn present(value: &str) -> u32 {
    flag(!value.is_empty(), PROOF_POINTS)
}

fn role(profile: &ApplicantProfile) -> u32 {
    match profile.role {
        Some(PartnerRole::Distributor) => ROLE_DISTRIBUTOR_POINTS,
        Some(PartnerRole::Referral) => ROLE_REFERRAL_POINTS,
        Some(PartnerRole::Both) => ROLE_BOTH_POINTS,
        None => 0,
    }
}

fn geography_breadth(profile: &ApplicantProfile) -> u32 {
    stacked(profile.geography.covered_regions().len(), &GEOGRAPHY_STEPS)
}

fn language_breadth(profile: &ApplicantProfile) -> u32 {
    let languages = &profile.languages;
    let spoken = [languages.english, languages.french, languages.spanish]
        .into_iter()
        .filter(|spoken| *spoken)
        .count() as u32;
    (spoken * LANGUAGE_POINTS).min(LANGUAGE_CAP)
}

fn network_size(profile: &ApplicantProfile) -> u32 {
    stacked(profile.network_counts.total(), &NETWORK_STEPS)
}

fn monthly_doors(profile: &ApplicantProfile) -> u32 {
    stacked(profile.activity.monthly_doors_serviced, &DOORS_STEPS)
}

fn decision_makers(profile: &ApplicantProfile) -> u32 {
    stacked(profile.activity.decision_makers, &DECISION_MAKER_STEPS)
}

fn monthly_sell_in(profile: &ApplicantProfile) -> u32 {
    stacked(profile.activity.avg_monthly_sell_in_cad, &SELL_IN_STEPS)
}

fn deals_closed(profile: &ApplicantProfile) -> u32 {
    stacked(profile.activity.deals_last_12mo, &DEALS_STEPS)
}

fn chain_access(profile: &ApplicantProfile) -> u32 {
    (profile.chain_access.named_count() * CHAIN_POINTS).min(CHAIN_CAP)
}

fn warehouse_size(profile: &ApplicantProfile) -> u32 {
    stacked(profile.logistics.warehouse_sq_ft, &WAREHOUSE_STEPS)
}

fn cold_chain(profile: &ApplicantProfile) -> u32 {
    flag(profile.logistics.cold_chain, COLD_CHAIN_POINTS)
}

fn truck_fleet(profile: &ApplicantProfile) -> u32 {
    flag(profile.logistics.trucks_owned >= FLEET_MIN_TRUCKS, FLEET_POINTS)
}

fn logistics_independence(profile: &ApplicantProfile) -> u32 {
    flag(!profile.logistics.third_party_logistics, OWN_LOGISTICS_POINTS)
}

fn cfia_importer(profile: &ApplicantProfile) -> u32 {
    flag(profile.compliance.cfia_importer, CFIA_IMPORTER_POINTS)
}

fn fda_registered(profile: &ApplicantProfile) -> u32 {
    flag(profile.compliance.fda_registered, FDA_REGISTERED_POINTS)
}

fn gs1_barcodes(profile: &ApplicantProfile) -> u32 {
    flag(profile.compliance.gs1, GS1_POINTS)
}

fn coi_insurance(profile: &ApplicantProfile) -> u32 {
    flag(profile.compliance.coi_insurance, COI_INSURANCE_POINTS)
}

fn linkedin(profile: &ApplicantProfile) -> u32 {
    present(&profile.proof.linkedin)
}

fn first_reference(profile: &ApplicantProfile) -> u32 {
    present(&profile.proof.reference1)
}

fn second_reference(profile: &ApplicantProfile) -> u32 {
    present(&profile.proof.reference2)
}

fn category_fit(profile: &ApplicantProfile) -> u32 {
    let categories = &profile.categories;
    [categories.skincare, categories.beauty, categories.afro_grocery]
        .into_iter()
        .map(|bonus| flag(bonus, CATEGORY_FIT_POINTS))
        .sum()
}
