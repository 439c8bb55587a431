use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored intakes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntakeId(pub String);

/// How the applicant intends to work with the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnerRole {
    Distributor,
    Referral,
    Both,
}

impl PartnerRole {
    pub const fn label(self) -> &'static str {
        match self {
            PartnerRole::Distributor => "distributor",
            PartnerRole::Referral => "referral",
            PartnerRole::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Canada,
    #[serde(rename = "United States")]
    UnitedStates,
}

impl Country {
    pub const fn label(self) -> &'static str {
        match self {
            Country::Canada => "Canada",
            Country::UnitedStates => "United States",
        }
    }

    /// Sub-national codes an applicant may list as covered for this country.
    pub const fn region_codes(self) -> &'static [&'static str] {
        match self {
            Country::Canada => &PROVINCES_CA,
            Country::UnitedStates => &STATES_US,
        }
    }
}

pub const PROVINCES_CA: [&str; 13] = [
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

pub const STATES_US: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

/// Country plus the covered provinces/states. Both lists are kept so a form can
/// switch country without losing input; only the one matching `country` counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Geography {
    pub country: Country,
    pub coverage_provinces: Vec<String>,
    pub coverage_states: Vec<String>,
}

impl Geography {
    pub fn covered_regions(&self) -> &[String] {
        match self.country {
            Country::Canada => &self.coverage_provinces,
            Country::UnitedStates => &self.coverage_states,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Languages {
    pub english: bool,
    pub french: bool,
    pub spanish: bool,
    pub other: String,
}

/// Doors reachable through each retail channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkCounts {
    pub independents: u32,
    pub chains: u32,
    pub convenience: u32,
    pub beauty_supply: u32,
    pub pharmacies: u32,
    pub food_service: u32,
    pub wholesalers: u32,
    pub marketplaces: u32,
    pub specialty: u32,
}

impl NetworkCounts {
    pub fn total(&self) -> u64 {
        self.entries()
            .iter()
            .map(|(_, count)| u64::from(*count))
            .sum()
    }

    pub fn entries(&self) -> [(&'static str, u32); 9] {
        [
            ("independents", self.independents),
            ("chains", self.chains),
            ("convenience", self.convenience),
            ("beautySupply", self.beauty_supply),
            ("pharmacies", self.pharmacies),
            ("foodService", self.food_service),
            ("wholesalers", self.wholesalers),
            ("marketplaces", self.marketplaces),
            ("specialty", self.specialty),
        ]
    }
}

/// Current commercial activity declared by the applicant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityMetrics {
    pub monthly_doors_serviced: f64,
    pub decision_makers: f64,
    #[serde(rename = "avgMonthlySellInCAD")]
    pub avg_monthly_sell_in_cad: f64,
    #[serde(rename = "dealsLast12mo")]
    pub deals_last_12mo: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainAccess {
    pub walmart: bool,
    pub costco: bool,
    pub loblaws: bool,
    pub sobeys: bool,
    pub metro: bool,
    pub kroger: bool,
    pub amazon: bool,
    pub other: String,
}

impl ChainAccess {
    /// Named chains only; the free-text `other` entry is informational.
    pub fn named(&self) -> [(&'static str, bool); 7] {
        [
            ("walmart", self.walmart),
            ("costco", self.costco),
            ("loblaws", self.loblaws),
            ("sobeys", self.sobeys),
            ("metro", self.metro),
            ("kroger", self.kroger),
            ("amazon", self.amazon),
        ]
    }

    pub fn named_count(&self) -> u32 {
        self.named().iter().filter(|(_, flag)| *flag).count() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logistics {
    pub warehouse_sq_ft: f64,
    pub cold_chain: bool,
    pub trucks_owned: u32,
    pub third_party_logistics: bool,
}

impl Default for Logistics {
    fn default() -> Self {
        Self {
            warehouse_sq_ft: 0.0,
            cold_chain: false,
            trucks_owned: 0,
            third_party_logistics: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplianceCertifications {
    pub cfia_importer: bool,
    pub fda_registered: bool,
    pub gs1: bool,
    pub coi_insurance: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductCategories {
    pub afro_grocery: bool,
    pub beverages: bool,
    pub spices_sauces: bool,
    pub snacks: bool,
    pub frozen: bool,
    pub fresh_produce: bool,
    pub beauty: bool,
    pub skincare: bool,
    pub haircare: bool,
    pub home: bool,
    pub textiles: bool,
    #[serde(rename = "pharmacyOTC")]
    pub pharmacy_otc: bool,
    pub other: bool,
}

impl ProductCategories {
    pub fn entries(&self) -> [(&'static str, bool); 13] {
        [
            ("Afro-Caribbean Grocery", self.afro_grocery),
            ("Beverages (non-alcoholic)", self.beverages),
            ("Spices, Sauces & Condiments", self.spices_sauces),
            ("Snacks & Confectionery", self.snacks),
            ("Frozen & Ready-to-Eat", self.frozen),
            ("Fresh Produce", self.fresh_produce),
            ("Beauty & Personal Care", self.beauty),
            ("Skincare & Hydration", self.skincare),
            ("Hair Care", self.haircare),
            ("Home & Cleaning", self.home),
            ("Textiles & Apparel", self.textiles),
            ("Pharmacy (OTC only)", self.pharmacy_otc),
            ("Other", self.other),
        ]
    }
}

/// Public proof the applicant offers; only presence is scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofReferences {
    pub linkedin: String,
    pub reference1: String,
    pub reference2: String,
}

/// Everything the qualification engine reads. Absent fields deserialize to
/// zero/false/empty so partially completed forms can be scored live.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantProfile {
    pub role: Option<PartnerRole>,
    #[serde(flatten)]
    pub geography: Geography,
    pub languages: Languages,
    pub network_counts: NetworkCounts,
    #[serde(flatten)]
    pub activity: ActivityMetrics,
    pub chain_access: ChainAccess,
    pub logistics: Logistics,
    pub compliance: ComplianceCertifications,
    pub categories: ProductCategories,
    #[serde(flatten)]
    pub proof: ProofReferences,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Final,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusivityInterest {
    #[default]
    No,
    Regional,
    National,
}

impl ExclusivityInterest {
    pub const fn label(self) -> &'static str {
        match self {
            ExclusivityInterest::No => "no",
            ExclusivityInterest::Regional => "regional",
            ExclusivityInterest::National => "national",
        }
    }
}

/// Quote requests for the service bundles offered alongside the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestedServices {
    pub starter_brand_kit: bool,
    pub retail_ready: bool,
    pub ecom_launch: bool,
    pub photo_video: bool,
    pub social_media: bool,
    pub trade_readiness: bool,
}

impl RequestedServices {
    pub fn titles(&self) -> Vec<&'static str> {
        [
            ("Starter Brand Kit", self.starter_brand_kit),
            ("Retail-Ready Packaging & Compliance", self.retail_ready),
            ("E-commerce Launch", self.ecom_launch),
            ("Photo & Video Kit", self.photo_video),
            ("Social Media Pack", self.social_media),
            ("Trade Readiness", self.trade_readiness),
        ]
        .into_iter()
        .filter_map(|(title, requested)| requested.then_some(title))
        .collect()
    }
}

/// Full form payload: contact and quote details around the scored profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub submission_status: SubmissionStatus,
    pub company: String,
    pub website: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub province_state: String,
    pub postal_zip: String,
    pub coverage_description: String,
    #[serde(flatten)]
    pub profile: ApplicantProfile,
    pub categories_other: String,
    pub exclusivity_interest: ExclusivityInterest,
    pub moq_capacity_units: u32,
    pub requested_services: RequestedServices,
    pub service_notes: String,
    pub heard_from: String,
    pub agree_contact: bool,
    pub agree_privacy: bool,
}
