//! Plain-text intake summary handed to the notification adapter.

use std::fmt::Display;

use super::domain::{IntakeSubmission, Languages};
use super::repository::IntakeRecord;

pub const SUMMARY_TITLE: &str = "Partner Intake Summary";

pub fn subject(submission: &IntakeSubmission) -> String {
    let company = submission.company.trim();
    let company = if company.is_empty() {
        "Unknown Company"
    } else {
        company
    };
    format!("New Partner Intake - {company}")
}

/// Render every populated field of a stored intake, grouped into sections.
pub fn render_summary(record: &IntakeRecord) -> String {
    let submission = &record.submission;
    let profile = &submission.profile;
    let mut doc = SummaryDocument::new();

    doc.line(SUMMARY_TITLE);
    doc.line(format!(
        "Submitted: {}",
        record.submitted_at.format("%B %-d, %Y %H:%M UTC")
    ));

    doc.section("Contact Information");
    doc.field("Company Name", &submission.company);
    doc.field("First Name", &submission.first_name);
    doc.field("Last Name", &submission.last_name);
    doc.field("Email", &submission.email);
    doc.field("Phone", &submission.phone);
    doc.field("Website", &submission.website);
    doc.field("Role", profile.role.map(|role| role.label()).unwrap_or(""));
    doc.field("Country", profile.geography.country.label());
    doc.field("City", &submission.city);
    doc.field("Province/State", &submission.province_state);
    doc.field("Postal/Zip Code", &submission.postal_zip);

    doc.section("Coverage Area");
    doc.field("Coverage Description", &submission.coverage_description);
    doc.field("Coverage Provinces", profile.geography.coverage_provinces.join(", "));
    doc.field("Coverage States", profile.geography.coverage_states.join(", "));
    doc.field("Languages", spoken_languages(&profile.languages).join(", "));

    doc.section("Network & Business Metrics");
    let networks: Vec<String> = profile
        .network_counts
        .entries()
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(channel, count)| format!("{channel}: {count}"))
        .collect();
    doc.field("Network Counts", networks.join(", "));
    doc.field("Monthly Doors Serviced", profile.activity.monthly_doors_serviced);
    doc.field("Decision Makers", profile.activity.decision_makers);
    if profile.activity.avg_monthly_sell_in_cad > 0.0 {
        doc.field(
            "Avg Monthly Sell-In (CAD)",
            format_currency(profile.activity.avg_monthly_sell_in_cad),
        );
    }
    doc.field("Deals Last 12 Months", profile.activity.deals_last_12mo);
    let mut chains: Vec<&str> = profile
        .chain_access
        .named()
        .iter()
        .filter_map(|(name, flag)| flag.then_some(*name))
        .collect();
    if !profile.chain_access.other.trim().is_empty() {
        chains.push(profile.chain_access.other.trim());
    }
    doc.field("Chain Access", chains.join(", "));

    doc.section("Logistics & Compliance");
    let logistics = &profile.logistics;
    doc.field("Warehouse Sq Ft", logistics.warehouse_sq_ft);
    doc.field("Cold Chain", yes_no(logistics.cold_chain));
    doc.field("Trucks Owned", logistics.trucks_owned);
    doc.field("Third Party Logistics", yes_no(logistics.third_party_logistics));
    let compliance = &profile.compliance;
    let certifications: Vec<&str> = [
        ("CFIA Importer", compliance.cfia_importer),
        ("FDA Registered", compliance.fda_registered),
        ("GS1", compliance.gs1),
        ("COI Insurance", compliance.coi_insurance),
    ]
    .into_iter()
    .filter_map(|(label, held)| held.then_some(label))
    .collect();
    doc.field("Compliance Certifications", certifications.join(", "));

    doc.section("Product Categories & Services");
    let categories: Vec<&str> = profile
        .categories
        .entries()
        .iter()
        .filter_map(|(label, selected)| selected.then_some(*label))
        .collect();
    doc.field("Product Categories", categories.join(", "));
    doc.field("Categories Other", &submission.categories_other);
    doc.field("Exclusivity Interest", submission.exclusivity_interest.label());
    doc.field("MOQ Capacity Units", submission.moq_capacity_units);
    doc.field("Requested Services", submission.requested_services.titles().join(", "));
    doc.field("Service Notes", &submission.service_notes);

    doc.section("References & Additional Information");
    doc.field("LinkedIn", &profile.proof.linkedin);
    doc.field("Reference 1", &profile.proof.reference1);
    doc.field("Reference 2", &profile.proof.reference2);
    doc.field("How did you hear about us?", &submission.heard_from);
    doc.field("Computed Score", record.score);
    doc.field("Computed Tier", record.tier);
    doc.field("Submitted At", record.submitted_at.to_rfc3339());

    doc.finish()
}

struct SummaryDocument {
    lines: Vec<String>,
}

impl SummaryDocument {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn section(&mut self, title: &str) {
        self.lines.push(String::new());
        self.lines.push(format!("== {title} =="));
    }

    fn field(&mut self, label: &str, value: impl Display) {
        let value = value.to_string();
        let value = value.trim();
        if !value.is_empty() {
            self.lines.push(format!("{label}: {value}"));
        }
    }

    fn finish(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

fn spoken_languages(languages: &Languages) -> Vec<&str> {
    let mut spoken: Vec<&str> = [
        ("English", languages.english),
        ("French", languages.french),
        ("Spanish", languages.spanish),
    ]
    .into_iter()
    .filter_map(|(name, spoken)| spoken.then_some(name))
    .collect();
    if !languages.other.trim().is_empty() {
        spoken.push(languages.other.trim());
    }
    spoken
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// `$12,500` for whole amounts, `$12,500.75` otherwise.
fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("${dollars}"),
        fraction => format!("${dollars}.{fraction:02}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
