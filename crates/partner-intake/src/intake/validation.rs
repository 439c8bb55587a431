use super::domain::{Country, IntakeSubmission};

/// Validation errors raised before a submission reaches the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("company name is required")]
    MissingCompany,
    #[error("contact first and last name are required")]
    MissingContactName,
    #[error("email is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("privacy policy consent is required")]
    PrivacyConsentMissing,
    #[error("'{code}' is not a recognised region code for {country}")]
    UnknownRegion { country: &'static str, code: String },
    #[error("{field} must be a finite, non-negative number (found {value})")]
    InvalidAmount { field: &'static str, value: f64 },
}

/// Guard responsible for rejecting malformed submissions at the boundary.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    require_privacy_consent: bool,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeGuard {
    pub fn new() -> Self {
        Self {
            require_privacy_consent: true,
        }
    }

    /// Guard for internal imports where consent was captured out of band.
    pub fn without_consent_check() -> Self {
        Self {
            require_privacy_consent: false,
        }
    }

    pub fn validate(&self, submission: &IntakeSubmission) -> Result<(), IntakeViolation> {
        if submission.company.trim().is_empty() {
            return Err(IntakeViolation::MissingCompany);
        }

        if submission.first_name.trim().is_empty() || submission.last_name.trim().is_empty() {
            return Err(IntakeViolation::MissingContactName);
        }

        let email = submission.email.trim();
        if email.is_empty() {
            return Err(IntakeViolation::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(IntakeViolation::InvalidEmail(email.to_string()));
        }

        if self.require_privacy_consent && !submission.agree_privacy {
            return Err(IntakeViolation::PrivacyConsentMissing);
        }

        let geography = &submission.profile.geography;
        validate_regions(geography.country, geography.covered_regions())?;

        let activity = &submission.profile.activity;
        validate_amount("monthlyDoorsServiced", activity.monthly_doors_serviced)?;
        validate_amount("decisionMakers", activity.decision_makers)?;
        validate_amount("avgMonthlySellInCAD", activity.avg_monthly_sell_in_cad)?;
        validate_amount("dealsLast12mo", activity.deals_last_12mo)?;
        validate_amount("warehouseSqFt", submission.profile.logistics.warehouse_sq_ft)?;

        Ok(())
    }
}

fn validate_regions(country: Country, regions: &[String]) -> Result<(), IntakeViolation> {
    let known = country.region_codes();
    match regions
        .iter()
        .find(|code| !known.contains(&code.trim().to_ascii_uppercase().as_str()))
    {
        Some(code) => Err(IntakeViolation::UnknownRegion {
            country: country.label(),
            code: code.clone(),
        }),
        None => Ok(()),
    }
}

fn validate_amount(field: &'static str, value: f64) -> Result<(), IntakeViolation> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(IntakeViolation::InvalidAmount { field, value })
    }
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
