use crate::infra::{InMemoryIntakeRepository, OutboxNotificationPublisher};
use clap::Args;
use partner_intake::config::AppConfig;
use partner_intake::error::AppError;
use partner_intake::intake::{
    scoring, ActivityMetrics, ApplicantProfile, ChainAccess, ComplianceCertifications, Country,
    Geography, IntakeFilter, IntakeSubmission, Languages, Logistics, NetworkCounts,
    PartnerIntakeService, PartnerRole, ProductCategories, ProofReferences, Qualification,
    RequestedServices,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding an applicant profile or a complete intake form
    pub(crate) path: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full summary document attached to the notification
    #[arg(long)]
    pub(crate) show_document: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.path)?;
    let profile: ApplicantProfile = serde_json::from_str(&raw)?;
    let qualification = scoring::assess(&profile);

    println!("Partner qualification for {}", args.path.display());
    render_qualification(&qualification);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    println!("Partner intake demo");
    let repository = Arc::new(InMemoryIntakeRepository::default());
    let notifier = Arc::new(OutboxNotificationPublisher::default());
    let service = PartnerIntakeService::new(
        repository,
        notifier.clone(),
        config.notification.clone(),
    );

    let submission = demo_submission();
    println!("\nLive preview while the form is filled in");
    render_qualification(&service.preview(&submission.profile));

    let record = service.submit(submission)?;
    let view = record.status_view();
    println!(
        "\n- Received intake {} from {} -> {} ({})",
        view.intake_id.0, view.company, view.score, view.tier
    );
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("  Public status payload:\n{}", json),
        Err(err) => println!("  Public status payload unavailable: {}", err),
    }

    let listed = service.list(&IntakeFilter {
        min_score: Some(record.tier.floor()),
        ..IntakeFilter::default()
    })?;
    println!(
        "  Intakes at or above the {} floor: {}",
        record.tier,
        listed.len()
    );

    let events = notifier.events();
    if events.is_empty() {
        println!("  Notifications: none dispatched");
    } else {
        println!("  Notifications:");
        for notification in events {
            println!(
                "    - template={} from={} to={} subject=\"{}\"",
                notification.template,
                notification.sender,
                notification.recipients.join(", "),
                notification.subject
            );
            if args.show_document {
                println!("\n{}", notification.document);
            }
        }
    }

    Ok(())
}

fn render_qualification(qualification: &Qualification) {
    println!(
        "- Score {} / 100 -> {} tier",
        qualification.score, qualification.tier
    );
    if qualification.raw_total > u32::from(qualification.score.value()) {
        println!("  Raw total {} capped at 100", qualification.raw_total);
    }
    println!("  Next step: {}", qualification.follow_up());
    if qualification.components.is_empty() {
        println!("  No scoring signals present yet");
        return;
    }
    println!("  Breakdown:");
    for component in &qualification.components {
        println!("    - {}: +{}", component.label(), component.points);
    }
}

fn demo_submission() -> IntakeSubmission {
    IntakeSubmission {
        company: "Harbourfront Provisions".to_string(),
        website: "https://harbourfront.example".to_string(),
        first_name: "Kwame".to_string(),
        last_name: "Boateng".to_string(),
        email: "kwame@harbourfront.example".to_string(),
        phone: "+1 902 555 0110".to_string(),
        city: "Halifax".to_string(),
        province_state: "NS".to_string(),
        coverage_description: "Atlantic Canada grocery and pharmacy independents".to_string(),
        profile: ApplicantProfile {
            role: Some(PartnerRole::Distributor),
            geography: Geography {
                country: Country::Canada,
                coverage_provinces: ["NS", "NB", "PE", "NL"]
                    .iter()
                    .map(|code| code.to_string())
                    .collect(),
                coverage_states: Vec::new(),
            },
            languages: Languages {
                english: true,
                french: true,
                ..Languages::default()
            },
            network_counts: NetworkCounts {
                independents: 25,
                pharmacies: 10,
                convenience: 5,
                ..NetworkCounts::default()
            },
            activity: ActivityMetrics {
                monthly_doors_serviced: 70.0,
                decision_makers: 20.0,
                avg_monthly_sell_in_cad: 42_000.0,
                deals_last_12mo: 9.0,
            },
            chain_access: ChainAccess {
                sobeys: true,
                ..ChainAccess::default()
            },
            logistics: Logistics {
                warehouse_sq_ft: 4_500.0,
                cold_chain: false,
                trucks_owned: 2,
                third_party_logistics: true,
            },
            compliance: ComplianceCertifications {
                cfia_importer: true,
                ..ComplianceCertifications::default()
            },
            categories: ProductCategories {
                afro_grocery: true,
                spices_sauces: true,
                ..ProductCategories::default()
            },
            proof: ProofReferences {
                linkedin: "https://www.linkedin.com/company/harbourfront-provisions".to_string(),
                ..ProofReferences::default()
            },
        },
        moq_capacity_units: 250,
        requested_services: RequestedServices {
            retail_ready: true,
            trade_readiness: true,
            ..RequestedServices::default()
        },
        heard_from: "Referral from an existing brand".to_string(),
        agree_contact: true,
        agree_privacy: true,
        ..IntakeSubmission::default()
    }
}
