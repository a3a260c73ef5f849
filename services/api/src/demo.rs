use crate::infra::scoring_config;
use crate::score::{render_summary, render_table};
use attrition_radar::error::AppError;
use attrition_radar::workflows::attrition::{
    apply_profile_document, breakdown, current_reference_year, process_csv, BatchSummary,
    Summarizer, TemplateSummarizer,
};
use clap::Args;
use std::io::{self, Cursor};
use std::path::PathBuf;

const DEMO_ROSTER: &str = "Name,Department,Job Title,Tenure,PDI,Trainings,Absences\n\
Ana Souza,Finance,Senior Analyst,7.0,no,0,22\n\
Bruno Lima,Finance,Analyst,2.5,yes,4,2\n\
Carla Dias,Sales,Account Executive,0.3,no,0,1\n\
Diego Alves,Support,Support Agent,3,yes,1,6\n\
Eva Rocha,Engineering,Developer,\"4,5\",no,0,0\n\
Fabio Reis,Engineering,Tech Lead,6,yes,5,0\n\
Gabriela Nunes,Sales,Sales Manager,1.5,sim,2,4\n\
Helena Costa,Support,Team Lead,9,yes,3,11\n";

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Scoring configuration JSON (defaults to RADAR_SCORING_CONFIG or built-in values)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Number of highest-risk employees to narrate
    #[arg(long, default_value_t = 3)]
    pub(crate) top: usize,
    /// Year treated as "now" when reading the sample profile export
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        config,
        top,
        reference_year,
    } = args;

    let config = scoring_config(config)?;
    let reference_year = reference_year.unwrap_or_else(current_reference_year);

    println!("Attrition radar demo");
    let mut result = process_csv(Cursor::new(DEMO_ROSTER), &config)?;

    let mut stdout = io::stdout().lock();
    render_table(&mut stdout, &result.records, &config)?;
    let summary = BatchSummary::from_records(&result.records, &config, top);
    render_summary(&mut stdout, &summary)?;
    drop(stdout);

    println!("\nScore breakdown for the highest-risk employee:");
    if let Some(leader) = summary.highest_risk.first() {
        if let Some(record) = result
            .records
            .iter()
            .find(|record| record.attributes().name == leader.name)
        {
            let parts = breakdown(record.employee(), &config);
            println!(
                "- {}: tenure {:.1} | development plan {:.1} | training {:.1} | absence {:.1}",
                leader.name, parts.tenure, parts.development_plan, parts.training, parts.absence
            );
            println!(
                "  flat bonuses {:.1} | raw total {:.1} | reported {:.1}",
                parts.flat_total(),
                parts.weighted_total() + parts.flat_total(),
                parts.total()
            );
        }
    }

    println!("\nNarrative insights:");
    let summarizer = TemplateSummarizer;
    for entry in &summary.highest_risk {
        let Some(record) = result
            .records
            .iter()
            .find(|record| record.attributes().name == entry.name)
        else {
            continue;
        };
        match summarizer.summarize(record, record.tier(&config)) {
            Ok(text) => println!("- {text}"),
            Err(err) => println!("- {}: narrative unavailable ({err})", entry.name),
        }
    }

    println!("\nProfile signal check (sample export for Fabio Reis):");
    let profile = sample_profile(reference_year);
    if let Some(record) = result
        .records
        .iter_mut()
        .find(|record| record.attributes().name == "Fabio Reis")
    {
        let before = record.score();
        match apply_profile_document(record, &profile, reference_year, &config) {
            Ok(signals) => {
                println!(
                    "- signals: recently active {} | frequent changes {} | recent certifications {}",
                    signals.recently_active, signals.frequent_changes, signals.recent_certifications
                );
                println!(
                    "- score {:.1} -> {:.1} ({})",
                    before,
                    record.score(),
                    record.tier(&config)
                );
                for factor in record.factors() {
                    println!("  - {factor}");
                }
            }
            Err(err) => println!("- profile unreadable: {err}"),
        }
    }

    Ok(())
}

fn sample_profile(reference_year: i32) -> String {
    format!(
        "Fabio Reis | Tech Lead\n\
#OpenToWork\n\
Experience\n\
Northwind Labs, Tech Lead, {} - present\n\
Contoso, Senior Developer, {} - {}\n\
Fabrikam, Developer, {} - {}\n\
Certifications\n\
Certified Kubernetes Administrator ({})\n",
        reference_year - 1,
        reference_year - 3,
        reference_year - 1,
        reference_year - 4,
        reference_year - 3,
        reference_year
    )
}
