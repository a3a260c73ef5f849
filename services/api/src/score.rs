use crate::infra::{parse_profile_arg, scoring_config};
use attrition_radar::error::AppError;
use attrition_radar::workflows::attrition::{
    apply_profile_document, current_reference_year, process_csv, read_profile_document,
    write_csv, write_json, BatchResult, BatchSummary, EmployeeRecord, ScoringConfig,
};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with one employee per row
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Scoring configuration JSON (defaults to RADAR_SCORING_CONFIG or built-in values)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
    /// Write results to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Number of highest-risk employees listed in the table summary
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Attach a profile text export to an employee, as NAME=PATH (repeatable)
    #[arg(long = "profile", value_parser = parse_profile_arg)]
    pub(crate) profiles: Vec<(String, PathBuf)>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        input,
        config,
        format,
        output,
        top,
        profiles,
    } = args;

    let config = scoring_config(config)?;
    let reader = BufReader::new(File::open(&input)?);
    let mut result = process_csv(reader, &config)?;

    for error in &result.errors {
        eprintln!(
            "skipped row {} ({}): {}",
            error.row, error.identifier, error.message
        );
    }

    let reference_year = current_reference_year();
    for warning in attach_profiles(&mut result, &profiles, reference_year, &config) {
        eprintln!("{warning}");
    }

    let mut sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Table => {
            let summary = BatchSummary::from_records(&result.records, &config, top);
            render_table(&mut sink, &result.records, &config)?;
            render_summary(&mut sink, &summary)?;
        }
        OutputFormat::Csv => write_csv(&mut sink, &result.records, &config)?,
        OutputFormat::Json => {
            write_json(&mut sink, &result.records, &config)?;
            writeln!(sink)?;
        }
    }
    sink.flush()?;
    Ok(())
}

/// Attach each profile to its employee. A profile that cannot be read or
/// yields no signals is skipped and reported; the others still apply.
fn attach_profiles(
    result: &mut BatchResult,
    profiles: &[(String, PathBuf)],
    reference_year: i32,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for (name, path) in profiles {
        let Some(record) = result
            .records
            .iter_mut()
            .find(|record| record.attributes().name.eq_ignore_ascii_case(name))
        else {
            warnings.push(format!("no scored employee named '{name}'; profile ignored"));
            continue;
        };

        let applied = read_profile_document(path)
            .and_then(|text| apply_profile_document(record, &text, reference_year, config));
        if let Err(err) = applied {
            warnings.push(format!("profile for '{name}' ignored: {err}"));
        }
    }
    warnings
}

pub(crate) fn render_table<W: Write>(
    out: &mut W,
    records: &[EmployeeRecord],
    config: &ScoringConfig,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<16} {:>6}  {:<7} Top factor",
        "Employee", "Department", "Score", "Tier"
    )?;
    for record in records {
        let attributes = record.attributes();
        let top_factor = record
            .factors()
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<24} {:<16} {:>6.1}  {:<7} {}",
            attributes.name,
            attributes.department,
            record.reported_score(),
            record.tier(config),
            top_factor
        )?;
    }
    Ok(())
}

pub(crate) fn render_summary<W: Write>(out: &mut W, summary: &BatchSummary) -> io::Result<()> {
    writeln!(
        out,
        "\n{} employees scored | average score {:.1}",
        summary.total, summary.average_score
    )?;
    let tiers: Vec<String> = summary
        .tiers
        .iter()
        .map(|entry| format!("{} {}", entry.tier_label, entry.count))
        .collect();
    writeln!(out, "Tiers: {}", tiers.join(" | "))?;

    if !summary.departments.is_empty() {
        writeln!(out, "Departments by average score:")?;
        for department in &summary.departments {
            writeln!(
                out,
                "  - {}: {} employees | avg {:.1} | {} high risk",
                department.department,
                department.employees,
                department.average_score,
                department.high_risk
            )?;
        }
    }

    if !summary.highest_risk.is_empty() {
        writeln!(out, "Highest risk:")?;
        for entry in &summary.highest_risk {
            writeln!(
                out,
                "  - {} ({}, {}) {:.1} {}",
                entry.name, entry.title, entry.department, entry.score, entry.risk_tier
            )?;
        }
    }
    Ok(())
}
