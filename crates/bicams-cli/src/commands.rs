use std::borrow::Cow;
use std::io::Write;
use std::path::{Path, PathBuf};

use bicams_core::models::locale::Locale;
use bicams_core::models::report::Report;
use bicams_core::models::result::ScoreOutcome;
use bicams_export::error::ExportError;
use bicams_export::export_report;
use bicams_norms::bands::band;
use bicams_norms::scoring::score_outcomes;
use bicams_norms::{NormsTable, brazil};
use serde_json::json;

use crate::cli::{ReportArgs, ScoreArgs, ScoreOutput};
use crate::config::{self, BicamsConfig};
use crate::output::write_atomic;

/// The norms in effect: `--norms`, then the config file, then the built-in table.
pub fn active_norms(
    cli_path: Option<&Path>,
    config: &BicamsConfig,
) -> eyre::Result<Cow<'static, NormsTable>> {
    match cli_path.or(config.norms_path.as_deref()) {
        Some(path) => Ok(Cow::Owned(NormsTable::load(path)?)),
        None => Ok(Cow::Borrowed(brazil())),
    }
}

pub fn print_norms(norms: &NormsTable, out: &mut impl Write) -> eyre::Result<()> {
    serde_json::to_writer_pretty(&mut *out, norms)?;
    writeln!(out)?;
    Ok(())
}

pub fn init_config(path: &Path, force: bool, out: &mut impl Write) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(&BicamsConfig::default(), path)?;
    writeln!(out, "wrote {}", path.display())?;
    Ok(())
}

pub fn show_config(config: &BicamsConfig, out: &mut impl Write) -> eyre::Result<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}

struct ResultLabels {
    percentile: &'static str,
    classification: &'static str,
    out_of_range: &'static str,
}

impl ResultLabels {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => ResultLabels {
                percentile: "Percentile",
                classification: "Classification",
                out_of_range: "outside the normative table, not classified",
            },
            Locale::PtBr => ResultLabels {
                percentile: "Percentil",
                classification: "Classificação",
                out_of_range: "fora da tabela normativa, não classificado",
            },
        }
    }
}

/// Score the given raw results and print them.
///
/// Tests that were not administered print nothing. Scores outside the
/// conversion table print a notice instead of a result.
pub fn score(
    args: &ScoreArgs,
    norms: &NormsTable,
    config: &BicamsConfig,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let locale = args.subject.locale.unwrap_or(config.locale);
    let subject = args.subject.subject("");
    let outcomes = score_outcomes(norms, &subject, &args.subject.raw_scores());

    match args.format {
        ScoreOutput::Text => {
            let labels = ResultLabels::for_locale(locale);
            for (measure, outcome) in &outcomes {
                match outcome {
                    ScoreOutcome::Scored(result) => {
                        let tier = band(result.classification);
                        writeln!(out, "{}", measure.display_name(locale))?;
                        writeln!(out, "  Z-score: {}", result.z_display())?;
                        writeln!(out, "  {}: {}", labels.percentile, result.percentile_display())?;
                        writeln!(
                            out,
                            "  {}: {}",
                            labels.classification,
                            tier.long_label(locale)
                        )?;
                    }
                    ScoreOutcome::OutOfRange { raw_score } => {
                        writeln!(
                            out,
                            "{}: {raw_score} {}",
                            measure.display_name(locale),
                            labels.out_of_range
                        )?;
                    }
                    ScoreOutcome::NotAdministered => {}
                }
            }
        }
        ScoreOutput::Json => {
            let mut results = Vec::new();
            let mut out_of_range = Vec::new();
            for (measure, outcome) in outcomes {
                match outcome {
                    ScoreOutcome::Scored(result) => {
                        let tier = band(result.classification);
                        results.push(json!({
                            "measure": measure,
                            "raw_score": result.raw_score,
                            "scaled_score": result.scaled_score,
                            "predicted_scaled_score": result.predicted_scaled_score,
                            "z_score": result.z_score,
                            "percentile": result.percentile,
                            "classification": result.classification,
                            "label": tier.long_label(locale),
                            "score_range": tier.score_range,
                            "percentile_range": tier.percentile_range,
                            "color": tier.color.hex(),
                        }));
                    }
                    ScoreOutcome::OutOfRange { raw_score } => {
                        out_of_range.push(json!({ "measure": measure, "raw_score": raw_score }));
                    }
                    ScoreOutcome::NotAdministered => {}
                }
            }
            let body = json!({ "results": results, "out_of_range": out_of_range });
            serde_json::to_writer_pretty(&mut *out, &body)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Score and write a report file. Returns the written path, or `None`
/// when no test produced a result (a warning, not a failure).
pub fn report(
    args: &ReportArgs,
    norms: &NormsTable,
    config: &BicamsConfig,
    out: &mut impl Write,
) -> eyre::Result<Option<PathBuf>> {
    let subject = args.subject.subject(&args.name);
    let results = score_outcomes(norms, &subject, &args.subject.raw_scores())
        .into_iter()
        .filter_map(|(_, outcome)| outcome.into_result())
        .collect();
    let report = Report {
        subject,
        test_date: args.date.unwrap_or_else(|| jiff::Zoned::now().date()),
        results,
    };

    let options = config.render_options(args.subject.locale);
    let document = match export_report(&report, args.format.into(), &options, &config.styles) {
        Ok(document) => document,
        Err(ExportError::NoResults) => {
            tracing::warn!(patient = %report.subject.name, "no tests scored, report not written");
            let message = match options.locale {
                Locale::En => "warning: no tests were administered; no report written",
                Locale::PtBr => "aviso: nenhum teste foi realizado; relatório não gerado",
            };
            writeln!(out, "{message}")?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let path = write_atomic(&dir, &document.file_name, &document.bytes)?;
    tracing::info!(path = %path.display(), "report written");
    writeln!(out, "{}", path.display())?;
    Ok(Some(path))
}
