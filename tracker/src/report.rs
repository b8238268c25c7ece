//! Render workout summaries and write them to an output sink.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::message::InfoMessage;
use crate::core::training::Training;
use crate::dispatch::Package;
use crate::error::TrainingError;
use crate::io::config::UnknownPolicy;

/// Line format for rendered reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed human-readable template.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Render a summary as a single line (no trailing newline).
pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.message()),
        OutputFormat::Json => serde_json::to_string(info).context("serialize report json"),
    }
}

/// Summarize `training` and write one report line to `out`.
pub fn report<T, W>(training: &T, format: OutputFormat, out: &mut W) -> Result<InfoMessage>
where
    T: Training + ?Sized,
    W: Write,
{
    let info = training.show_training_info();
    let line = render(&info, format)?;
    writeln!(out, "{line}").context("write report line")?;
    Ok(info)
}

/// Outcome of reporting a list of packages.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reported: usize,
    /// Packages skipped for an unknown workout code, with their diagnostics.
    pub skipped: Vec<TrainingError>,
}

/// Dispatch and report every package in order.
///
/// Any construction error stops the batch, except unknown workout codes under
/// [`UnknownPolicy::Skip`]. Those write a `warning:` line to `warnings` as soon
/// as they are skipped and are collected in the summary.
pub fn report_packages<W, E>(
    packages: &[Package],
    format: OutputFormat,
    on_unknown: UnknownPolicy,
    out: &mut W,
    warnings: &mut E,
) -> Result<BatchSummary>
where
    W: Write,
    E: Write,
{
    let mut summary = BatchSummary::default();
    for (index, package) in packages.iter().enumerate() {
        let workout = match package.read() {
            Ok(workout) => workout,
            Err(err) if err.is_unknown_workout() && on_unknown == UnknownPolicy::Skip => {
                warn!(index, error = %err, "skipping package");
                writeln!(warnings, "warning: {err}").context("write skip warning")?;
                summary.skipped.push(err);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("package[{}] ({})", index, package.workout_type)
                });
            }
        };
        debug!(index, code = workout.kind().code(), "reporting package");
        report(&workout, format, out)?;
        summary.reported += 1;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::read_package;
    use crate::samples::sample_packages;

    fn report_line(code: &str, data: &[f64], format: OutputFormat) -> String {
        let workout = read_package(code, data).expect("workout");
        let mut out = Vec::new();
        report(&workout, format, &mut out).expect("report");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn run_report_line() {
        assert_eq!(
            report_line("RUN", &[15000.0, 1.0, 75.0], OutputFormat::Text),
            "Type of training: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Average speed: 9.750 km/h; Calories spent: 699.750.\n"
        );
    }

    #[test]
    fn swim_report_line() {
        assert_eq!(
            report_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], OutputFormat::Text),
            "Type of training: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Average speed: 1.000 km/h; Calories spent: 336.000.\n"
        );
    }

    /// Pins the floor division in the walking formula: 5.85² / 180 floors to
    /// zero, leaving only the weight term.
    #[test]
    fn walk_report_line_keeps_floor_division() {
        assert_eq!(
            report_line("WLK", &[9000.0, 1.0, 75.0, 180.0], OutputFormat::Text),
            "Type of training: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Average speed: 5.850 km/h; Calories spent: 157.500.\n"
        );
    }

    #[test]
    fn json_report_line() {
        let line = report_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0], OutputFormat::Json);
        assert!(line.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).expect("json");
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["duration"], 1.0);
        assert_eq!(value["calories"], 336.0);
    }

    #[test]
    fn text_has_four_three_decimal_fields() {
        let line = report_line("RUN", &[12345.0, 1.25, 68.5], OutputFormat::Text);
        let numbers: Vec<&str> = line
            .split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
            .map(|token| token.trim_end_matches('.'))
            .filter(|token| token.contains('.'))
            .collect();
        assert_eq!(numbers.len(), 4, "{line}");
        for number in numbers {
            let (_, fraction) = number.split_once('.').expect("decimal point");
            assert_eq!(fraction.len(), 3, "{number}");
        }
    }

    #[test]
    fn samples_report_in_fixed_order() {
        let mut out = Vec::new();
        let summary = report_packages(
            &sample_packages(),
            OutputFormat::Text,
            UnknownPolicy::Fail,
            &mut out,
            &mut std::io::sink(),
        )
        .expect("report");
        assert_eq!(summary.reported, 3);
        let text = String::from_utf8(out).expect("utf8");
        let labels: Vec<&str> = text
            .lines()
            .map(|line| {
                line.trim_start_matches("Type of training: ")
                    .split(';')
                    .next()
                    .expect("label")
            })
            .collect();
        assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn unknown_code_fails_batch_by_default() {
        let packages = vec![
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
            Package::new("XYZ", vec![1.0]),
            Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        let mut out = Vec::new();
        let err = report_packages(
            &packages,
            OutputFormat::Text,
            UnknownPolicy::Fail,
            &mut out,
            &mut std::io::sink(),
        )
        .expect_err("unknown");
        assert!(format!("{err:#}").contains("package[1] (XYZ)"));
        let cause = err.downcast_ref::<TrainingError>().expect("typed cause");
        assert!(cause.is_unknown_workout());
        assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 1);
    }

    #[test]
    fn unknown_code_is_skipped_when_configured() {
        let packages = vec![
            Package::new("XYZ", vec![]),
            Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let mut out = Vec::new();
        let mut warnings = Vec::new();
        let summary = report_packages(
            &packages,
            OutputFormat::Text,
            UnknownPolicy::Skip,
            &mut out,
            &mut warnings,
        )
        .expect("report");
        assert_eq!(summary.reported, 1);
        assert_eq!(summary.skipped, vec![TrainingError::unknown("XYZ")]);
        assert_eq!(
            String::from_utf8(warnings).expect("utf8"),
            "warning: unknown workout type 'XYZ'; expected one of: RUN, SWM, WLK\n"
        );
    }

    #[test]
    fn skip_warning_is_written_before_a_later_failure() {
        let packages = vec![
            Package::new("XYZ", vec![1.0]),
            Package::new("RUN", vec![15000.0, 1.0]),
        ];
        let mut out = Vec::new();
        let mut warnings = Vec::new();
        let err = report_packages(
            &packages,
            OutputFormat::Text,
            UnknownPolicy::Skip,
            &mut out,
            &mut warnings,
        )
        .expect_err("arity");
        assert!(format!("{err:#}").contains("package[1] (RUN)"));
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(warnings).expect("utf8"),
            "warning: unknown workout type 'XYZ'; expected one of: RUN, SWM, WLK\n"
        );
    }

    #[test]
    fn skip_policy_still_fails_on_bad_arity() {
        let packages = vec![Package::new("RUN", vec![15000.0, 1.0])];
        let mut out = Vec::new();
        let err = report_packages(
            &packages,
            OutputFormat::Text,
            UnknownPolicy::Skip,
            &mut out,
            &mut std::io::sink(),
        )
        .expect_err("arity");
        assert!(format!("{err:#}").contains("RUN expects 3 arguments"));
    }
}
