//! Rendering identification results for people and for other tools.

use crate::candidate::CandidateResult;
use crate::error::MatchResult;
use crate::matcher::{Identification, Verdict};
use serde::Serialize;
use std::fmt::Write;

pub const DISCLAIMER: &str = "Indicative tool only - not an approved identification method";

pub const NOTES: [&str; 3] = [
    "The PT method only gives an indication",
    "Blends and air can give misleading readings",
    "Reliable identification requires a refrigerant identifier",
];

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::MatchFound => "Possible refrigerants:",
            Verdict::NoMatch => "No match - possibly air / non-condensable gases",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for ReportFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            _ => Err("unknown report format (expected text, json or yaml)"),
        }
    }
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    pressure_bar: f64,
    temperature_c: f64,
    tolerance_bar: f64,
    verdict: Verdict,
    matches: &'a [CandidateResult],
    full_table: &'a [CandidateResult],
}

impl<'a> From<&'a Identification> for ReportDocument<'a> {
    fn from(id: &'a Identification) -> Self {
        Self {
            pressure_bar: id.measurement.pressure_bar(),
            temperature_c: id.measurement.temperature_c(),
            tolerance_bar: id.tolerance_bar,
            verdict: id.verdict(),
            matches: &id.matches,
            full_table: &id.full_table,
        }
    }
}

const HEADERS: [&str; 5] = [
    "Refrigerant",
    "Sat. pressure (bar)",
    "Diff (bar)",
    "Confidence (%)",
    "Phase",
];

/// Render rows as an aligned plain-text table.
pub fn render_table(rows: &[CandidateResult]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format!("{:.2}", row.saturation_pressure_bar),
                format!("{:.2}", row.pressure_diff_bar),
                format!("{:.1}", row.confidence_pct),
                row.phase.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:<w$}", h, w = w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, w))| {
                // Text columns left-aligned, numeric columns right-aligned
                if i == 0 || i == 4 {
                    format!("{:<w$}", cell, w = w)
                } else {
                    format!("{:>w$}", cell, w = w)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}

/// Full human-readable report: verdict, matches, full comparison, notes.
pub fn render_text(id: &Identification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", DISCLAIMER);
    let _ = writeln!(
        out,
        "Reading: {:.2} bar(a) at {:.1} °C (tolerance ±{} bar)",
        id.measurement.pressure_bar(),
        id.measurement.temperature_c(),
        id.tolerance_bar
    );
    let _ = writeln!(out);

    let verdict = id.verdict();
    let _ = writeln!(out, "{}", verdict.message());
    if verdict == Verdict::MatchFound {
        out.push_str(&render_table(&id.matches));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "PT comparison (all refrigerants):");
    if id.full_table.is_empty() {
        let _ = writeln!(out, "(no refrigerant could be evaluated at this reading)");
    } else {
        out.push_str(&render_table(&id.full_table));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Important:");
    for note in NOTES {
        let _ = writeln!(out, "- {}", note);
    }
    out
}

pub fn render_json(id: &Identification) -> MatchResult<String> {
    Ok(serde_json::to_string_pretty(&ReportDocument::from(id))?)
}

pub fn render_yaml(id: &Identification) -> MatchResult<String> {
    Ok(serde_yaml::to_string(&ReportDocument::from(id))?)
}

pub fn render(id: &Identification, format: ReportFormat) -> MatchResult<String> {
    match format {
        ReportFormat::Text => Ok(render_text(id)),
        ReportFormat::Json => render_json(id),
        ReportFormat::Yaml => render_yaml(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;
    use crate::phase::{Phase, PhaseEstimate};

    fn identification(matching: bool) -> Identification {
        let near = CandidateResult::new(
            "R134a",
            510_000.0,
            500_000.0,
            50.0,
            PhaseEstimate::Known(Phase::Saturated),
        );
        let far = CandidateResult::new("R744", 5_729_000.0, 500_000.0, 50.0, PhaseEstimate::Unknown);
        let full_table = if matching {
            vec![near.clone(), far]
        } else {
            vec![far]
        };
        Identification {
            measurement: Measurement::default(),
            tolerance_bar: 0.2,
            matches: if matching { vec![near] } else { vec![] },
            full_table,
        }
    }

    #[test]
    fn table_has_all_columns() {
        let table = render_table(&identification(true).full_table);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Refrigerant"));
        assert!(lines[0].ends_with("Phase"));
        assert!(lines[2].contains("R134a"));
        assert!(lines[2].contains("5.10"));
        assert!(lines[2].contains("0.10"));
        assert!(lines[2].contains("95.0"));
        assert!(lines[2].contains("Saturated"));
        assert!(lines[3].contains("57.29"));
        assert!(lines[3].contains("Unknown"));
    }

    #[test]
    fn text_report_match_found() {
        let text = render_text(&identification(true));
        assert!(text.starts_with(DISCLAIMER));
        assert!(text.contains(Verdict::MatchFound.message()));
        assert!(text.contains("PT comparison"));
        assert!(text.contains(NOTES[2]));
    }

    #[test]
    fn text_report_no_match() {
        let text = render_text(&identification(false));
        assert!(text.contains(Verdict::NoMatch.message()));
        assert!(!text.contains(Verdict::MatchFound.message()));
    }

    #[test]
    fn json_report_shape() {
        let json = render_json(&identification(true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["verdict"], "match_found");
        assert_eq!(value["matches"][0]["name"], "R134a");
        assert_eq!(value["matches"][0]["phase"], "Saturated");
        assert_eq!(value["full_table"].as_array().map(Vec::len), Some(2));
        assert!(value["full_table"][0].get("exact_diff_bar").is_none());
    }

    #[test]
    fn yaml_report_mentions_verdict() {
        let yaml = render(&identification(false), ReportFormat::Yaml).unwrap();
        assert!(yaml.contains("verdict: no_match"));
    }

    #[test]
    fn parse_formats() {
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("Table".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("csv".parse::<ReportFormat>().is_err());
    }
}
