//! Rendering reports as plain text, terse CSV, or JSON.

use std::fmt;

use ent_core::{FrequencyTable, StatisticalReport};

/// Occurrence table, one row per byte value present.
pub fn counts_text(table: &FrequencyTable) -> String {
    CountsText(table).to_string()
}

/// Occurrence table in the terse CSV layout (record types 2 and 3).
pub fn counts_terse(table: &FrequencyTable) -> String {
    CountsTerse(table).to_string()
}

/// Human-readable summary.
pub fn report_text(report: &StatisticalReport) -> String {
    ReportText(report).to_string()
}

struct CountsText<'a>(&'a FrequencyTable);

impl fmt::Display for CountsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        writeln!(f, "Value Char Occurrences Fraction")?;
        for (value, count) in table.occurring() {
            writeln!(
                f,
                "{value:>3}   {}   {count:>10}   {:.6}",
                printable(value),
                table.fraction(value)
            )?;
        }
        writeln!(f, "\nTotal:    {:>10}   {:.6}", table.total(), 1.0)
    }
}

struct CountsTerse<'a>(&'a FrequencyTable);

impl fmt::Display for CountsTerse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.0;
        writeln!(f, "2,Value,Occurrences,Fraction")?;
        for (value, count) in table.occurring() {
            writeln!(f, "3,{value},{count},{:.6}", table.fraction(value))?;
        }
        Ok(())
    }
}

struct ReportText<'a>(&'a StatisticalReport);

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let n = report.sample_size;
        writeln!(f, "- Entropy is {:.6} bits per byte.", report.entropy)?;
        writeln!(f, "- Optimum compression would reduce the size")?;
        writeln!(
            f,
            "  of this {n} byte file by {:.0}%.",
            report.optimum_compression
        )?;
        writeln!(
            f,
            "- χ² distribution for {n} samples is {:.2}, and randomly",
            report.chi_square
        )?;
        writeln!(
            f,
            "  would exceed this value {:.2}% of the times.",
            report.chi_square_percent()
        )?;
        writeln!(
            f,
            "  According to the χ² test, this sequence {}.",
            report.chi_square_verdict
        )?;
        writeln!(
            f,
            "- Arithmetic mean value of data bytes is {:.4} (random = 127.5).",
            report.mean
        )?;
        match report.monte_carlo {
            Some(mc) => writeln!(
                f,
                "- Monte Carlo value for π is {:.9} (error {:.2}%).",
                mc.pi(),
                mc.error_percent()
            )?,
            None => writeln!(f, "- Monte Carlo value for π is undefined (too few bytes).")?,
        }
        writeln!(
            f,
            "- Serial correlation coefficient is {} (totally uncorrelated = 0.0).",
            report.serial_correlation
        )
    }
}

/// Terse CSV: header record 0 and value record 1.
pub fn report_terse(report: &StatisticalReport) -> String {
    let pi = report
        .monte_carlo_pi()
        .map_or_else(|| "undefined".to_string(), |pi| format!("{pi:.6}"));
    format!(
        "0,File-bytes,Entropy,Chi-square,Mean,Monte-Carlo-Pi,Serial-Correlation\n\
         1,{},{:.6},{:.6},{:.6},{},{}\n",
        report.sample_size,
        report.entropy,
        report.chi_square,
        report.mean,
        pi,
        report.serial_correlation
    )
}

/// Pretty JSON document for one input.
pub fn report_json(
    name: &str,
    report: &StatisticalReport,
    counts: Option<&FrequencyTable>,
) -> serde_json::Result<String> {
    let mut doc = serde_json::json!({
        "input": name,
        "report": report,
    });
    if let Some(table) = counts {
        doc["counts"] = serde_json::to_value(table)?;
    }
    serde_json::to_string_pretty(&doc)
}

fn printable(value: u8) -> char {
    if value.is_ascii_graphic() || value == b' ' {
        value as char
    } else {
        ' '
    }
}
