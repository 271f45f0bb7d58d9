use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::scan::ScanReport;

#[derive(Serialize)]
struct Counts {
    inventory: usize,
    references: usize,
    unreferenced: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: Counts,
    #[serde(flatten)]
    report: &'a ScanReport,
}

pub fn print(report: &ScanReport, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        write_json(&mut out, report)
    } else {
        write_text(&mut out, report)
    }
}

fn write_text(out: &mut impl Write, report: &ScanReport) -> Result<()> {
    writeln!(out, "All distinct markdown files: {}", report.inventory.len())?;
    writeln!(out, "Referenced markdown files: {}", report.references.len())?;
    writeln!(out, "Unreferenced markdown files: {}", report.unreferenced.len())?;
    for file in &report.unreferenced {
        writeln!(out, " - {}", file)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, report: &ScanReport) -> Result<()> {
    let body = JsonReport {
        counts: Counts {
            inventory: report.inventory.len(),
            references: report.references.len(),
            unreferenced: report.unreferenced.len(),
        },
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)?;
    Ok(())
}
