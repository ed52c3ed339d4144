use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::site::BuildReport;

pub fn generate_console_report(report: &BuildReport) {
    println!();
    println!("{}", "📊 Static Build Summary".bright_cyan().bold());
    println!("{}", "=======================".cyan());

    println!("Output directory: {}", report.out_dir.display());
    println!("Pages generated: {}", report.pages.len().to_string().green());
    println!("Routes failed: {}", report.failures.len().to_string().red());
    println!("Total time: {:?}", report.elapsed);
    println!();

    for page in &report.pages {
        let neighbours = format!(
            "prev {} / next {}",
            page.previous.as_deref().unwrap_or("-"),
            page.next.as_deref().unwrap_or("-")
        );
        println!(
            "{} {:12} {} ({})",
            "✅".green(),
            page.path.bold(),
            page.file,
            neighbours.dimmed()
        );
    }

    if !report.failures.is_empty() {
        println!();
        println!("{}", "Failures:".red().bold());
        for failure in &report.failures {
            println!("   • {} {}", failure.path.bold(), failure.error.red());
        }
    }
}

pub fn generate_json_report(report: &BuildReport, out: &mut dyn Write) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}
