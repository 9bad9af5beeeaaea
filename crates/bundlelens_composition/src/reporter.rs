use std::io::{self, Write};

use bundlelens_core::{
    AppTarget, FileAnalysis, constants::MODULES_SHOWN, format_bytes, format_percent,
};
use colored::Colorize;
use log::debug;

use crate::types::{BundleReport, HealthCheck};

const RECOMMENDATIONS: &[&str] = &[
    "Run `npm run analyze` for visual bundle composition",
    "Consider code splitting for files > 100KB",
    "Use dynamic imports for heavy libraries",
    "Check if unused libraries can be removed",
    "Monitor bundle size in CI/CD pipeline",
];

fn heading<W: Write>(writer: &mut W, title: &str, rule: usize) -> io::Result<()> {
    writeln!(writer, "{}", title.bold())?;
    writeln!(writer, "{}", "=".repeat(rule).dimmed())
}

/// Tells the user which app was picked when none was named.
pub fn print_default_notice<W: Write>(writer: &mut W, target: &AppTarget) -> io::Result<()> {
    if target.defaulted {
        writeln!(writer, "ℹ️  No app specified, defaulting to \"{}\"", target.name)?;
        writeln!(writer, "   Usage: bundlelens analyze [web|bad-web]\n")?;
    }
    Ok(())
}

/// Notice for a defaulted app, then what is about to happen. Flushed so it
/// precedes the build tool's own output.
pub fn print_intro<W: Write>(
    writer: &mut W,
    target: &AppTarget,
    skip_build: bool,
) -> io::Result<()> {
    print_default_notice(writer, target)?;

    writeln!(writer, "📊 Analyzing bundle composition for \"{}\" app...\n", target.name)?;
    if skip_build {
        writeln!(writer, "⏭️  Skipping build, using existing output for {}", target.name)?;
    } else {
        writeln!(writer, "🔨 Building {} app...", target.name)?;
    }
    writer.flush()
}

pub fn print_report<W: Write>(writer: &mut W, report: &BundleReport) -> io::Result<()> {
    debug!("Printing bundle report for {} files", report.files.len());

    writeln!(
        writer,
        "📁 Found {} JavaScript files to analyze in {} app\n",
        report.files.len(),
        report.app
    )?;

    heading(writer, "📊 FILE ANALYSIS (by size):", 80)?;
    for file in &report.files {
        print_file(writer, file)?;
    }

    print_sizes(writer, report)?;
    print_top_files(writer, report)?;
    print_library_usage(writer, report)?;
    print_health(writer, &report.health)?;

    writeln!(writer)?;
    heading(writer, "💡 RECOMMENDATIONS:", 30)?;
    for tip in RECOMMENDATIONS {
        writeln!(writer, "• {}", tip)?;
    }

    writeln!(
        writer,
        "\n{} Bundle analysis completed for \"{}\" app!",
        "✅".green(),
        report.app
    )?;
    writer.flush()?;
    Ok(())
}

fn print_file<W: Write>(writer: &mut W, file: &FileAnalysis) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} ({})",
        file.kind().marker(),
        file.file_name.bright_white().bold(),
        format_bytes(file.file_size).cyan()
    )?;

    if !file.libraries.is_empty() {
        writeln!(writer, "   📚 Libraries: {}", file.libraries.join(", "))?;
    }

    if !file.modules.is_empty() {
        let shown = &file.modules[..file.modules.len().min(MODULES_SHOWN)];
        let more = if file.modules.len() > MODULES_SHOWN {
            format!(" +{} more", file.modules.len() - MODULES_SHOWN)
        } else {
            String::new()
        };
        writeln!(writer, "   📦 Modules: {}{}", shown.join(", "), more.dimmed())?;
    }

    if !file.largest_items.is_empty() {
        writeln!(writer, "   🔍 Largest Items:")?;
        for (idx, item) in file.largest_items.iter().enumerate() {
            writeln!(
                writer,
                "      {}. {} {} ({})",
                idx + 1,
                item.kind.marker(),
                item.name,
                format_bytes(item.size as u64)
            )?;
        }
    }

    writeln!(writer)
}

fn print_sizes<W: Write>(writer: &mut W, report: &BundleReport) -> io::Result<()> {
    writeln!(writer)?;
    heading(writer, "📊 BUNDLE SIZE ANALYSIS:", 60)?;
    writeln!(writer, "   Total size: {}", format_bytes(report.total_size).cyan())?;
    writeln!(
        writer,
        "   Main bundle size: {} ({}%)",
        format_bytes(report.main_bundle_size).cyan(),
        format_percent(report.main_bundle_size, report.total_size)
    )?;
    writeln!(
        writer,
        "   Dynamic chunks size: {} ({}%)",
        format_bytes(report.dynamic_size()).cyan(),
        format_percent(report.dynamic_size(), report.total_size)
    )
}

fn print_top_files<W: Write>(writer: &mut W, report: &BundleReport) -> io::Result<()> {
    writeln!(writer)?;
    heading(writer, "🏆 TOP 5 HEAVIEST FILES:", 40)?;
    for (idx, file) in report.top_heaviest().iter().enumerate() {
        writeln!(
            writer,
            "{}. {} - {} ({}%)",
            idx + 1,
            file.file_name,
            format_bytes(file.file_size).cyan(),
            format_percent(file.file_size, report.total_size)
        )?;
    }
    Ok(())
}

fn print_library_usage<W: Write>(writer: &mut W, report: &BundleReport) -> io::Result<()> {
    if report.library_usage.is_empty() {
        return Ok(());
    }

    writeln!(writer)?;
    heading(writer, "📚 LIBRARY USAGE:", 30)?;
    for entry in report.library_usage.by_frequency() {
        writeln!(writer, "   {}: appears in {} file(s)", entry.name, entry.files)?;
    }
    Ok(())
}

fn print_health<W: Write>(writer: &mut W, health: &HealthCheck) -> io::Result<()> {
    writeln!(writer)?;
    heading(writer, "🔍 BUNDLE HEALTH CHECK:", 40)?;
    writeln!(writer, "✅ Main bundle files: {}", health.main_file_count)?;
    writeln!(writer, "📦 Dynamic chunks: {}", health.dynamic_file_count)?;

    let main_size = format_bytes(health.main_bundle_size);
    if health.main_bundle_oversized {
        writeln!(
            writer,
            "{}  {}",
            "⚠️".yellow(),
            format!("Main bundle is large ({}) - consider code splitting", main_size).yellow()
        )?;
    } else {
        writeln!(writer, "✅ Main bundle size is reasonable ({})", main_size)?;
    }

    if let Some(largest) = &health.largest_file
        && largest.oversized
    {
        writeln!(
            writer,
            "{}  {}",
            "⚠️".yellow(),
            format!(
                "Largest file ({}) is {} - consider optimization",
                largest.name,
                format_bytes(largest.size)
            )
            .yellow()
        )?;
    }
    Ok(())
}

/// The whole report as pretty-printed JSON.
pub fn print_json<W: Write>(writer: &mut W, report: &BundleReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()
}
