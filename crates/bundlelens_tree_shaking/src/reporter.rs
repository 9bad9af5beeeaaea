use std::io::{self, Write};

use bundlelens_core::format_kb;
use colored::Colorize;
use log::debug;

use crate::types::{TreeShakingResult, Verdict};

const TIPS: &[&str] = &[
    "Use named imports instead of default imports",
    "Mark packages as sideEffects: false in package.json",
    "Avoid importing entire modules",
    "Use dynamic imports for code splitting",
];

const LEAK_CAUSES: &[&str] = &[
    "Side effects in the module",
    "Default exports preventing tree shaking",
    "Webpack configuration issues",
];

pub fn print_tree_shaking_report<W: Write>(
    writer: &mut W,
    result: &TreeShakingResult,
) -> io::Result<()> {
    debug!("Printing tree shaking report for {}", result.app);

    if result.defaulted {
        writeln!(writer, "ℹ️  No app specified, defaulting to \"{}\"", result.app)?;
        writeln!(writer, "   Usage: bundlelens tree-shaking [web|bad-web]\n")?;
    }
    writeln!(writer, "{}", "🌳 Tree Shaking Analysis Tool".bold())?;
    writeln!(writer, "{}", "=".repeat(30).dimmed())?;
    writeln!(writer, "\n📦 Found {} JavaScript chunks", result.files_scanned)?;
    writeln!(writer, "\n🔍 Analyzing tree shaking results...")?;

    writeln!(writer, "\n✅ Used functions found in bundle (expected):")?;
    if result.present_hits.is_empty() {
        writeln!(writer, "   {}", "None found - this might indicate an issue".yellow())?;
    } else {
        for hit in &result.present_hits {
            writeln!(writer, "   ✓ {} in {}", hit.symbol.green(), hit.file)?;
        }
    }

    writeln!(writer, "\n❌ Unused functions found in bundle (should be tree-shaken):")?;
    if result.absent_hits.is_empty() {
        writeln!(writer, "   ✅ {}", "None found - Tree shaking is working correctly!".green())?;
    } else {
        for hit in &result.absent_hits {
            writeln!(writer, "   ⚠️  {} in {}", hit.symbol.yellow(), hit.file)?;
        }
    }

    writeln!(writer, "\n📊 Bundle Size Analysis:")?;
    for large in &result.large_files {
        writeln!(writer, "   📄 {}: {}", large.file, format_kb(large.size).cyan())?;
    }
    writeln!(writer, "\n📏 Total bundle size: {}", format_kb(result.total_size).cyan())?;
    writeln!(writer, "   Bundle breakdown:")?;
    for (category, size) in &result.size_by_category {
        writeln!(writer, "   - {}: {}", category.label(), format_kb(*size))?;
    }

    writeln!(writer, "\n🎯 Summary:")?;
    writeln!(
        writer,
        "   Used functions in bundle: {}/{}",
        result.present_hits.len(),
        result.expected_present.len()
    )?;
    writeln!(
        writer,
        "   Unused functions eliminated: {}/{}",
        result.eliminated_count(),
        result.expected_absent.len()
    )?;

    match result.verdict {
        Verdict::Perfect => {
            writeln!(writer, "   🎉 {}", "Tree shaking is working perfectly!".green().bold())?
        }
        Verdict::LeakedSymbols => {
            writeln!(writer, "   ⚠️  {}", "Some unused functions are still in the bundle".yellow())?;
            writeln!(writer, "   💡 This might be due to:")?;
            for cause in LEAK_CAUSES {
                writeln!(writer, "      - {}", cause)?;
            }
        }
        Verdict::MissingSymbols => writeln!(
            writer,
            "   ⚠️  {}",
            "Some expected functions are missing from the bundle".yellow()
        )?,
    }

    writeln!(writer, "\n💡 To improve tree shaking:")?;
    for (idx, tip) in TIPS.iter().enumerate() {
        writeln!(writer, "   {}. {}", idx + 1, tip)?;
    }

    writer.flush()?;
    Ok(())
}
