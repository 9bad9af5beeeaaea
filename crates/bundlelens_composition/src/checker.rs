use anyhow::{Result, bail};
use bundlelens_core::{Analyzer, AppTarget, collect_js_files};
use log::{debug, info};
use std::io::{self, Write};

use crate::{
    build::BuildRunner,
    config::{Config, OutputFormat},
    reporter::{print_default_notice, print_intro, print_json, print_report},
    types::{BundleReport, HealthCheck, LibraryUsage},
};

/// Analyze the static chunks an app's build left behind.
///
/// Files are read one at a time. A file that cannot be read aborts the run.
pub fn analyze_build_output(target: &AppTarget, analyzer: &Analyzer) -> Result<BundleReport> {
    let chunks_dir = target.static_chunks_dir();
    if !chunks_dir.is_dir() {
        bail!(
            "Build directory not found: {}\n   Make sure the app has been built successfully",
            chunks_dir.display()
        );
    }

    let paths = collect_js_files(&chunks_dir)?;
    info!("Found {} JavaScript files in {}", paths.len(), chunks_dir.display());

    let mut total_size = 0;
    let mut main_bundle_size = 0;
    let mut library_usage = LibraryUsage::default();
    let mut files = Vec::with_capacity(paths.len());

    for path in &paths {
        let analysis = analyzer.analyze_file(path)?;
        total_size += analysis.file_size;
        if analysis.is_main {
            main_bundle_size += analysis.file_size;
        }
        for lib in &analysis.libraries {
            library_usage.record(lib);
        }
        files.push(analysis);
    }

    files.sort_by(|a, b| b.file_size.cmp(&a.file_size));
    let health = HealthCheck::evaluate(&files, main_bundle_size);
    debug!(
        "Total {} bytes, main bundle {} bytes, warnings: {}",
        total_size,
        main_bundle_size,
        health.has_warnings()
    );

    Ok(BundleReport {
        app: target.name.clone(),
        chunks_dir,
        total_size,
        main_bundle_size,
        files,
        library_usage,
        health,
    })
}

/// Resolve the app, build it, analyze the output and render the report.
///
/// The app is validated before anything runs, so an invalid name never
/// reaches `builder`. Warnings in the report do not make this fail.
pub fn run_bundle_analysis<W: Write, B: BuildRunner>(
    writer: &mut W,
    cfg: &Config,
    builder: &B,
) -> Result<BundleReport> {
    info!("Starting bundle composition analysis");
    let target = cfg.resolve()?;

    match cfg.format {
        OutputFormat::Text => print_intro(writer, &target, cfg.skip_build)?,
        // Keep stdout parseable.
        OutputFormat::Json => print_default_notice(&mut io::stderr().lock(), &target)?,
    }

    if cfg.skip_build {
        info!("Skipping build for '{}'", target.name);
    } else {
        builder.build(&target)?;
    }

    let report = analyze_build_output(&target, &Analyzer::default())?;

    match cfg.format {
        OutputFormat::Text => print_report(writer, &report)?,
        OutputFormat::Json => print_json(writer, &report)?,
    }

    info!("Bundle composition analysis complete for {} files", report.files.len());
    Ok(report)
}
