//! Site maintenance commands run from the command line.

use std::path::Path;

use anyhow::{Result, bail};

use crate::images::{self, Catalog, Report, css};

/// Print the categorized images and write the JSON report.
pub(crate) fn scan(site_dir: &Path) -> Result<()> {
    let catalog = Catalog::scan(&site_dir.join("images"))?;
    print_catalog(&catalog);

    let path = Report::new(&catalog).write(site_dir)?;
    println!("\nDetailed report saved to: {}", path.display());

    Ok(())
}

/// Move images into per-category directories and point the stylesheets at the new locations.
pub(crate) fn organize(site_dir: &Path, apply: bool) -> Result<()> {
    let images_dir = site_dir.join("images");
    let catalog = Catalog::scan(&images_dir)?;
    let moves = catalog.plan_moves(&images_dir);

    if moves.is_empty() {
        println!("All images are already organized.");
        return Ok(());
    }

    if !apply {
        for mv in &moves {
            println!("Would move: {} -> {}", mv.from.display(), mv.to.display());
        }
        println!("\nDry run, pass --apply to move {} files.", moves.len());
        return Ok(());
    }

    let backup_dir = css::backup(site_dir, jiff::Timestamp::now())?;
    tracing::info!(?backup_dir, "backed up stylesheets");

    let mut report = Report::new(&catalog);
    report.apply(moves);

    let rewritten = css::rewrite_files(site_dir, &images_dir, &report.moved_files)?;
    let path = report.write(site_dir)?;

    println!(
        "Moved {} files, updated {rewritten} stylesheet references.",
        report.moved_files.len()
    );
    for issue in &report.issues {
        println!("  ! {issue}");
    }
    println!("Report saved to: {}", path.display());

    Ok(())
}

/// Fail if any stylesheet references an image that does not exist.
pub(crate) fn verify_css(site_dir: &Path) -> Result<()> {
    let references = css::verify(site_dir)?;
    let missing: Vec<_> = references.iter().filter(|r| !r.exists).collect();

    for reference in &references {
        let mark = if reference.exists { "found" } else { "missing" };
        println!(
            "{mark:>7}: {} ({})",
            reference.image_path, reference.css_file
        );
    }

    println!(
        "\nSummary: {} found, {} missing",
        references.len() - missing.len(),
        missing.len()
    );

    if !missing.is_empty() {
        bail!("{} image references are missing", missing.len());
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for (category, files) in &catalog.categories {
        let size = files.iter().map(|file| file.size).sum();
        println!(
            "\n{} ({} files, {})",
            category.dir_name().to_uppercase(),
            files.len(),
            images::format_size(size)
        );
        println!("Description: {}", category.description());

        for file in files {
            println!("  - {} ({})", file.filename, images::format_size(file.size));
            println!("    Path: {}", file.current_path);
        }
    }

    println!(
        "\nTOTAL: {} images, {}",
        catalog.total_files(),
        images::format_size(catalog.total_size())
    );
}
