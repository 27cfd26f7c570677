//! Image references inside the site's stylesheets.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::{Error, Move};

static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(["']?([^"')]+\.(?:jpg|jpeg|png|gif|webp|svg))["']?\)"#)
        .expect("compiling regex")
});

/// An `images/...` path referenced from a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reference {
    pub css_file: String,
    pub image_path: String,
    pub exists: bool,
}

/// Return the image paths below `images/` referenced through `url(...)` in `css`.
pub(crate) fn image_references(css: &str) -> Vec<&str> {
    IMAGE_URL_RE
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|path| path.starts_with("images/"))
        .collect()
}

/// Stylesheets directly inside the site directory.
pub(crate) fn css_files(site_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(site_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "css") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Check every image referenced from the site's stylesheets against the filesystem.
pub(crate) fn verify(site_dir: &Path) -> Result<Vec<Reference>, Error> {
    let mut references = Vec::new();

    for css_file in css_files(site_dir)? {
        let content = fs::read_to_string(&css_file)?;
        let name = css_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for image_path in image_references(&content) {
            references.push(Reference {
                css_file: name.clone(),
                image_path: image_path.to_owned(),
                exists: site_dir.join(image_path).is_file(),
            });
        }
    }

    Ok(references)
}

/// Copy all stylesheets to `css_backups/backup_<timestamp>/` and return the backup directory.
pub(crate) fn backup(site_dir: &Path, now: jiff::Timestamp) -> Result<PathBuf, Error> {
    let stamp = now.strftime("%Y%m%d_%H%M%S").to_string();
    let backup_dir = site_dir.join("css_backups").join(format!("backup_{stamp}"));
    fs::create_dir_all(&backup_dir)?;

    for css_file in css_files(site_dir)? {
        if let Some(name) = css_file.file_name() {
            fs::copy(&css_file, backup_dir.join(name))?;
            tracing::debug!(?css_file, "backed up");
        }
    }

    Ok(backup_dir)
}

/// Replace references to moved images in `css`. Returns the new content and the number of
/// replaced references.
pub(crate) fn rewrite(css: &str, images_dir: &Path, moves: &[Move]) -> (String, usize) {
    let replacements: Vec<(String, String)> = moves
        .iter()
        .filter_map(|mv| {
            let from = mv.from.strip_prefix(images_dir).ok()?;
            let to = mv.to.strip_prefix(images_dir).ok()?;
            Some((images_path(from), images_path(to)))
        })
        .collect();

    let mut count = 0;
    let content = IMAGE_URL_RE.replace_all(css, |caps: &regex::Captures| {
        let whole = &caps[0];
        let path = &caps[1];
        match replacements.iter().find(|(from, _)| from == path) {
            Some((from, to)) => {
                count += 1;
                whole.replacen(from.as_str(), to, 1)
            }
            None => whole.to_owned(),
        }
    });

    (content.into_owned(), count)
}

/// Rewrite every stylesheet in `site_dir` for `moves`. Returns the total number of replacements.
pub(crate) fn rewrite_files(site_dir: &Path, images_dir: &Path, moves: &[Move]) -> Result<usize, Error> {
    let mut total = 0;

    for css_file in css_files(site_dir)? {
        let content = fs::read_to_string(&css_file)?;
        let (updated, count) = rewrite(&content, images_dir, moves);
        if count > 0 {
            fs::write(&css_file, updated)?;
            tracing::info!(?css_file, count, "updated image paths");
            total += count;
        }
    }

    Ok(total)
}

fn images_path(relative: &Path) -> String {
    let parts: Vec<_> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect();
    format!("images/{}", parts.join("/"))
}
