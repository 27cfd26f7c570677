//! Catalog and reorganize the site's image directory by category.

pub(crate) mod css;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("images directory not found: {0}")]
    MissingDir(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to write report: {0}")]
    Json(#[from] serde_json::Error),
}

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

pub(crate) const REPORT_FILE: &str = "image_organization_report.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Carousel,
    Backgrounds,
    Logos,
    Favicons,
    Content,
    Ui,
    Payments,
    Uncategorized,
}

impl Category {
    /// Categories in matching order. The first whose pattern matches wins.
    const ALL: [Category; 8] = [
        Self::Carousel,
        Self::Backgrounds,
        Self::Logos,
        Self::Favicons,
        Self::Content,
        Self::Ui,
        Self::Payments,
        Self::Uncategorized,
    ];

    fn patterns(self) -> &'static [&'static str] {
        match self {
            Self::Carousel => &["hero-1", "hero-2", "hero-3", "carousel", "slide"],
            Self::Backgrounds => &["background", "banner", "bg-"],
            Self::Logos => &["logo", "brand"],
            Self::Favicons => &["favicon", "icon", "apple-touch"],
            Self::Content => &["ministry", "sermon", "gallery", "staff", "event"],
            Self::Ui => &["ui-", "button", "arrow", "social"],
            Self::Payments => &["payment", "donate", "bank", "card"],
            Self::Uncategorized => &[],
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            Self::Carousel => "Carousel/Hero section background images",
            Self::Backgrounds => "General background images",
            Self::Logos => "Logo and branding images",
            Self::Favicons => "Favicon and app icons",
            Self::Content => "Content images (ministries, sermons, gallery, etc.)",
            Self::Ui => "UI elements and icons",
            Self::Payments => "Payment and donation related images",
            Self::Uncategorized => "Images that don't fit other categories",
        }
    }

    /// Directory name below `images/`.
    pub(crate) fn dir_name(self) -> &'static str {
        match self {
            Self::Carousel => "carousel",
            Self::Backgrounds => "backgrounds",
            Self::Logos => "logos",
            Self::Favicons => "favicons",
            Self::Content => "content",
            Self::Ui => "ui",
            Self::Payments => "payments",
            Self::Uncategorized => "uncategorized",
        }
    }

    /// Categorize an image by its filename and path relative to the images directory. An image
    /// directly inside a category directory keeps that category.
    pub(crate) fn of(filename: &str, relative_path: &str) -> Self {
        if let Some((dir, rest)) = relative_path.split_once('/')
            && !rest.contains('/')
            && let Some(category) = Self::ALL.into_iter().find(|c| c.dir_name() == dir)
        {
            return category;
        }

        let filename = filename.to_lowercase();
        let relative_path = relative_path.to_lowercase();

        Self::ALL
            .into_iter()
            .find(|category| {
                category
                    .patterns()
                    .iter()
                    .any(|pattern| filename.contains(pattern) || relative_path.contains(pattern))
            })
            .unwrap_or(Self::Uncategorized)
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageFile {
    pub filename: String,
    /// Path relative to the images directory, `/` separated.
    pub current_path: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Move {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Images below a directory grouped by [`Category`].
#[derive(Debug, Default)]
pub(crate) struct Catalog {
    pub categories: BTreeMap<Category, Vec<ImageFile>>,
}

impl Catalog {
    /// Walk `images_dir` recursively and categorize every image file.
    pub(crate) fn scan(images_dir: &Path) -> Result<Self, Error> {
        if !images_dir.is_dir() {
            return Err(Error::MissingDir(images_dir.to_path_buf()));
        }

        let mut files = Vec::new();
        walk_dir(images_dir, &mut files)?;
        files.sort();

        let mut catalog = Catalog::default();

        for path in files {
            let Some(filename) = path.file_name().map(|name| name.to_string_lossy().into_owned())
            else {
                continue;
            };
            let current_path = relative_slash_path(images_dir, &path);
            let size = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
            let category = Category::of(&filename, &current_path);

            catalog.categories.entry(category).or_default().push(ImageFile {
                filename,
                current_path,
                size,
            });
        }

        Ok(catalog)
    }

    pub(crate) fn total_files(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub(crate) fn total_size(&self) -> u64 {
        self.categories.values().flatten().map(|file| file.size).sum()
    }

    /// Plan moving every image into `images/<category>/<filename>`. Files already directly inside
    /// their category directory stay where they are. A target already taken by another file gets
    /// a numeric suffix, e.g. `logo-1.png`.
    pub(crate) fn plan_moves(&self, images_dir: &Path) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut taken = HashSet::new();
        let mut pending = Vec::new();

        for (category, files) in &self.categories {
            let category_dir = images_dir.join(category.dir_name());

            for file in files {
                let from = images_dir.join(&file.current_path);
                if from.parent() == Some(category_dir.as_path()) {
                    taken.insert(from);
                } else {
                    pending.push((from, category_dir.clone(), file.filename.as_str()));
                }
            }
        }

        for (from, category_dir, filename) in pending {
            let to = free_target(&category_dir, filename, &taken);
            taken.insert(to.clone());
            moves.push(Move { from, to });
        }

        moves
    }
}

/// First path `dir/<stem>[-N].<ext>` that is neither planned nor on disk.
fn free_target(dir: &Path, filename: &str, taken: &HashSet<PathBuf>) -> PathBuf {
    let candidate = dir.join(filename);
    if !taken.contains(&candidate) && !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };

    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem}-{n}.{ext}")),
            None => dir.join(format!("{stem}-{n}")),
        })
        .find(|path| !taken.contains(path) && !path.exists())
        .unwrap_or(candidate)
}

/// Outcome of an organization run, written as JSON next to the site.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    pub timestamp: jiff::Timestamp,
    pub categories: BTreeMap<Category, CategoryReport>,
    pub moved_files: Vec<Move>,
    pub issues: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryReport {
    pub description: &'static str,
    pub files: Vec<ImageFile>,
}

impl Report {
    pub(crate) fn new(catalog: &Catalog) -> Self {
        let categories = catalog
            .categories
            .iter()
            .map(|(category, files)| {
                (
                    *category,
                    CategoryReport {
                        description: category.description(),
                        files: files.clone(),
                    },
                )
            })
            .collect();

        Self {
            timestamp: jiff::Timestamp::now(),
            categories,
            moved_files: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Execute `moves`, recording successes and failures. A failed move does not stop the others.
    pub(crate) fn apply(&mut self, moves: Vec<Move>) {
        for mv in moves {
            // rename replaces an existing target silently on Unix.
            let result = if mv.to.exists() {
                Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", mv.to.display()),
                ))
            } else {
                mv.to
                    .parent()
                    .map(fs::create_dir_all)
                    .transpose()
                    .and_then(|_| fs::rename(&mv.from, &mv.to))
            };

            match result {
                Ok(()) => {
                    tracing::info!(from = ?mv.from, to = ?mv.to, "moved");
                    self.moved_files.push(mv);
                }
                Err(err) => {
                    tracing::error!(?err, from = ?mv.from, "failed to move");
                    self.issues
                        .push(format!("Error moving {}: {err}", mv.from.display()));
                }
            }
        }
    }

    pub(crate) fn write(&self, site_dir: &Path) -> Result<PathBuf, Error> {
        let path = site_dir.join(REPORT_FILE);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Format a byte count with binary units and one decimal, e.g. `1.5 KB`.
pub(crate) fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_owned();
    }

    let mut size = bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Error> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_name = entry.file_name();

        // Skip hidden dirs/files
        if file_name.to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if is_image(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
