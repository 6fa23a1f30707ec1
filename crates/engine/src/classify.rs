//! File type classification.
//!
//! Two related tables drive the result: [`CODE_EXTENSIONS`] decides whether a
//! file contributes to the grand total, and [`icon_for`] picks the glyph shown
//! next to its name. A code extension without its own glyph is shown with
//! [`GENERIC_CODE_ICON`] and keeps its extension as the name.

use std::fmt;
use std::path::Path;

pub const DOCKERFILE_NAME: &str = "Dockerfile";
pub const DOCKER_COMPOSE_NAME: &str = "docker-compose.yml";

pub const OTHER_ICON: &str = "❓";
pub const GENERIC_CODE_ICON: &str = "📃";
const DOCKERFILE_ICON: &str = "🐳";
const DOCKER_COMPOSE_ICON: &str = "📦";

/// Extensions whose lines count toward the grand total.
pub const CODE_EXTENSIONS: &[&str] = &[
    "go", "py", "js", "ts", "html", "css", "java", "c", "cpp", "rb", "php", "rs", "sh", "yaml",
    "yml", "json", "md", "lua", "tf", "tpl", "helm",
];

pub fn icon_for(ext: &str) -> Option<&'static str> {
    let icon = match ext {
        "go" => "🐹",
        "py" => "🐍",
        "js" => "✨",
        "ts" => "🟦",
        "html" => "🌐",
        "css" => "🎨",
        "java" => "☕",
        "c" => "🔵",
        "cpp" => "🔷",
        "rb" => "💎",
        "php" => "🐘",
        "rs" => "🦀",
        "sh" => "🐚",
        "yaml" => "📄",
        "json" => "📦",
        "md" => "📝",
        "lua" => "🌙",
        "tf" => "🌍",
        "tpl" => "🔧",
        "helm" => "⛵",
        _ => return None,
    };
    Some(icon)
}

pub fn is_code_extension(ext: &str) -> bool {
    CODE_EXTENSIONS.contains(&ext)
}

/// What a file counts as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// Source/config/doc file keyed by its extension (no leading dot).
    Code(String),
    Dockerfile,
    DockerCompose,
    Other,
}

impl Category {
    /// Whether lines in this category count toward the grand total.
    pub fn is_code(&self) -> bool {
        !matches!(self, Self::Other)
    }

    pub fn label(&self) -> CategoryLabel {
        let text = match self {
            Self::Code(ext) => format!("{} {ext}", icon_for(ext).unwrap_or(GENERIC_CODE_ICON)),
            Self::Dockerfile => format!("{DOCKERFILE_ICON} Dockerfile"),
            Self::DockerCompose => format!("{DOCKER_COMPOSE_ICON} docker-compose"),
            Self::Other => format!("{OTHER_ICON} other"),
        };
        CategoryLabel(text)
    }
}

/// Display key under which lines are aggregated, e.g. `🦀 rs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    pub fn other() -> Self {
        Category::Other.label()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Classify a file by base name and extension.
///
/// `ext` may be empty and may carry a leading `.`, which is stripped.
/// Special names are matched case-sensitively before the extension table.
/// A `Dockerfile` extension joins the dedicated Dockerfile category.
pub fn classify(name: &str, ext: &str) -> Category {
    if name == DOCKERFILE_NAME {
        return Category::Dockerfile;
    }
    if name == DOCKER_COMPOSE_NAME {
        return Category::DockerCompose;
    }
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    // `dev.Dockerfile`, `ci.Dockerfile`
    if ext == DOCKERFILE_NAME {
        return Category::Dockerfile;
    }
    if is_code_extension(ext) {
        Category::Code(ext.to_string())
    } else {
        Category::Other
    }
}

/// A file discovered by the walker, waiting to be counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: std::path::PathBuf,
    pub name: String,
    pub ext: String,
}

impl FileRecord {
    pub fn new(path: std::path::PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = extension_of(&path);
        Self { path, name, ext }
    }

    pub fn category(&self) -> Category {
        classify(&self.name, &self.ext)
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn dockerfile_has_dedicated_label() {
        let category = classify("Dockerfile", "");
        assert_eq!(category, Category::Dockerfile);
        assert!(category.is_code());
        assert_eq!(category.label().as_str(), "🐳 Dockerfile");
    }

    #[test]
    fn docker_compose_wins_over_yml() {
        let category = classify("docker-compose.yml", "yml");
        assert_eq!(category, Category::DockerCompose);
        assert_eq!(category.label().as_str(), "📦 docker-compose");
    }

    #[test]
    fn special_names_are_case_sensitive() {
        assert_eq!(classify("dockerfile", ""), Category::Other);
        assert_eq!(
            classify("Docker-Compose.yml", "yml"),
            Category::Code("yml".into())
        );
    }

    #[test]
    fn dockerfile_extension_joins_dockerfile_category() {
        let category = classify("dev.Dockerfile", "Dockerfile");
        assert_eq!(category, Category::Dockerfile);
        assert!(category.is_code());
        assert_eq!(classify("ci.Dockerfile", ".Dockerfile"), Category::Dockerfile);
        assert_eq!(classify("dev.dockerfile", "dockerfile"), Category::Other);
    }

    #[test]
    fn label_honours_width_and_alignment() {
        let label = Category::Code("rs".into()).label();
        assert_eq!(format!("[{label:<8}]"), "[🦀 rs    ]");
        assert_eq!(format!("[{label:>6}]"), "[  🦀 rs]");
        assert_eq!(format!("{label}"), "🦀 rs");
    }

    #[test]
    fn leading_dot_is_stripped() {
        assert_eq!(classify("main.rs", ".rs"), Category::Code("rs".into()));
        assert_eq!(classify("main.rs", "rs").label().as_str(), "🦀 rs");
    }

    #[test]
    fn unknown_and_empty_extensions_are_other() {
        assert_eq!(classify("notes.txt", "txt"), Category::Other);
        assert_eq!(classify("Makefile", ""), Category::Other);
        assert_eq!(Category::Other.label(), CategoryLabel::other());
        assert!(!Category::Other.is_code());
    }

    #[test]
    fn code_extension_without_icon_keeps_its_name() {
        let category = classify("values.yml", "yml");
        assert!(category.is_code());
        assert_eq!(
            category.label().as_str(),
            format!("{GENERIC_CODE_ICON} yml")
        );
    }

    #[test]
    fn every_icon_belongs_to_a_code_extension() {
        for ext in CODE_EXTENSIONS {
            let label = classify("f", ext).label();
            assert!(label.as_str().ends_with(*ext), "{label} lost its extension");
            assert_ne!(label, CategoryLabel::other());
        }
    }

    #[test]
    fn distinct_extensions_get_distinct_labels() {
        let mut labels: Vec<_> = CODE_EXTENSIONS
            .iter()
            .map(|ext| classify("f", ext).label())
            .collect();
        labels.push(Category::Dockerfile.label());
        labels.push(Category::DockerCompose.label());
        let total = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }

    #[test]
    fn file_record_derives_name_and_extension() {
        let record = FileRecord::new(PathBuf::from("src/lib.rs"));
        assert_eq!(record.name, "lib.rs");
        assert_eq!(record.ext, "rs");
        assert_eq!(record.category(), Category::Code("rs".into()));

        let docker = FileRecord::new(PathBuf::from("deploy/Dockerfile"));
        assert_eq!(docker.ext, "");
        assert_eq!(docker.category(), Category::Dockerfile);
    }
}
