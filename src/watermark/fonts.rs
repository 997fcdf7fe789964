//! Font resolution with ordered fallbacks.
//!
//! Each configured font name is tried in turn: first as a path, then by file
//! name inside the search directories (recursively). The first font that
//! loads wins. When none do, the embedded font is used, which always loads.

use super::WatermarkError;
use crate::constants::BUILTIN_FONT_MAX_SIZE;
use ab_glyph::FontArc;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Embedded font data (DejaVu Sans Mono, Bitstream Vera license).
const EMBEDDED_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

static BUILTIN_FONT: OnceLock<FontArc> = OnceLock::new();

/// The embedded font, parsed on first use.
pub fn builtin_font() -> &'static FontArc {
    BUILTIN_FONT.get_or_init(|| {
        FontArc::try_from_slice(EMBEDDED_FONT_DATA)
            .expect("Failed to load embedded font - this is a bug")
    })
}

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in default"),
        }
    }
}

/// A loaded font ready for measuring and rendering.
#[derive(Clone)]
pub struct ResolvedFont {
    pub font: FontArc,
    pub source: FontSource,
}

impl fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("source", &self.source)
            .finish()
    }
}

impl ResolvedFont {
    pub fn builtin() -> Self {
        Self {
            font: builtin_font().clone(),
            source: FontSource::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.source == FontSource::Builtin
    }

    /// Font size to actually use: the built-in font is capped at 72px.
    pub fn effective_size(&self, requested: u32) -> u32 {
        if self.is_builtin() {
            requested.min(BUILTIN_FONT_MAX_SIZE)
        } else {
            requested
        }
    }
}

/// Ordered list of font lookups ending in the embedded font.
#[derive(Debug, Clone)]
pub struct FontChain {
    names: Vec<String>,
    search_dirs: Vec<PathBuf>,
}

impl FontChain {
    /// Chain searching `extra_dirs` first, then the platform font directories.
    pub fn new(names: Vec<String>, extra_dirs: Vec<PathBuf>) -> Self {
        let mut search_dirs = extra_dirs;
        search_dirs.extend(system_font_dirs());
        Self::with_search_dirs(names, search_dirs)
    }

    /// Chain searching exactly `search_dirs`.
    pub fn with_search_dirs(names: Vec<String>, search_dirs: Vec<PathBuf>) -> Self {
        Self { names, search_dirs }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Try every configured name in order and return the first that loads.
    pub fn resolve(&self) -> ResolvedFont {
        for name in &self.names {
            match self.try_load(name) {
                Ok(font) => {
                    tracing::info!(font = %font.source, "Using watermark font");
                    return font;
                }
                Err(e) => {
                    tracing::debug!(font = %name, error = %e, "Font not available, trying next");
                }
            }
        }

        tracing::info!(
            tried = self.names.len(),
            max_size = BUILTIN_FONT_MAX_SIZE,
            "No configured font found, using built-in default"
        );
        ResolvedFont::builtin()
    }

    /// A single lookup attempt.
    pub fn try_load(&self, name: &str) -> Result<ResolvedFont, WatermarkError> {
        let direct = Path::new(name);
        if direct.is_file() {
            return load_font_file(direct);
        }

        for dir in &self.search_dirs {
            if let Some(path) = find_in_dir(dir, name) {
                return load_font_file(&path);
            }
        }

        Err(WatermarkError::FontError(format!(
            "'{}' not found in {} search directories",
            name,
            self.search_dirs.len()
        )))
    }
}

/// Parse a font file from disk.
pub fn load_font_file(path: &Path) -> Result<ResolvedFont, WatermarkError> {
    let data = std::fs::read(path)
        .map_err(|e| WatermarkError::FontError(format!("{}: {}", path.display(), e)))?;

    let font = FontArc::try_from_vec(data)
        .map_err(|e| WatermarkError::FontError(format!("{}: {}", path.display(), e)))?;

    Ok(ResolvedFont {
        font,
        source: FontSource::File(path.to_path_buf()),
    })
}

/// Find a file named `name` (case-insensitive) anywhere below `dir`.
fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    if !dir.is_dir() {
        return None;
    }

    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|entry| {
            entry.file_type().is_file()
                && entry
                    .file_name()
                    .to_str()
                    .map(|f| f.eq_ignore_ascii_case(name))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
}

/// Platform font directories, in lookup order.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let home = std::env::var_os("HOME").map(PathBuf::from);

    if cfg!(windows) {
        let windir = std::env::var("WINDIR").unwrap_or_else(|_| "C:\\Windows".to_string());
        dirs.push(PathBuf::from(windir).join("Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
        if let Some(home) = &home {
            dirs.push(home.join("Library/Fonts"));
        }
    } else {
        if let Some(home) = &home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
        let data_dirs = std::env::var("XDG_DATA_DIRS")
            .unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
        for data_dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
            dirs.push(PathBuf::from(data_dir).join("fonts"));
        }
    }

    dirs
}
