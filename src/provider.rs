//! Byte sources that feed `(name, bytes)` pairs into a `FontCache`.
//!
//! The cache does not care where font bytes come from. Hosts typically embed
//! their fonts with `include_bytes!` (`StaticFontProvider`) or ship them in a
//! directory next to the executable (`DirectoryFontProvider`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File extensions treated as font files, compared case-insensitively.
pub const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];

/// One font file's contents and the logical name to add it under.
#[derive(Clone, PartialEq, Eq)]
pub struct FontSource {
    pub name: String,
    pub data: Vec<u8>,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("name", &self.name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

/// Producer of font bytes. The bytes may or may not be valid fonts.
pub trait FontProvider {
    /// All sources in the order they should be registered.
    fn fonts(&self) -> Result<Vec<FontSource>>;
}

/// Fonts compiled into the binary.
///
/// ```rust,ignore
/// static FONTS: &[(&str, &[u8])] = &[
///     ("Brand", include_bytes!("../fonts/Brand-Regular.ttf")),
///     ("Brand", include_bytes!("../fonts/Brand-Bold.ttf")),
/// ];
/// let provider = StaticFontProvider::new(FONTS);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StaticFontProvider {
    entries: &'static [(&'static str, &'static [u8])],
}

impl StaticFontProvider {
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }
}

impl FontProvider for StaticFontProvider {
    fn fonts(&self) -> Result<Vec<FontSource>> {
        Ok(self
            .entries
            .iter()
            .map(|(name, data)| FontSource {
                name: (*name).to_string(),
                data: data.to_vec(),
            })
            .collect())
    }
}

/// Font files found directly inside one directory (not recursive).
///
/// Files are returned sorted by path so registration order is stable. Each
/// file is named after its stem unless a shared name was set with
/// `with_name`, in which case every file becomes a variant of that name.
#[derive(Debug, Clone)]
pub struct DirectoryFontProvider {
    dir: PathBuf,
    name: Option<String>,
}

impl DirectoryFontProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            name: None,
        }
    }

    /// Register every file in the directory under `name`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FontProvider for DirectoryFontProvider {
    fn fonts(&self) -> Result<Vec<FontSource>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read font directory {:?}", self.dir))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list font directory {:?}", self.dir))?
                .path();
            if path.is_file() && is_font_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let data =
                fs::read(&path).with_context(|| format!("Failed to read font file {:?}", path))?;
            let name = match &self.name {
                Some(name) => name.clone(),
                None => path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            };
            log::debug!("Found font file {:?} ({} bytes) as '{}'", path, data.len(), name);
            sources.push(FontSource { name, data });
        }

        log::info!("Found {} font file(s) in {:?}", sources.len(), self.dir);
        Ok(sources)
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_extension_matching() {
        assert!(is_font_file(Path::new("a/Brand.ttf")));
        assert!(is_font_file(Path::new("Brand.OTF")));
        assert!(is_font_file(Path::new("pack.ttc")));
        assert!(!is_font_file(Path::new("readme.txt")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    #[test]
    fn test_static_provider_preserves_order() {
        static ENTRIES: &[(&str, &[u8])] = &[
            ("B", b"two" as &[u8]),
            ("A", b"one" as &[u8]),
            ("B", b"three" as &[u8]),
        ];
        let sources = StaticFontProvider::new(ENTRIES).fonts().unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
        assert_eq!(sources[2].data, b"three");
    }

    #[test]
    fn test_source_debug_hides_bytes() {
        let source = FontSource {
            name: "Brand".to_string(),
            data: vec![0; 42],
        };
        let debug_str = format!("{:?}", source);
        assert!(debug_str.contains("Brand"));
        assert!(debug_str.contains("data_len: 42"));
    }
}
