//! Content classification strategies.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use analize_core::Category;
use mime_guess::mime::Mime;

/// Maps a path to a content category.
///
/// Implementations never fail: anything that cannot be classified is
/// [`Category::Unknown`].
pub trait Classifier {
    /// Classify the file at `path`.
    fn classify(&self, path: &Path) -> Category;
}

impl<F> Classifier for F
where
    F: Fn(&Path) -> Category,
{
    fn classify(&self, path: &Path) -> Category {
        self(path)
    }
}

/// Media types treated as native executables.
const EXECUTABLE_TYPES: &[&str] = &[
    "application/x-executable",
    "application/x-msdownload",
    "application/x-msdos-program",
    "application/vnd.microsoft.portable-executable",
    "application/x-sharedlib",
    "application/x-mach-binary",
];

/// Media types treated as archives.
const ARCHIVE_TYPES: &[&str] = &["application/zip", "application/x-tar"];

/// Extensions whose guessed media type is too generic to classify.
const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("exe", "application/x-msdownload"),
    ("dll", "application/x-msdownload"),
    ("msi", "application/x-msdownload"),
];

/// Short forms of compressed tarballs, e.g. `a.tgz` for `a.tar.gz`.
const TAR_ALIASES: &[&str] = &["tgz", "taz", "tz", "tbz", "tbz2", "txz"];

/// Compression suffixes that wrap another file type, e.g. `a.tar.gz`.
const COMPRESSION_SUFFIXES: &[&str] = &["gz", "z", "bz2", "xz", "br", "zst"];

/// Map a media type to its category.
pub fn category_for_mime(mime: &Mime) -> Category {
    match mime.type_().as_str() {
        "text" => Category::Text,
        "image" => Category::Image,
        "audio" => Category::Audio,
        "video" => Category::Video,
        "application" => {
            let essence = mime.essence_str();
            if EXECUTABLE_TYPES.contains(&essence) {
                Category::Executable
            } else if ARCHIVE_TYPES.contains(&essence) {
                Category::Archive
            } else {
                Category::Application
            }
        }
        _ => Category::Unknown,
    }
}

/// Extension-based classifier backed by the `mime_guess` table.
#[derive(Debug, Clone)]
pub struct MimeClassifier {
    overrides: HashMap<String, Mime>,
}

impl MimeClassifier {
    /// Create a classifier with the built-in overrides.
    pub fn new() -> Self {
        let overrides = DEFAULT_OVERRIDES
            .iter()
            .filter_map(|(ext, ty)| ty.parse::<Mime>().ok().map(|m| (ext.to_string(), m)))
            .collect();
        Self { overrides }
    }

    /// Force `extension` (without the dot, case-insensitive) to `mime`.
    pub fn with_override(mut self, extension: &str, mime: Mime) -> Self {
        self.overrides.insert(extension.to_ascii_lowercase(), mime);
        self
    }

    /// Guess the media type for `path` from its extension.
    ///
    /// A compression suffix is looked through to the extension it wraps, so
    /// `a.tar.gz` and `a.tgz` resolve like `a.tar`. A bare `a.gz` keeps the
    /// compression type.
    pub fn guess(&self, path: &Path) -> Option<Mime> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }

        if TAR_ALIASES.contains(&ext) {
            return self.lookup("tar");
        }

        if COMPRESSION_SUFFIXES.contains(&ext) {
            if let Some((inner_stem, inner)) = stem.rsplit_once('.') {
                if !inner_stem.is_empty() {
                    if let Some(mime) = self.lookup(inner) {
                        return Some(mime);
                    }
                }
            }
        }

        self.lookup(ext)
    }

    fn lookup(&self, ext: &str) -> Option<Mime> {
        if ext.is_empty() {
            return None;
        }
        if let Some(mime) = self.overrides.get(ext) {
            return Some(mime.clone());
        }
        mime_guess::from_ext(ext).first()
    }
}

impl Default for MimeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MimeClassifier {
    fn classify(&self, path: &Path) -> Category {
        self.guess(path)
            .map(|mime| category_for_mime(&mime))
            .unwrap_or(Category::Unknown)
    }
}

/// Number of leading bytes inspected by [`MagicClassifier`].
const SNIFF_LEN: usize = 512;

/// Refines another classifier by reading magic bytes.
///
/// Only consulted when the inner classifier answers `Unknown` or
/// `Application`; a read failure keeps the inner answer.
#[derive(Debug, Clone, Default)]
pub struct MagicClassifier<C = MimeClassifier> {
    inner: C,
}

impl<C: Classifier> MagicClassifier<C> {
    /// Wrap `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    fn sniff(path: &Path) -> Option<Category> {
        let mut buf = [0u8; SNIFF_LEN];
        let mut file = File::open(path).ok()?;
        let mut len = 0;
        while len < buf.len() {
            match file.read(&mut buf[len..]) {
                Ok(0) => break,
                Ok(n) => len += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
        sniff_bytes(&buf[..len])
    }
}

impl<C: Classifier> Classifier for MagicClassifier<C> {
    fn classify(&self, path: &Path) -> Category {
        let category = self.inner.classify(path);
        match category {
            Category::Unknown | Category::Application => Self::sniff(path).unwrap_or(category),
            _ => category,
        }
    }
}

/// Recognize executable and archive signatures.
pub fn sniff_bytes(bytes: &[u8]) -> Option<Category> {
    const MACHO: &[[u8; 4]] = &[
        [0xfe, 0xed, 0xfa, 0xce],
        [0xfe, 0xed, 0xfa, 0xcf],
        [0xce, 0xfa, 0xed, 0xfe],
        [0xcf, 0xfa, 0xed, 0xfe],
    ];

    if bytes.starts_with(b"\x7fELF") || bytes.starts_with(b"MZ") {
        return Some(Category::Executable);
    }
    if MACHO.iter().any(|m| bytes.starts_with(m)) {
        return Some(Category::Executable);
    }
    if bytes.starts_with(b"PK\x03\x04") || bytes.starts_with(b"PK\x05\x06") {
        return Some(Category::Archive);
    }
    if bytes.get(257..262) == Some(b"ustar".as_slice()) {
        return Some(Category::Archive);
    }
    None
}
