use std::fmt;
use std::path::Path;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and lent to the text renderer each frame so new glyphs can be rasterized
/// on demand.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Loads the first candidate path that reads and parses as a font.
    ///
    /// Returns the font id and the path it came from.
    pub fn load_first<'p, I>(&mut self, candidates: I) -> Result<(FontId, &'p Path), FontLoadError>
    where
        I: IntoIterator<Item = &'p Path>,
    {
        for path in candidates {
            let bytes = match std::fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::trace!("font candidate {} unreadable: {e}", path.display());
                    continue;
                }
            };
            match self.load_font(&bytes) {
                Ok(id) => return Ok((id, path)),
                Err(e) => log::warn!("font candidate {} rejected: {e}", path.display()),
            }
        }
        Err(FontLoadError("no candidate font could be loaded".to_string()))
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"definitely not a font").is_err());
    }

    #[test]
    fn unknown_id_has_no_font() {
        let fonts = FontSystem::new();
        assert!(fonts.get(FontId(3)).is_none());
    }

    #[test]
    fn load_first_skips_missing_and_invalid_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"nope").unwrap();
        let missing = dir.path().join("missing.ttf");

        let mut fonts = FontSystem::new();
        let result = fonts.load_first([missing.as_path(), bogus.as_path()]);
        assert!(result.is_err());
    }
}
