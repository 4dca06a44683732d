use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use tracing::debug;

use crate::font::{FontError, FontFace, Result};

/// Key for identifying a font within the cache.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    /// Path to the font file on disk.
    pub path: PathBuf,
    /// Font index within the file (for collections).
    pub index: u32,
}

impl FontKey {
    pub fn new(path: impl AsRef<Path>, index: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            index: index as u32,
        }
    }
}

/// Simple in-memory font cache keyed by file path and index.
#[derive(Debug, Default)]
pub struct FontCache {
    fonts: HashMap<FontKey, Arc<FontFace>>,
}

impl FontCache {
    pub fn new() -> Self {
        Self {
            fonts: HashMap::new(),
        }
    }

    /// Get a font face from the cache or load it from disk.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>, index: usize) -> Result<Arc<FontFace>> {
        let key = FontKey::new(&path, index);
        if let Some(face) = self.fonts.get(&key) {
            return Ok(face.clone());
        }

        let face = Arc::new(FontFace::from_path(&key.path, index)?);
        debug!(path = %key.path.display(), index, "loaded font face");
        self.fonts.insert(key, face.clone());
        Ok(face)
    }

    /// Insert an already constructed font face with an explicit key.
    pub fn insert(&mut self, key: FontKey, face: Arc<FontFace>) {
        self.fonts.insert(key, face);
    }

    pub fn get(&self, key: &FontKey) -> Option<Arc<FontFace>> {
        self.fonts.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

/// Find the platform's default sans-serif face through fontdb.
pub fn load_system_default_font() -> Result<FontFace> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db.query(&query).ok_or(FontError::NoSystemFont)?;
    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(FontError::NoSystemFont)?;
    debug!(faces = db.len(), index, "resolved system sans-serif face");
    FontFace::from_vec(data, index as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_propagates_load_errors() {
        let mut cache = FontCache::new();
        assert!(cache.get_or_load("/no/such/font.ttf", 0).is_err());
        assert!(cache.is_empty());
        assert!(cache.get(&FontKey::new("/no/such/font.ttf", 0)).is_none());
    }
}
