//! Font family groups: every variant registered under one logical name.
//!
//! A group owns a `fontdb::Database` that plays the role of the native font
//! collection. Each registered blob may contribute one or more faces; faces
//! are bucketed into families by their family name, and both families and
//! faces keep the order in which they were registered. That order is the
//! tie-break for resolution.

use std::sync::Arc;

use fontdb::{Database, ID, Source};
use parking_lot::Mutex;

use crate::error::FontError;
use crate::staging::StagedFontBuffer;
use crate::types::{Font, FontStyle};

/// One family inside a group and the faces registered for it.
#[derive(Debug)]
struct FamilyEntry {
    name: String,
    faces: Vec<ID>,
}

struct GroupState {
    /// `None` once the group has been disposed.
    collection: Option<Database>,
    families: Vec<FamilyEntry>,
}

/// All font variants registered under one logical name.
pub struct FontFamilyGroup {
    name: String,
    bold_weight_threshold: u16,
    state: Mutex<GroupState>,
}

impl std::fmt::Debug for FontFamilyGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FontFamilyGroup")
            .field("name", &self.name)
            .field("families", &state.families)
            .field("disposed", &state.collection.is_none())
            .finish()
    }
}

impl FontFamilyGroup {
    /// Create an empty group with its own font collection.
    pub fn new(name: impl Into<String>, bold_weight_threshold: u16) -> Self {
        Self {
            name: name.into(),
            bold_weight_threshold,
            state: Mutex::new(GroupState {
                collection: Some(Database::new()),
                families: Vec::new(),
            }),
        }
    }

    /// Logical name this group is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the staged bytes as new variants of this group.
    ///
    /// The staged allocation moves into the collection without another
    /// copy. The collection keeps it if at least one face was read and drops
    /// it otherwise; `buffer` itself is released on every path.
    ///
    /// # Returns
    /// The number of faces the data contributed (more than one for
    /// collections).
    ///
    /// # Errors
    /// `InvalidFontData` if no face could be read from the bytes or a
    /// collection header declares more faces than the data can hold,
    /// `Disposed` if the group has already been torn down.
    pub fn register_variant(&self, buffer: StagedFontBuffer) -> Result<usize, FontError> {
        let len = buffer.len();
        if !collection_header_fits(buffer.as_slice()) {
            log::debug!(
                "Rejected font data for '{}': collection header overruns {} bytes",
                self.name,
                len
            );
            return Err(FontError::InvalidFontData {
                name: self.name.clone(),
                len,
            });
        }

        let mut guard = self.state.lock();
        let state = &mut *guard;
        let Some(collection) = state.collection.as_mut() else {
            return Err(FontError::Disposed(self.name.clone()));
        };

        let ids = collection.load_font_source(Source::Binary(buffer.into_shared()));

        if ids.is_empty() {
            return Err(FontError::InvalidFontData {
                name: self.name.clone(),
                len,
            });
        }

        for id in ids.iter().copied() {
            let Some(face) = collection.face(id) else {
                continue;
            };
            let family = face
                .families
                .first()
                .map(|(family, _)| family.clone())
                .unwrap_or_else(|| face.post_script_name.clone());

            log::debug!(
                "Registered face '{}' (family '{}', weight {}, {:?}) in group '{}'",
                face.post_script_name,
                family,
                face.weight.0,
                face.style,
                self.name
            );

            match state.families.iter_mut().find(|entry| entry.name == family) {
                Some(entry) => entry.faces.push(id),
                None => state.families.push(FamilyEntry {
                    name: family,
                    faces: vec![id],
                }),
            }
        }

        Ok(ids.len())
    }

    /// Whether any registered face satisfies `style`.
    pub fn is_style_available(&self, style: FontStyle) -> bool {
        let state = self.state.lock();
        let Some(collection) = state.collection.as_ref() else {
            return false;
        };
        state
            .families
            .iter()
            .any(|family| self.find_face(collection, family, style).is_some())
    }

    /// Resolve a font at `size` points for `style`.
    ///
    /// Families are scanned in registration order and the first one with a
    /// matching face wins. Returns `None` when no face matches or the group
    /// has been disposed; no substitution is attempted.
    pub fn resolve(&self, size: f32, style: FontStyle) -> Option<Font> {
        let state = self.state.lock();
        let collection = state.collection.as_ref()?;

        for family in &state.families {
            let Some(id) = self.find_face(collection, family, style) else {
                continue;
            };
            let Some(face) = collection.face(id) else {
                continue;
            };
            let Source::Binary(data) = &face.source else {
                continue;
            };

            log::debug!(
                "Resolved '{}' {} {}pt to face '{}'",
                self.name,
                style,
                size,
                face.post_script_name
            );

            return Some(Font {
                family: family.name.clone(),
                post_script_name: face.post_script_name.clone(),
                size,
                style,
                weight: face.weight.0,
                italic: face.style != fontdb::Style::Normal,
                face_index: face.index,
                data: Arc::clone(data),
            });
        }

        log::debug!("No face in '{}' supports {}", self.name, style);
        None
    }

    /// Family names in the order they were first registered.
    pub fn families(&self) -> Vec<String> {
        self.state
            .lock()
            .families
            .iter()
            .map(|family| family.name.clone())
            .collect()
    }

    /// Number of faces in the collection.
    pub fn face_count(&self) -> usize {
        self.state
            .lock()
            .collection
            .as_ref()
            .map_or(0, Database::len)
    }

    pub fn is_empty(&self) -> bool {
        self.face_count() == 0
    }

    pub fn is_disposed(&self) -> bool {
        self.state.lock().collection.is_none()
    }

    /// Release the font collection. Later registrations fail with
    /// `Disposed` and queries find nothing. Disposing twice is a no-op.
    pub fn dispose(&self) {
        let mut state = self.state.lock();
        if let Some(collection) = state.collection.take() {
            log::info!(
                "Disposed font group '{}' ({} faces, {} families)",
                self.name,
                collection.len(),
                state.families.len()
            );
        }
        state.families.clear();
    }

    /// First face of `family`, in registration order, that satisfies `style`.
    fn find_face(
        &self,
        collection: &Database,
        family: &FamilyEntry,
        style: FontStyle,
    ) -> Option<ID> {
        family.faces.iter().copied().find(|id| {
            collection.face(*id).is_some_and(|face| {
                style.matches_face(
                    face.weight.0,
                    face.style != fontdb::Style::Normal,
                    self.bold_weight_threshold,
                )
            })
        })
    }
}

/// A `ttcf` header lists one 4-byte offset per face after its 12-byte
/// preamble. The font database walks every declared face, so a count the
/// data cannot back must be refused before loading.
fn collection_header_fits(data: &[u8]) -> bool {
    match ttf_parser::fonts_in_collection(data) {
        Some(count) => 12 + 4 * u64::from(count) <= data.len() as u64,
        None => true,
    }
}
