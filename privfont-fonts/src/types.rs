//! Style flags and the resolved font type.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Style attributes a caller can request when resolving a font.
    ///
    /// `BOLD` and `ITALIC` select a face. `UNDERLINE` and `STRIKEOUT` are
    /// decorations drawn by the renderer and are available wherever the
    /// underlying bold/italic combination is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FontStyle: u8 {
        const REGULAR = 0;
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKEOUT = 1 << 3;
    }
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        self.contains(FontStyle::BOLD)
    }

    pub fn is_italic(self) -> bool {
        self.contains(FontStyle::ITALIC)
    }

    /// The face-selecting part of the style (bold and italic only).
    pub fn face_style(self) -> FontStyle {
        self & (FontStyle::BOLD | FontStyle::ITALIC)
    }

    /// Whether a face with the given weight and slant satisfies this style.
    ///
    /// A face is bold when its weight reaches `bold_threshold` and italic
    /// when it is italic or oblique.
    pub fn matches_face(self, weight: u16, italic: bool, bold_threshold: u16) -> bool {
        (weight >= bold_threshold) == self.is_bold() && italic == self.is_italic()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (FontStyle::BOLD, "Bold"),
            (FontStyle::ITALIC, "Italic"),
            (FontStyle::UNDERLINE, "Underline"),
            (FontStyle::STRIKEOUT, "Strikeout"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();

        if names.is_empty() {
            f.write_str("Regular")
        } else {
            f.write_str(&names.join(" "))
        }
    }
}

/// A renderable font resolved from a family group.
///
/// Built fresh on every resolution and owned by the caller. The face data
/// is shared with the group's collection and stays valid for as long as the
/// caller holds the `Font`, even after the registry is disposed.
#[derive(Clone)]
pub struct Font {
    pub(crate) family: String,
    pub(crate) post_script_name: String,
    pub(crate) size: f32,
    pub(crate) style: FontStyle,
    pub(crate) weight: u16,
    pub(crate) italic: bool,
    pub(crate) face_index: u32,
    pub(crate) data: Arc<dyn AsRef<[u8]> + Send + Sync>,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.family)
            .field("post_script_name", &self.post_script_name)
            .field("size", &self.size)
            .field("style", &self.style)
            .field("weight", &self.weight)
            .field("face_index", &self.face_index)
            .field("data_len", &self.data().len())
            .finish()
    }
}

impl Font {
    /// Family name of the face this font was resolved to.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn post_script_name(&self) -> &str {
        &self.post_script_name
    }

    /// Point size requested by the caller.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Style requested by the caller, decorations included.
    pub fn style(&self) -> FontStyle {
        self.style
    }

    /// Weight class of the resolved face (400 = normal, 700 = bold).
    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Whether the resolved face is italic or oblique.
    pub fn is_italic_face(&self) -> bool {
        self.italic
    }

    /// Face index within the data blob (non-zero only for collections).
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Raw bytes of the font file the face came from.
    pub fn data(&self) -> &[u8] {
        (*self.data).as_ref()
    }

    /// Borrow a swash font reference for glyph lookup and rasterization.
    ///
    /// Returns `None` if swash cannot read the face header.
    pub fn font_ref(&self) -> Option<swash::FontRef<'_>> {
        swash::FontRef::from_index(self.data(), self.face_index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_is_empty_set() {
        assert!(FontStyle::REGULAR.is_empty());
        assert_eq!(FontStyle::default(), FontStyle::REGULAR);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FontStyle::REGULAR.to_string(), "Regular");
        assert_eq!(FontStyle::BOLD.to_string(), "Bold");
        assert_eq!(
            (FontStyle::BOLD | FontStyle::ITALIC).to_string(),
            "Bold Italic"
        );
        assert_eq!(
            (FontStyle::ITALIC | FontStyle::STRIKEOUT).to_string(),
            "Italic Strikeout"
        );
    }

    #[test]
    fn test_decorations_do_not_select_faces() {
        let style = FontStyle::UNDERLINE | FontStyle::STRIKEOUT;
        assert_eq!(style.face_style(), FontStyle::REGULAR);
        assert!(style.matches_face(400, false, 600));
        assert!(!style.matches_face(700, false, 600));
    }

    #[test]
    fn test_bold_threshold() {
        assert!(FontStyle::BOLD.matches_face(600, false, 600));
        assert!(!FontStyle::BOLD.matches_face(500, false, 600));
        assert!(!FontStyle::REGULAR.matches_face(600, false, 600));
        assert!(FontStyle::BOLD.matches_face(700, false, 700));
    }

    #[test]
    fn test_italic_must_match_exactly() {
        assert!(FontStyle::ITALIC.matches_face(400, true, 600));
        assert!(!FontStyle::ITALIC.matches_face(400, false, 600));
        assert!(!FontStyle::REGULAR.matches_face(400, true, 600));
        assert!((FontStyle::BOLD | FontStyle::ITALIC).matches_face(800, true, 600));
    }
}
