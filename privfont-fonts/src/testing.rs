//! In-memory sfnt builder for tests.
//!
//! Produces the smallest TrueType file the font database accepts: a table
//! directory with `OS/2`, `head`, `hhea`, `maxp` and `name`. The family name,
//! weight class and italic bit are configurable, which is all the registry
//! looks at. No glyph outlines are included.

/// Build a font file for `family` with the given weight class and slant.
pub fn font_bytes(family: &str, weight: u16, italic: bool) -> Vec<u8> {
    let subfamily = match (weight >= 600, italic) {
        (false, false) => "Regular",
        (true, false) => "Bold",
        (false, true) => "Italic",
        (true, true) => "BoldItalic",
    };
    let post_script_name = format!("{}-{}", family.replace(' ', ""), subfamily);

    // Tags must be sorted for the directory's binary search.
    let tables: [(&[u8; 4], Vec<u8>); 5] = [
        (b"OS/2", os2_table(weight, italic)),
        (b"head", head_table(weight, italic)),
        (b"hhea", hhea_table()),
        (b"maxp", maxp_table()),
        (b"name", name_table(family, &post_script_name)),
    ];

    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;
    let range_shift = num_tables * 16 - search_range;

    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000);
    push_u16(&mut out, num_tables);
    push_u16(&mut out, search_range);
    push_u16(&mut out, entry_selector);
    push_u16(&mut out, range_shift);

    let mut offset = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        out.extend_from_slice(*tag);
        push_u32(&mut out, checksum(data));
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);

        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + 16 * tables.len() + body.len();
    }
    out.extend_from_slice(&body);
    out
}

/// Weight 400, upright.
pub fn regular_font(family: &str) -> Vec<u8> {
    font_bytes(family, 400, false)
}

/// Weight 700, upright.
pub fn bold_font(family: &str) -> Vec<u8> {
    font_bytes(family, 700, false)
}

/// Weight 400, italic.
pub fn italic_font(family: &str) -> Vec<u8> {
    font_bytes(family, 400, true)
}

/// Weight 700, italic.
pub fn bold_italic_font(family: &str) -> Vec<u8> {
    font_bytes(family, 700, true)
}

fn os2_table(weight: u16, italic: bool) -> Vec<u8> {
    // Version 0 layout, 78 bytes.
    let mut t = vec![0u8; 78];
    put_u16(&mut t, 0, 0); // version
    put_u16(&mut t, 2, 500); // xAvgCharWidth
    put_u16(&mut t, 4, weight); // usWeightClass
    put_u16(&mut t, 6, 5); // usWidthClass: medium
    let fs_selection: u16 = match (weight >= 600, italic) {
        (false, false) => 0x0040,
        (true, false) => 0x0020,
        (false, true) => 0x0001,
        (true, true) => 0x0021,
    };
    put_u16(&mut t, 62, fs_selection);
    put_u16(&mut t, 64, 0x0020); // usFirstCharIndex
    put_u16(&mut t, 66, 0x007E); // usLastCharIndex
    put_u16(&mut t, 68, 800); // sTypoAscender
    put_u16(&mut t, 70, (-200i16) as u16); // sTypoDescender
    put_u16(&mut t, 74, 1000); // usWinAscent
    put_u16(&mut t, 76, 200); // usWinDescent
    t
}

fn head_table(weight: u16, italic: bool) -> Vec<u8> {
    let mut t = vec![0u8; 54];
    put_u32(&mut t, 0, 0x0001_0000); // version
    put_u32(&mut t, 4, 0x0001_0000); // fontRevision
    put_u32(&mut t, 12, 0x5F0F_3CF5); // magicNumber
    put_u16(&mut t, 18, 1000); // unitsPerEm
    put_u16(&mut t, 40, 1000); // xMax
    put_u16(&mut t, 42, 800); // yMax
    let mac_style = u16::from(weight >= 600) | (u16::from(italic) << 1);
    put_u16(&mut t, 44, mac_style);
    put_u16(&mut t, 46, 8); // lowestRecPPEM
    put_u16(&mut t, 48, 2); // fontDirectionHint
    put_u16(&mut t, 50, 0); // indexToLocFormat: short
    t
}

fn hhea_table() -> Vec<u8> {
    let mut t = vec![0u8; 36];
    put_u32(&mut t, 0, 0x0001_0000); // version
    put_u16(&mut t, 4, 800); // ascender
    put_u16(&mut t, 6, (-200i16) as u16); // descender
    put_u16(&mut t, 10, 500); // advanceWidthMax
    put_u16(&mut t, 18, 1); // caretSlopeRise
    put_u16(&mut t, 34, 1); // numberOfHMetrics
    t
}

fn maxp_table() -> Vec<u8> {
    let mut t = vec![0u8; 6];
    put_u32(&mut t, 0, 0x0000_5000); // version 0.5
    put_u16(&mut t, 4, 1); // numGlyphs
    t
}

fn name_table(family: &str, post_script_name: &str) -> Vec<u8> {
    let records: [(u16, Vec<u8>); 2] = [(1, utf16_be(family)), (6, utf16_be(post_script_name))];

    let mut t = Vec::new();
    push_u16(&mut t, 0); // format
    push_u16(&mut t, records.len() as u16);
    push_u16(&mut t, 6 + 12 * records.len() as u16); // storage offset

    let mut storage = Vec::new();
    for (name_id, data) in &records {
        push_u16(&mut t, 3); // platform: Windows
        push_u16(&mut t, 1); // encoding: Unicode BMP
        push_u16(&mut t, 0x0409); // language: English (US)
        push_u16(&mut t, *name_id);
        push_u16(&mut t, data.len() as u16);
        push_u16(&mut t, storage.len() as u16);
        storage.extend_from_slice(data);
    }
    t.extend_from_slice(&storage);
    t
}

fn utf16_be(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn push_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn put_u16(out: &mut [u8], at: usize, v: u16) {
    out[at..at + 2].copy_from_slice(&v.to_be_bytes());
}

fn put_u32(out: &mut [u8], at: usize, v: u32) {
    out[at..at + 4].copy_from_slice(&v.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_header() {
        let data = regular_font("Test");
        assert_eq!(&data[0..4], &[0, 1, 0, 0]);
        assert_eq!(u16::from_be_bytes([data[4], data[5]]), 5);
        // searchRange, entrySelector, rangeShift for five tables
        assert_eq!(u16::from_be_bytes([data[6], data[7]]), 64);
        assert_eq!(u16::from_be_bytes([data[8], data[9]]), 2);
        assert_eq!(u16::from_be_bytes([data[10], data[11]]), 16);
        assert_eq!(data.len() % 4, 0);
    }

    #[test]
    fn test_database_reads_family_and_style() {
        let mut db = fontdb::Database::new();
        db.load_font_data(bold_italic_font("Test Sans"));
        let face = db.faces().next().expect("face should load");
        assert_eq!(face.families[0].0, "Test Sans");
        assert_eq!(face.post_script_name, "TestSans-BoldItalic");
        assert_eq!(face.weight.0, 700);
        assert_eq!(face.style, fontdb::Style::Italic);
    }
}
