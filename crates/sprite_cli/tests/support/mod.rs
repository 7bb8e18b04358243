//! Minimal TrueType font assembled in memory.
//!
//! Glyphs: 0 `.notdef` (empty), 1 space (empty), 2 `中` (square),
//! 3 `文` (triangle). 1000 units per em.

const SQUARE: &[(i16, i16)] = &[(100, 0), (900, 0), (900, 800), (100, 800)];
const TRIANGLE: &[(i16, i16)] = &[(0, -100), (1000, -100), (500, 900)];

pub fn tiny_font() -> Vec<u8> {
    let glyphs = [Vec::new(), Vec::new(), simple_glyph(SQUARE), simple_glyph(TRIANGLE)];
    let num_glyphs = glyphs.len() as u16;

    let mut glyf = Vec::new();
    let mut loca = Vec::new();
    for glyph in &glyphs {
        put_u16(&mut loca, (glyf.len() / 2) as u16);
        glyf.extend_from_slice(glyph);
    }
    put_u16(&mut loca, (glyf.len() / 2) as u16);

    let mut hmtx = Vec::new();
    for _ in 0..num_glyphs {
        put_u16(&mut hmtx, 1000);
        put_i16(&mut hmtx, 0);
    }

    // Table records must be sorted by tag.
    let tables: [(&[u8; 4], Vec<u8>); 7] = [
        (b"cmap", cmap(&[(0x20, 1), (0x4e2d, 2), (0x6587, 3)])),
        (b"glyf", glyf),
        (b"head", head()),
        (b"hhea", hhea(num_glyphs)),
        (b"hmtx", hmtx),
        (b"loca", loca),
        (b"maxp", maxp(num_glyphs)),
    ];

    let mut font = Vec::new();
    put_u32(&mut font, 0x0001_0000);
    put_u16(&mut font, tables.len() as u16);
    put_u16(&mut font, 64);
    put_u16(&mut font, 2);
    put_u16(&mut font, tables.len() as u16 * 16 - 64);

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font.extend_from_slice(*tag);
        put_u32(&mut font, 0);
        put_u32(&mut font, offset as u32);
        put_u32(&mut font, data.len() as u32);
        offset += padded_len(data.len());
    }
    for (_, data) in &tables {
        font.extend_from_slice(data);
        font.resize(font.len() + padded_len(data.len()) - data.len(), 0);
    }
    font
}

fn simple_glyph(points: &[(i16, i16)]) -> Vec<u8> {
    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    let mut data = Vec::new();
    put_i16(&mut data, 1);
    put_i16(&mut data, x_min);
    put_i16(&mut data, y_min);
    put_i16(&mut data, x_max);
    put_i16(&mut data, y_max);
    put_u16(&mut data, points.len() as u16 - 1);
    put_u16(&mut data, 0);
    // On-curve points with 16-bit signed deltas.
    data.extend(std::iter::repeat(0x01).take(points.len()));

    let mut previous = (0, 0);
    let mut ys = Vec::new();
    for &(x, y) in points {
        put_i16(&mut data, x - previous.0);
        put_i16(&mut ys, y - previous.1);
        previous = (x, y);
    }
    data.extend_from_slice(&ys);
    if data.len() % 2 == 1 {
        data.push(0);
    }
    data
}

fn cmap(mappings: &[(u32, u32)]) -> Vec<u8> {
    let mut data = Vec::new();
    put_u16(&mut data, 0);
    put_u16(&mut data, 1);
    // Windows, Unicode full repertoire, format 12.
    put_u16(&mut data, 3);
    put_u16(&mut data, 10);
    put_u32(&mut data, 12);

    put_u16(&mut data, 12);
    put_u16(&mut data, 0);
    put_u32(&mut data, 16 + 12 * mappings.len() as u32);
    put_u32(&mut data, 0);
    put_u32(&mut data, mappings.len() as u32);
    for &(codepoint, glyph) in mappings {
        put_u32(&mut data, codepoint);
        put_u32(&mut data, codepoint);
        put_u32(&mut data, glyph);
    }
    data
}

fn head() -> Vec<u8> {
    let mut data = Vec::new();
    put_u32(&mut data, 0x0001_0000);
    put_u32(&mut data, 0x0001_0000);
    put_u32(&mut data, 0);
    put_u32(&mut data, 0x5f0f_3cf5);
    put_u16(&mut data, 0);
    put_u16(&mut data, 1000);
    data.extend_from_slice(&[0; 16]);
    put_i16(&mut data, 0);
    put_i16(&mut data, -100);
    put_i16(&mut data, 1000);
    put_i16(&mut data, 900);
    put_u16(&mut data, 0);
    put_u16(&mut data, 8);
    put_i16(&mut data, 2);
    // Short loca offsets.
    put_i16(&mut data, 0);
    put_i16(&mut data, 0);
    debug_assert_eq!(data.len(), 54);
    data
}

fn hhea(num_metrics: u16) -> Vec<u8> {
    let mut data = Vec::new();
    put_u32(&mut data, 0x0001_0000);
    put_i16(&mut data, 900);
    put_i16(&mut data, -100);
    put_i16(&mut data, 0);
    put_u16(&mut data, 1000);
    put_i16(&mut data, 0);
    put_i16(&mut data, 0);
    put_i16(&mut data, 1000);
    put_i16(&mut data, 1);
    put_i16(&mut data, 0);
    put_i16(&mut data, 0);
    data.extend_from_slice(&[0; 8]);
    put_i16(&mut data, 0);
    put_u16(&mut data, num_metrics);
    debug_assert_eq!(data.len(), 36);
    data
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut data = Vec::new();
    put_u32(&mut data, 0x0000_5000);
    put_u16(&mut data, num_glyphs);
    data
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
