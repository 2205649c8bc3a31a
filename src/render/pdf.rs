//! PDF output: one US Letter page per puzzle.
//!
//! Page layout, top to bottom:
//! - the title, centered, Helvetica-Bold 24pt;
//! - the description (if any), centered, Helvetica 18pt;
//! - the grid, centered in the remaining space, square cells, framed;
//! - the sorted word list in three columns.
//!
//! Only the base-14 Helvetica faces are used, so nothing is embedded. Text is
//! limited to printable ASCII; anything else is shown as `?`.

use std::path::Path;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::puzzle::WordSearch;
use crate::render::RenderError;

// Points (1/72 inch)
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 36.0;

const TITLE_SIZE: f32 = 24.0;
const DESCRIPTION_SIZE: f32 = 18.0;
const WORD_LIST_SIZE: f32 = 12.0;
const WORD_LIST_LEADING: f32 = 16.0;
const WORD_LIST_COLUMNS: usize = 3;
const SECTION_GAP: f32 = 24.0;
const MAX_CELL: f32 = 36.0;
const MIN_CELL: f32 = 6.0;
/// Grid letter size relative to the cell.
const LETTER_SCALE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Bold,
    Regular,
}

impl Face {
    fn resource_name(self) -> Name<'static> {
        match self {
            Face::Bold => Name(b"F1"),
            Face::Regular => Name(b"F2"),
        }
    }
}

/// Collects puzzle pages and produces a single document.
#[derive(Debug, Default)]
pub struct PdfBuilder {
    pages: Vec<Vec<u8>>,
}

impl PdfBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lay out `ws` on a new page.
    pub fn add_puzzle(&mut self, ws: &WordSearch) {
        self.pages.push(render_page(ws));
    }

    /// Serialize the document.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let catalog_id = Ref::new(1);
        let tree_id = Ref::new(2);
        let bold_id = Ref::new(3);
        let regular_id = Ref::new(4);

        // page and content objects alternate after the fixed ones
        let page_ids: Vec<Ref> = (0..self.pages.len()).map(|i| Ref::new(5 + 2 * i as i32)).collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));
        pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));

        for (page_id, content) in page_ids.iter().zip(&self.pages) {
            let content_id = Ref::new(page_id.get() + 1);
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            page.parent(tree_id);
            page.contents(content_id);
            page.resources()
                .fonts()
                .pair(Face::Bold.resource_name(), bold_id)
                .pair(Face::Regular.resource_name(), regular_id);
            page.finish();
            pdf.stream(content_id, content);
        }

        pdf.finish()
    }

    /// Serialize the document and save it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Io`] if the file cannot be written.
    pub fn write_to_path<P: AsRef<Path>>(self, path: P) -> Result<(), RenderError> {
        let path_ref = path.as_ref();
        std::fs::write(path_ref, self.finish()).map_err(|source| RenderError::Io {
            path: path_ref.to_path_buf(),
            source,
        })
    }
}

/// Where the grid goes on the page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GridLayout {
    cell: f32,
    left: f32,
    top: f32,
}

/// Fit an `nrows × ncols` grid into the band between `band_top` and `band_bottom`.
fn layout_grid(nrows: usize, ncols: usize, band_top: f32, band_bottom: f32) -> GridLayout {
    let usable_width = PAGE_WIDTH - 2.0 * MARGIN;
    let usable_height = (band_top - band_bottom).max(0.0);
    let cell = (usable_width / ncols as f32)
        .min(usable_height / nrows as f32)
        .clamp(MIN_CELL, MAX_CELL);
    let grid_width = cell * ncols as f32;
    let grid_height = cell * nrows as f32;
    GridLayout {
        cell,
        left: (PAGE_WIDTH - grid_width) / 2.0,
        top: band_top - ((usable_height - grid_height) / 2.0).max(0.0),
    }
}

fn render_page(ws: &WordSearch) -> Vec<u8> {
    let mut content = Content::new();

    // header
    let mut baseline = PAGE_HEIGHT - MARGIN - TITLE_SIZE;
    show_centered(&mut content, Face::Bold, TITLE_SIZE, baseline, ws.title());
    if !ws.description().is_empty() {
        baseline -= DESCRIPTION_SIZE + 10.0;
        show_centered(&mut content, Face::Regular, DESCRIPTION_SIZE, baseline, ws.description());
    }
    let band_top = baseline - SECTION_GAP;

    // footer: word list, column-major
    let words = ws.word_list();
    let list_rows = words.len().div_ceil(WORD_LIST_COLUMNS);
    let list_height = list_rows as f32 * WORD_LIST_LEADING;
    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / WORD_LIST_COLUMNS as f32;
    for (i, word) in words.iter().enumerate() {
        let column = i / list_rows;
        let row = i % list_rows;
        let x = MARGIN + column as f32 * column_width;
        let y = MARGIN + list_height - (row + 1) as f32 * WORD_LIST_LEADING + 4.0;
        show_text(&mut content, Face::Regular, WORD_LIST_SIZE, x, y, word);
    }
    let band_bottom = MARGIN + list_height + SECTION_GAP;

    // grid
    let layout = layout_grid(ws.nrows(), ws.ncols(), band_top, band_bottom);
    let letter_size = layout.cell * LETTER_SCALE;
    for (r, row) in ws.grid().rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let Some(glyph) = cell else { continue };
            let glyph = char::from(*glyph).to_string();
            let center_x = layout.left + (c as f32 + 0.5) * layout.cell;
            // 0.35em drops a capital's middle onto the cell centre
            let y = layout.top - (r as f32 + 0.5) * layout.cell - letter_size * 0.35;
            let x = center_x - text_width(&glyph, letter_size, Face::Bold) / 2.0;
            show_text(&mut content, Face::Bold, letter_size, x, y, &glyph);
        }
    }
    let pad = layout.cell * 0.15;
    content.set_line_width(1.0);
    content.rect(
        layout.left - pad,
        layout.top - ws.nrows() as f32 * layout.cell - pad,
        ws.ncols() as f32 * layout.cell + 2.0 * pad,
        ws.nrows() as f32 * layout.cell + 2.0 * pad,
    );
    content.stroke();

    content.finish()
}

fn show_centered(content: &mut Content, face: Face, size: f32, y: f32, text: &str) {
    let x = (PAGE_WIDTH - text_width(text, size, face)) / 2.0;
    show_text(content, face, size, x.max(MARGIN), y, text);
}

fn show_text(content: &mut Content, face: Face, size: f32, x: f32, y: f32, text: &str) {
    let bytes = encode(text);
    content.begin_text();
    content.set_font(face.resource_name(), size);
    content.next_line(x, y);
    content.show(Str(&bytes));
    content.end_text();
}

/// Printable ASCII passes through; everything else becomes `?`.
fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c == ' ' || c.is_ascii_graphic() { c as u8 } else { b'?' })
        .collect()
}

/// Advance width of `text` in points, from the Helvetica AFM metrics.
fn text_width(text: &str, size: f32, face: Face) -> f32 {
    let units: u32 = encode(text).iter().map(|&b| glyph_width(b, face)).sum();
    units as f32 * size / 1000.0
}

/// Glyph width in 1/1000 em. Unlisted glyphs use the digit width.
fn glyph_width(byte: u8, face: Face) -> u32 {
    const REGULAR_UPPER: [u32; 26] = [
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    ];
    const REGULAR_LOWER: [u32; 26] = [
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    ];
    const BOLD_UPPER: [u32; 26] = [
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    ];
    const BOLD_LOWER: [u32; 26] = [
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    ];
    match (byte, face) {
        (b'A'..=b'Z', Face::Regular) => REGULAR_UPPER[usize::from(byte - b'A')],
        (b'a'..=b'z', Face::Regular) => REGULAR_LOWER[usize::from(byte - b'a')],
        (b'A'..=b'Z', Face::Bold) => BOLD_UPPER[usize::from(byte - b'A')],
        (b'a'..=b'z', Face::Bold) => BOLD_LOWER[usize::from(byte - b'a')],
        (b' ' | b'.' | b',', _) => 278,
        _ => 556,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::search::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn puzzle(title: &str, words: &[&str]) -> WordSearch {
        let config = BuildConfig { min_rows: 6, max_rows: 8, min_cols: 6, max_cols: 8, ..BuildConfig::default() };
        generate(title, "A test page", words, &config, &mut StdRng::seed_from_u64(5)).unwrap()
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_empty_document_is_still_a_pdf() {
        let bytes = PdfBuilder::new().finish();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Count 0"));
    }

    #[test]
    fn test_one_page_per_puzzle() {
        let mut builder = PdfBuilder::new();
        builder.add_puzzle(&puzzle("Farm", &["cow", "pig", "hen"]));
        builder.add_puzzle(&puzzle("Sea", &["eel", "cod", "ray"]));
        assert_eq!(builder.page_count(), 2);
        let bytes = builder.finish();
        assert!(contains(&bytes, b"/Count 2"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"(Farm)"));
        assert!(contains(&bytes, b"(Sea)"));
        assert!(contains(&bytes, b"(cow)"));
    }

    #[test]
    fn test_layout_fits_inside_the_band() {
        let layout = layout_grid(20, 15, 700.0, 120.0);
        assert!(layout.cell * 20.0 <= 580.0 + f32::EPSILON);
        assert!(layout.left >= MARGIN);
        assert!(layout.top <= 700.0);
        assert!(layout.top - layout.cell * 20.0 >= 120.0 - 0.01);
    }

    #[test]
    fn test_layout_caps_cell_size() {
        let layout = layout_grid(2, 2, 700.0, 100.0);
        assert_eq!(layout.cell, MAX_CELL);
        assert!((layout.left - (PAGE_WIDTH - 2.0 * MAX_CELL) / 2.0).abs() < 0.01);
    }

    #[test]
    fn test_encode_replaces_non_ascii() {
        assert_eq!(encode("Café au lait"), b"Caf? au lait".to_vec());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 12.0, Face::Regular), 0.0);
        // W is the widest capital
        assert!(text_width("W", 10.0, Face::Bold) > text_width("I", 10.0, Face::Bold));
        assert!((text_width("AA", 10.0, Face::Regular) - 13.34).abs() < 0.01);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let err = PdfBuilder::new().write_to_path("no/such/dir/out.pdf").unwrap_err();
        assert_eq!(err.code(), "R001");
        assert!(err.display_detailed().contains("--pdf"));
    }
}
