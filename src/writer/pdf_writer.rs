//! PDF document writer.
//!
//! Assembles the complete sheet document with proper structure: header,
//! body, xref table, and trailer. One content stream per page; the cell
//! grid is paginated at the table's rows-per-page count.

use super::content_stream::ContentStreamBuilder;
use super::DocumentWriter;
use crate::error::Result;
use crate::margin::SheetMargin;
use crate::page::PageSize;
use crate::table::{CellAlign, CellVAlign, SheetCell, SheetTable};
use std::io::Write;

/// Width of one barcode module in points.
const MODULE_WIDTH: f32 = 1.0;

/// Stroke width for cell borders in points.
const BORDER_WIDTH: f32 = 0.5;

/// Caption font size in points.
const CAPTION_FONT_SIZE: f32 = 8.0;

/// Vertical gap between the bars and the caption baseline, in points.
const CAPTION_GAP: f32 = 2.0;

/// Approximate Helvetica advance per character, as a fraction of the font
/// size. Good enough to center a short caption under its bars.
const CAPTION_ADVANCE: f32 = 0.5;

/// Caption font resource name and base font.
const CAPTION_FONT: (&str, &str) = ("F1", "Helvetica");

/// Configuration for PDF generation.
#[derive(Debug, Clone)]
pub struct PdfWriterConfig {
    /// PDF version (e.g., "1.7")
    pub version: String,
    /// Document title
    pub title: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// Whether to compress content streams with FlateDecode
    pub compress: bool,
}

impl Default for PdfWriterConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            title: None,
            creator: Some("barcode_sheet".to_string()),
            compress: false,
        }
    }
}

impl PdfWriterConfig {
    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// The shipped [`DocumentWriter`]: serializes the cell grid into PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfDocumentWriter {
    config: PdfWriterConfig,
}

impl PdfDocumentWriter {
    /// Create a writer with default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom config.
    pub fn with_config(config: PdfWriterConfig) -> Self {
        Self { config }
    }

    /// Render one page worth of rows into a content stream.
    fn render_page(
        &self,
        rows: &[Vec<SheetCell>],
        page_size: PageSize,
        margins: &SheetMargin,
        table: &SheetTable,
    ) -> Result<Vec<u8>> {
        let (page_width, page_height) = page_size.dimensions();
        let mut cs = ContentStreamBuilder::new();
        cs.save_state();

        // Table spans the full configured total width, centered on the page
        let table_left = (page_width - table.total_width) / 2.0;
        let widths = table.column_widths();
        let mut row_top = page_height - margins.top;

        for row in rows {
            let mut x = table_left;
            for (col, cell) in row.iter().enumerate() {
                self.draw_cell(&mut cs, cell, x, row_top, widths[col]);
                x += widths[col];
            }
            row_top -= table.row_height;
        }

        cs.restore_state();
        cs.build()
    }

    /// Draw one cell: optional border, then the glyph bars and caption.
    fn draw_cell(
        &self,
        cs: &mut ContentStreamBuilder,
        cell: &SheetCell,
        x: f32,
        row_top: f32,
        width: f32,
    ) {
        let y = row_top - cell.height;

        if cell.border {
            cs.set_line_width(BORDER_WIDTH)
                .rect(x, y, width, cell.height)
                .stroke();
        }

        let Some(glyph) = &cell.glyph else {
            return;
        };

        let content_w = width - 2.0 * cell.padding;
        let content_h = cell.height - 2.0 * cell.padding;
        let caption_block = if glyph.caption.is_some() {
            CAPTION_FONT_SIZE + CAPTION_GAP
        } else {
            0.0
        };
        let symbol_w = glyph.module_count() as f32 * MODULE_WIDTH;
        let symbol_h = glyph.bar_height + caption_block;

        let bar_x = x + cell.padding
            + match cell.align {
                CellAlign::Left => 0.0,
                CellAlign::Center => (content_w - symbol_w) / 2.0,
                CellAlign::Right => content_w - symbol_w,
            };
        let bar_y = y + cell.padding
            + caption_block
            + match cell.valign {
                CellVAlign::Top => content_h - symbol_h,
                CellVAlign::Middle => (content_h - symbol_h) / 2.0,
                CellVAlign::Bottom => 0.0,
            };

        cs.bars(&glyph.modules, bar_x, bar_y, MODULE_WIDTH, glyph.bar_height);

        if let Some(caption) = &glyph.caption {
            let text_w = caption.chars().count() as f32 * CAPTION_FONT_SIZE * CAPTION_ADVANCE;
            let text_x = bar_x + (symbol_w - text_w) / 2.0;
            let text_y = bar_y - caption_block;
            cs.set_font(CAPTION_FONT.0, CAPTION_FONT_SIZE)
                .text(caption, text_x, text_y)
                .end_text();
        }
    }
}

impl DocumentWriter for PdfDocumentWriter {
    fn write_document(
        &self,
        page_size: PageSize,
        margins: &SheetMargin,
        table: &SheetTable,
    ) -> Result<Vec<u8>> {
        let (page_width, page_height) = page_size.dimensions();
        let pages: Vec<&[Vec<SheetCell>]> = table.rows().chunks(table.rows_per_page.max(1)).collect();
        log::info!(
            "Assembling {} cell(s) into {} page(s)",
            table.cell_count(),
            pages.len()
        );

        let mut output = Vec::new();
        let mut xref_offsets: Vec<(u32, usize)> = Vec::new();

        // PDF header
        writeln!(output, "%PDF-{}", self.config.version)?;
        // Binary marker
        output.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

        // Fixed numbering: 1 catalog, 2 pages, 3 caption font, then a
        // page/content object pair per page, then the info dictionary
        let catalog_id = 1u32;
        let pages_id = 2u32;
        let font_id = 3u32;
        let first_page_id = 4u32;
        let info_id = first_page_id + 2 * pages.len() as u32;

        // Catalog
        xref_offsets.push((catalog_id, output.len()));
        writeln!(
            output,
            "{} 0 obj\n<< /Type /Catalog /Pages {} 0 R >>\nendobj",
            catalog_id, pages_id
        )?;

        // Pages
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", first_page_id + 2 * i as u32))
            .collect();
        xref_offsets.push((pages_id, output.len()));
        writeln!(
            output,
            "{} 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj",
            pages_id,
            kids.join(" "),
            pages.len()
        )?;

        // Caption font
        xref_offsets.push((font_id, output.len()));
        writeln!(
            output,
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>\nendobj",
            font_id, CAPTION_FONT.1
        )?;

        // Page and content stream objects
        for (i, page_rows) in pages.iter().enumerate() {
            let page_id = first_page_id + 2 * i as u32;
            let content_id = page_id + 1;

            xref_offsets.push((page_id, output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {} {}] /Contents {} 0 R /Resources << /Font << /{} {} 0 R >> >> >>\nendobj",
                page_id, pages_id, page_width, page_height, content_id, CAPTION_FONT.0, font_id
            )?;

            let raw_content = self.render_page(page_rows, page_size, margins, table)?;
            let (content, filter) = if self.config.compress {
                match compress_data(&raw_content) {
                    Ok(compressed) => (compressed, " /Filter /FlateDecode"),
                    Err(_) => (raw_content, ""),
                }
            } else {
                (raw_content, "")
            };

            xref_offsets.push((content_id, output.len()));
            writeln!(
                output,
                "{} 0 obj\n<< /Length {}{} >>\nstream",
                content_id,
                content.len(),
                filter
            )?;
            output.extend_from_slice(&content);
            writeln!(output, "endstream\nendobj")?;
        }

        // Info dictionary
        xref_offsets.push((info_id, output.len()));
        write!(output, "{} 0 obj\n<<", info_id)?;
        if let Some(title) = &self.config.title {
            write!(output, " /Title ({})", escape_pdf_string(title))?;
        }
        if let Some(creator) = &self.config.creator {
            write!(output, " /Creator ({})", escape_pdf_string(creator))?;
        }
        writeln!(output, " >>\nendobj")?;

        // Xref table
        let xref_start = output.len();
        let object_count = info_id + 1;
        writeln!(output, "xref")?;
        writeln!(output, "0 {}", object_count)?;
        writeln!(output, "0000000000 65535 f ")?;
        xref_offsets.sort_by_key(|(id, _)| *id);
        for (_, offset) in &xref_offsets {
            writeln!(output, "{:010} 00000 n ", offset)?;
        }

        // Trailer
        writeln!(
            output,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>",
            object_count, catalog_id, info_id
        )?;
        writeln!(output, "startxref\n{}", xref_start)?;
        write!(output, "%%EOF")?;

        Ok(output)
    }
}

/// Escape a literal PDF string.
fn escape_pdf_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
}
