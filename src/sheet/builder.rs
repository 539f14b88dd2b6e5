//! Fluent sheet builder and the validation pass that gates it.

use super::layout::GridLayout;
use crate::encode::{Code128Encoder, SymbolEncoder};
use crate::error::{Error, Result};
use crate::margin::SheetMargin;
use crate::page::PageSize;
use crate::table::{SheetCell, SheetTable};
use crate::units::mm_to_points;
use crate::writer::{DocumentWriter, PdfDocumentWriter};
use std::path::PathBuf;

/// Maximum bar height in points when captions are enabled; taller symbols
/// would leave no vertical room for the caption text inside the cell.
pub const MAX_CAPTIONED_BAR_HEIGHT: f32 = 86.5;

/// Default cell padding in points.
pub const DEFAULT_CELL_PADDING: f32 = 25.0;

/// Where the builder is in its validate-then-render lifecycle.
///
/// `build()` is re-runnable: re-validating already-padded codes adds zero
/// placeholder entries, so a second run yields identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Setters may still change the configuration
    Configuring,
    /// Validation succeeded; codes are padded and defaults substituted
    Validated,
    /// A document has been produced
    Rendered,
}

/// Accumulated builder configuration.
#[derive(Debug, Clone)]
struct SheetConfig {
    codes: Vec<String>,
    page_size: PageSize,
    columns: u32,
    rows: u32,
    column_percents: Option<Vec<f32>>,
    margins: Option<SheetMargin>,
    barcode_height: f32,
    with_caption: bool,
    with_border: bool,
    cell_padding: f32,
    file_path: Option<PathBuf>,
}

/// Fluent builder that lays a batch of codes out into a barcode sheet.
///
/// Setters accumulate configuration without computing anything;
/// [`build`](SheetBuilder::build) validates, computes the grid geometry,
/// renders every cell, and serializes the document.
///
/// # Example
///
/// ```no_run
/// use barcode_sheet::{PageSize, SheetBuilder};
///
/// let codes = vec!["0346507217481".to_string(), "3201645466849".to_string()];
/// let pdf = SheetBuilder::new(codes, PageSize::A4, 2, 6)
///     .page_margins(0.0, 0.0, 5.0, 5.0)
///     .cell_padding(5.0)
///     .with_caption(true)
///     .to_file("labels.pdf")
///     .build()?;
/// # Ok::<(), barcode_sheet::Error>(())
/// ```
pub struct SheetBuilder {
    config: SheetConfig,
    state: BuildState,
    encoder: Box<dyn SymbolEncoder>,
    writer: Box<dyn DocumentWriter>,
}

impl SheetBuilder {
    /// Create a builder for `codes` laid out on `page_size` in a grid of
    /// `columns` x `rows` cells per page.
    pub fn new(codes: Vec<String>, page_size: PageSize, columns: u32, rows: u32) -> Self {
        Self {
            config: SheetConfig {
                codes,
                page_size,
                columns,
                rows,
                column_percents: None,
                margins: None,
                barcode_height: 0.0,
                with_caption: true,
                with_border: false,
                cell_padding: DEFAULT_CELL_PADDING,
                file_path: None,
            },
            state: BuildState::Configuring,
            encoder: Box::new(Code128Encoder::new()),
            writer: Box::new(PdfDocumentWriter::new()),
        }
    }

    /// Set the column width distribution in percent.
    ///
    /// Must have one entry per column and sum to exactly 100.
    pub fn column_widths(mut self, percents: Vec<f32>) -> Self {
        self.config.column_percents = Some(percents);
        self
    }

    /// Set the page margins in mm.
    pub fn page_margins(mut self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        self.config.margins = Some(SheetMargin::from_mm(left, right, top, bottom));
        self
    }

    /// Set the barcode height in mm.
    ///
    /// Keep in mind that a barcode taller than its cell will not be
    /// displayed.
    pub fn barcode_height(mut self, mm: f32) -> Self {
        self.config.barcode_height = mm_to_points(mm);
        self
    }

    /// Display the code text below each barcode.
    pub fn with_caption(mut self, with_caption: bool) -> Self {
        self.config.with_caption = with_caption;
        self
    }

    /// Show a border around each cell.
    pub fn with_border(mut self, with_border: bool) -> Self {
        self.config.with_border = with_border;
        self
    }

    /// Set the cell padding in mm.
    pub fn cell_padding(mut self, mm: f32) -> Self {
        self.config.cell_padding = mm_to_points(mm);
        self
    }

    /// Save the sheet to `path` after building, in addition to returning
    /// the bytes.
    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    /// Substitute the symbol encoder.
    pub fn encoder(mut self, encoder: impl SymbolEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    /// Substitute the document writer.
    pub fn document_writer(mut self, writer: impl DocumentWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Check the accumulated configuration, then normalize it: substitute
    /// default margins, clamp the captioned bar height, synthesize an equal
    /// column distribution, and pad the codes to a full final row.
    ///
    /// Every failing check returns before any of the normalization steps
    /// run, so a failed validation leaves the configuration untouched.
    fn validate(&mut self) -> Result<()> {
        let config = &mut self.config;

        let (page_width, page_height) = config.page_size.dimensions();
        if !page_width.is_finite()
            || !page_height.is_finite()
            || page_width <= 0.0
            || page_height <= 0.0
        {
            return Err(Error::Validation(
                "Page size must have positive dimensions".to_string(),
            ));
        }
        if config.codes.is_empty() {
            return Err(Error::Validation(
                "Codes count must be greater than 0".to_string(),
            ));
        }
        if config.columns < 1 {
            return Err(Error::Validation(
                "Column count must be greater than 0".to_string(),
            ));
        }
        if config.rows < 1 {
            return Err(Error::Validation(
                "Row count must be greater than 0".to_string(),
            ));
        }
        if let Some(percents) = &config.column_percents {
            if percents.len() != config.columns as usize {
                return Err(Error::Validation(
                    "Column count and percentage distribution of columns must be the same size"
                        .to_string(),
                ));
            }
            // Exact equality on purpose: a distribution that is off by any
            // fraction is rejected rather than silently renormalized
            let sum: f32 = percents.iter().sum();
            if sum != 100.0 {
                return Err(Error::Validation(format!(
                    "Sum of column percentage widths must be exactly 100, got {}",
                    sum
                )));
            }
        }

        match &config.margins {
            Some(margins) => margins.validate()?,
            None => config.margins = Some(SheetMargin::default()),
        }

        if config.barcode_height > MAX_CAPTIONED_BAR_HEIGHT && config.with_caption {
            log::debug!(
                "Clamping barcode height {} to {} to reserve caption space",
                config.barcode_height,
                MAX_CAPTIONED_BAR_HEIGHT
            );
            config.barcode_height = MAX_CAPTIONED_BAR_HEIGHT;
        }

        if config.column_percents.is_none() {
            let share = 100.0 / config.columns as f32;
            config.column_percents = Some(vec![share; config.columns as usize]);
        }

        let columns = config.columns as usize;
        let remainder = config.codes.len() % columns;
        if remainder != 0 {
            let fill = columns - remainder;
            config
                .codes
                .extend(std::iter::repeat(String::new()).take(fill));
            log::debug!("Padded codes with {} blank placeholder(s)", fill);
        }

        log::debug!(
            "Validated configuration: {} codes in a {}x{} grid",
            config.codes.len(),
            config.columns,
            config.rows
        );
        Ok(())
    }

    /// Validate, compute the grid geometry, render every cell, serialize
    /// the document, and optionally persist it.
    ///
    /// Returns the document bytes whether or not a file path was set.
    pub fn build(&mut self) -> Result<Vec<u8>> {
        self.validate()?;
        self.state = BuildState::Validated;

        let margins = self.config.margins.unwrap_or_default();
        let layout = GridLayout::compute(
            self.config.page_size,
            &margins,
            self.config.rows,
            self.config.cell_padding,
            self.config.barcode_height,
        );

        let percents = self.config.column_percents.clone().unwrap_or_default();
        let mut table = SheetTable::new(
            percents,
            layout.row_height,
            self.config.page_size.width(),
            self.config.rows as usize,
        );

        for code in &self.config.codes {
            let mut cell = SheetCell::new(layout.row_height, self.config.cell_padding)
                .with_border(self.config.with_border);
            if !code.is_empty() {
                let glyph =
                    self.encoder
                        .encode(code, layout.bar_height, self.config.with_caption)?;
                cell = cell.with_glyph(glyph);
            }
            table.add_cell(cell);
        }

        let bytes = self
            .writer
            .write_document(self.config.page_size, &margins, &table)?;
        self.state = BuildState::Rendered;

        if let Some(path) = &self.config.file_path {
            std::fs::write(path, &bytes)?;
            log::info!("Saved sheet to {}", path.display());
        }

        Ok(bytes)
    }
}
