//! # barcode_sheet
//!
//! Lay out batches of short textual codes into printable grids of Code 128
//! barcodes, producing finished paginated PDF documents.
//!
//! ## Architecture
//!
//! - **Core pipeline**: [`SheetBuilder`] accumulates configuration through
//!   chained setters, then `build()` validates, derives the grid geometry,
//!   renders one cell per code, and hands the assembled table to the
//!   document writer.
//! - **Collaborators behind traits**: the [`SymbolEncoder`] turns a code
//!   string into a drawable glyph; the [`DocumentWriter`] serializes the
//!   cell grid into paginated bytes. Both ship with production
//!   implementations ([`Code128Encoder`], [`PdfDocumentWriter`]) and can be
//!   substituted for testing.
//!
//! ## Quick start
//!
//! ```no_run
//! use barcode_sheet::{PageSize, SheetBuilder};
//!
//! let codes: Vec<String> = (0..16).map(|i| format!("ITEM{:04}", i)).collect();
//!
//! let pdf = SheetBuilder::new(codes, PageSize::A4, 2, 6)
//!     .page_margins(0.0, 0.0, 5.0, 5.0)
//!     .cell_padding(5.0)
//!     .with_caption(true)
//!     .to_file("labels.pdf")
//!     .build()?;
//! # Ok::<(), barcode_sheet::Error>(())
//! ```
//!
//! Units on the configuration surface are millimeters; all internal
//! geometry is in PDF points (72 per inch).

#![warn(missing_docs)]

// Error handling
pub mod error;

// Leaf models
pub mod margin;
pub mod page;
pub mod table;
pub mod units;

// Collaborators
pub mod encode;
pub mod writer;

// Orchestration
pub mod sheet;

pub use encode::{Code128Encoder, Glyph, SymbolEncoder};
pub use error::{Error, Result};
pub use margin::SheetMargin;
pub use page::PageSize;
pub use sheet::{BuildState, GridLayout, SheetBuilder};
pub use table::{CellAlign, CellVAlign, SheetCell, SheetTable};
pub use writer::{DocumentWriter, PdfDocumentWriter, PdfWriterConfig};
