//! Document writing: serializing a cell grid into paginated PDF bytes.
//!
//! ## Architecture
//!
//! ```text
//! SheetTable
//!     ↓
//! [DocumentWriter] (capability interface the layout pipeline calls)
//!     ↓
//! [PdfDocumentWriter] (pages → content streams → PDF structure)
//!     ↓
//! [ContentStreamBuilder] (cells → graphics/text operator bytes)
//!     ↓
//! PDF bytes
//! ```
//!
//! The layout pipeline only depends on the [`DocumentWriter`] trait, so the
//! core is testable against fakes. [`PdfDocumentWriter`] is the shipped
//! implementation.

mod content_stream;
mod pdf_writer;

pub use content_stream::{ContentStreamBuilder, ContentStreamOp};
pub use pdf_writer::{PdfDocumentWriter, PdfWriterConfig};

use crate::error::Result;
use crate::margin::SheetMargin;
use crate::page::PageSize;
use crate::table::SheetTable;

/// Capability interface for serializing the assembled cell grid.
///
/// Given the page dimensions, margins, and the table of cells, produce the
/// complete paginated document bytes.
pub trait DocumentWriter {
    /// Serialize `table` into document bytes.
    fn write_document(
        &self,
        page_size: PageSize,
        margins: &SheetMargin,
        table: &SheetTable,
    ) -> Result<Vec<u8>>;
}
