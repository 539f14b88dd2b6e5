//! Barcode symbol encoding.
//!
//! The layout pipeline only depends on the [`SymbolEncoder`] capability, so
//! tests can substitute fakes. The shipped implementation is
//! [`Code128Encoder`], built on the `barcoders` crate.

use crate::error::{Error, Result};

/// A drawable barcode symbol.
///
/// The module pattern is a run of 1s (bars) and 0s (spaces), one entry per
/// module at the symbol's nominal narrow-bar width. The document writer
/// scales and positions it inside a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Bar/space pattern, one byte per module (1 = bar, 0 = space)
    pub modules: Vec<u8>,
    /// Bar height in points
    pub bar_height: f32,
    /// Human-readable caption rendered beneath the bars, if any
    pub caption: Option<String>,
}

impl Glyph {
    /// Number of modules in the pattern.
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

/// Capability interface for turning a code string into a drawable glyph.
pub trait SymbolEncoder {
    /// Encode `code` into a glyph.
    ///
    /// `height_hint` is the bar height computed by the grid layout; `None`
    /// means the encoder should use its intrinsic default height. When
    /// `with_caption` is set the glyph carries the human-readable text to
    /// draw beneath the bars.
    fn encode(&self, code: &str, height_hint: Option<f32>, with_caption: bool) -> Result<Glyph>;
}

/// Bar height used when the layout supplies no hint.
pub const DEFAULT_BAR_HEIGHT: f32 = 50.0;

/// Code 128 symbol encoder.
///
/// Encodes with automatic modulo-103 checksum (the `barcoders` encoder
/// always emits it). Code content rules (character repertoire, length) are
/// enforced here, not by the layout pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128Encoder;

impl Code128Encoder {
    /// Create a new Code 128 encoder.
    pub fn new() -> Self {
        Self
    }
}

impl SymbolEncoder for Code128Encoder {
    fn encode(&self, code: &str, height_hint: Option<f32>, with_caption: bool) -> Result<Glyph> {
        use barcoders::sym::code128::Code128;

        // Code128 requires a character set prefix per barcoders library:
        // \u{00C0} = À - Character set A (uppercase, control chars)
        // \u{0181} = Ɓ - Character set B (alphanumeric, most common)
        // \u{0106} = Ć - Character set C (numeric pairs)
        // Auto-prepend character set B if not specified
        let data = if code.starts_with('\u{00C0}')
            || code.starts_with('\u{0181}')
            || code.starts_with('\u{0106}')
        {
            code.to_string()
        } else {
            format!("\u{0181}{}", code)
        };

        let symbol = Code128::new(&data)
            .map_err(|e| Error::Encode(format!("Code128 encoding error: {}", e)))?;

        Ok(Glyph {
            modules: symbol.encode(),
            bar_height: height_hint.unwrap_or(DEFAULT_BAR_HEIGHT),
            caption: with_caption.then(|| code.to_string()),
        })
    }
}
