//! Page size model for the output document.

/// Standard page sizes.
///
/// Dimensions are fixed for the whole document; there are no per-page size
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    Letter,
    /// A4 (210mm x 297mm)
    A4,
    /// Legal (8.5" x 14")
    Legal,
    /// A3 (297mm x 420mm)
    A3,
    /// Custom dimensions in points
    Custom(f32, f32),
}

impl PageSize {
    /// Get dimensions in points (1 inch = 72 points).
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.0, 842.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::A3 => (842.0, 1190.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }

    /// Page width in points.
    pub fn width(&self) -> f32 {
        self.dimensions().0
    }

    /// Page height in points.
    pub fn height(&self) -> f32 {
        self.dimensions().1
    }

    /// The same page rotated a quarter turn (width and height swapped).
    pub fn landscape(self) -> PageSize {
        let (w, h) = self.dimensions();
        PageSize::Custom(h, w)
    }
}
