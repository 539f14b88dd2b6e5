//! Grid geometry derived from validated configuration.

use crate::margin::SheetMargin;
use crate::page::PageSize;

/// Subtracted from the computed row height so that `rows` full rows never
/// overflow the usable page area through float accumulation.
const ROW_EPSILON: f32 = 0.001;

/// Concrete per-cell geometry for the whole grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Fixed height of every row in points
    pub row_height: f32,
    /// Bar height hint passed to the encoder; `None` when the barcode
    /// height is unset and the encoder should use its intrinsic default
    pub bar_height: Option<f32>,
}

impl GridLayout {
    /// Derive the grid geometry.
    ///
    /// `barcode_height` is the configured height value in points; zero
    /// means unset. The configured value acts as a percentage of the cell
    /// content height, and the result is halved because the encoder
    /// reserves the other half of the cell for the caption.
    pub fn compute(
        page_size: PageSize,
        margins: &SheetMargin,
        rows: u32,
        cell_padding: f32,
        barcode_height: f32,
    ) -> Self {
        let row_height = (page_size.height() - margins.vertical()) / rows as f32 - ROW_EPSILON;
        let bar_height = (barcode_height > 0.0)
            .then(|| ((row_height - 2.0 * cell_padding) * (barcode_height / 100.0)) / 2.0);

        log::debug!(
            "Computed layout: row height {} pt, bar height {:?}",
            row_height,
            bar_height
        );

        Self {
            row_height,
            bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_height_divides_usable_page_area() {
        let margins = SheetMargin::new(0.0, 0.0, 21.0, 21.0);
        let layout = GridLayout::compute(PageSize::A4, &margins, 4, 0.0, 0.0);
        // (842 - 42) / 4 minus the epsilon
        assert!((layout.row_height - (200.0 - 0.001)).abs() < 1e-4);
    }

    #[test]
    fn test_unset_barcode_height_gives_no_hint() {
        let layout = GridLayout::compute(PageSize::A4, &SheetMargin::default(), 1, 10.0, 0.0);
        assert!(layout.bar_height.is_none());
    }

    #[test]
    fn test_bar_height_halves_padded_content() {
        let margins = SheetMargin::default();
        let layout = GridLayout::compute(PageSize::Custom(500.0, 400.004), &margins, 4, 10.0, 50.0);
        // row height = 400.004/4 - 0.001 = 100.0
        assert!((layout.row_height - 100.0).abs() < 1e-4);
        // ((100 - 20) * 0.5) / 2 = 20
        let bar = layout.bar_height.unwrap();
        assert!((bar - 20.0).abs() < 1e-3);
    }
}
