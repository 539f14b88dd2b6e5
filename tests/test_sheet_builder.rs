//! Integration tests for the sheet building pipeline with the shipped
//! Code 128 encoder and PDF writer.

use barcode_sheet::{Error, PageSize, SheetBuilder};
use tempfile::tempdir;

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_empty_codes() {
        let result = SheetBuilder::new(vec![], PageSize::A4, 1, 1).build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_columns() {
        let result =
            SheetBuilder::new(codes(&["12345XX789XXX", "12345XX789XXX"]), PageSize::A4, 0, 1)
                .build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_zero_rows() {
        let result =
            SheetBuilder::new(codes(&["12345XX789XXX", "12345XX789XXX"]), PageSize::A4, 1, 0)
                .build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_width_distribution_wrong_length() {
        let result =
            SheetBuilder::new(codes(&["12345XX789XXX", "12345XX789XXX"]), PageSize::A4, 2, 1)
                .column_widths(vec![50.0])
                .build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_width_distribution_wrong_sum() {
        let result =
            SheetBuilder::new(codes(&["12345XX789XXX", "12345XX789XXX"]), PageSize::A4, 2, 1)
                .column_widths(vec![50.0, 60.0])
                .build();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_negative_margin() {
        let result = SheetBuilder::new(codes(&["12345XX789XXX"]), PageSize::A4, 1, 1)
            .page_margins(0.0, 0.0, -5.0, 0.0)
            .build();
        assert!(matches!(result, Err(Error::Margin { edge: "top", .. })));
    }
}

mod build_tests {
    use super::*;

    #[test]
    fn test_build_pdf() {
        let pdf = SheetBuilder::new(
            codes(&["12345XX789XXX", "12345XX789XXX"]),
            PageSize::A4.landscape(),
            1,
            1,
        )
        .build()
        .unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(pdf.ends_with(b"%%EOF"));
    }

    #[test]
    fn test_two_codes_one_column_fill_two_pages() {
        // Two codes in a 1x1 grid: two rows, one row per page, no padding
        // placeholders (2 is already a multiple of 1)
        let pdf = SheetBuilder::new(codes(&["A", "B"]), PageSize::A4, 1, 1)
            .with_caption(false)
            .build()
            .unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("/Count 2"));
        // No captions requested, so no text operators at all
        assert!(!text.contains("Tj"));
    }

    #[test]
    fn test_captions_render_code_text() {
        let pdf = SheetBuilder::new(codes(&["HELLO1"]), PageSize::A4, 1, 1)
            .with_caption(true)
            .build()
            .unwrap();
        let text = String::from_utf8_lossy(&pdf);
        assert!(text.contains("(HELLO1) Tj"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn test_border_toggles_stroke_ops() {
        let without = SheetBuilder::new(codes(&["A"]), PageSize::A4, 1, 1)
            .with_caption(false)
            .build()
            .unwrap();
        let with = SheetBuilder::new(codes(&["A"]), PageSize::A4, 1, 1)
            .with_caption(false)
            .with_border(true)
            .build()
            .unwrap();
        let without = String::from_utf8_lossy(&without).to_string();
        let with = String::from_utf8_lossy(&with).to_string();
        assert!(!without.contains("\nS\n"));
        assert!(with.contains("\nS\n"));
    }

    #[test]
    fn test_invalid_code_surfaces_encoder_error() {
        // Newline is outside the Code 128 character set B repertoire
        let result = SheetBuilder::new(codes(&["BAD\nCODE"]), PageSize::A4, 1, 1).build();
        assert!(matches!(result, Err(Error::Encode(_))));
    }

    #[test]
    fn test_build_twice_is_byte_identical() {
        let mut builder = SheetBuilder::new(
            codes(&["0346507217481", "3201645466849"]),
            PageSize::A4,
            2,
            6,
        )
        .cell_padding(5.0);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_sheet() {
        let batch = codes(&[
            "0346507217481",
            "3201645466849",
            "2816929509955",
            "1107712517150",
            "5397983903493",
            "6316029131071",
            "1575888627926",
            "0379448783098",
            "9004007865434",
            "4643156545986",
            "8620126369151",
            "4139826881275",
            "2021829181068",
            "6037524548422",
            "0471817608732",
            "0446139002124",
        ]);
        let pdf = SheetBuilder::new(batch, PageSize::A4, 2, 6)
            .page_margins(0.0, 0.0, 5.0, 5.0)
            .cell_padding(5.0)
            .with_caption(true)
            .build()
            .unwrap();
        let text = String::from_utf8_lossy(&pdf);
        // 16 codes in 2 columns = 8 rows; at 6 rows per page that is 2 pages
        assert!(text.contains("/Count 2"));
        assert!(text.contains("(0346507217481) Tj"));
        assert!(text.contains("(0446139002124) Tj"));
    }
}

mod persistence_tests {
    use super::*;

    #[test]
    fn test_build_pdf_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.pdf");

        let pdf = SheetBuilder::new(
            codes(&["0346507217481", "3201645466849"]),
            PageSize::A4,
            2,
            6,
        )
        .page_margins(0.0, 0.0, 5.0, 5.0)
        .cell_padding(5.0)
        .to_file(&path)
        .build()
        .unwrap();

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, pdf);
    }

    #[test]
    fn test_unwritable_path_surfaces_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("sheet.pdf");

        let result = SheetBuilder::new(codes(&["A"]), PageSize::A4, 1, 1)
            .to_file(path)
            .build();
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

mod padding_properties {
    use super::*;
    use barcode_sheet::{DocumentWriter, Glyph, Result, SheetMargin, SheetTable, SymbolEncoder};
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct StubEncoder;

    impl SymbolEncoder for StubEncoder {
        fn encode(&self, code: &str, hint: Option<f32>, with_caption: bool) -> Result<Glyph> {
            Ok(Glyph {
                modules: vec![1],
                bar_height: hint.unwrap_or(1.0),
                caption: with_caption.then(|| code.to_string()),
            })
        }
    }

    #[derive(Clone, Default)]
    struct CountingWriter {
        cells: Arc<Mutex<usize>>,
    }

    impl DocumentWriter for CountingWriter {
        fn write_document(
            &self,
            _page_size: PageSize,
            _margins: &SheetMargin,
            table: &SheetTable,
        ) -> Result<Vec<u8>> {
            *self.cells.lock().unwrap() = table.cell_count();
            Ok(Vec::new())
        }
    }

    proptest! {
        #[test]
        fn padded_count_is_smallest_multiple_of_columns(
            code_count in 1usize..60,
            columns in 1u32..8,
        ) {
            let batch: Vec<String> = (0..code_count).map(|i| format!("C{}", i)).collect();
            let writer = CountingWriter::default();
            let mut builder = SheetBuilder::new(batch, PageSize::A4, columns, 4)
                .encoder(StubEncoder)
                .document_writer(writer.clone());
            builder.build().unwrap();

            let cells = *writer.cells.lock().unwrap();
            let columns = columns as usize;
            prop_assert_eq!(cells, code_count.div_ceil(columns) * columns);
            prop_assert!(cells - code_count < columns);
        }
    }
}
