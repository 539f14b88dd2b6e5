//! Generate a barcode sheet PDF from a file of codes.
//!
//! Usage:
//!   cargo run --release --bin sheetgen -- codes.txt --output labels.pdf
//!   cargo run --release --bin sheetgen -- codes.txt --columns 2 --rows 6 --border
//!
//! The codes file holds one code per line; blank lines become blank cells.

use barcode_sheet::{PageSize, SheetBuilder};
use std::path::PathBuf;
use std::process::ExitCode;

struct SheetArgs {
    codes_path: PathBuf,
    output: PathBuf,
    page: PageSize,
    columns: u32,
    rows: u32,
    margins: Option<(f32, f32, f32, f32)>,
    barcode_height: Option<f32>,
    cell_padding: Option<f32>,
    caption: bool,
    border: bool,
}

impl SheetArgs {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut codes_path = None;
        let mut output = PathBuf::from("sheet.pdf");
        let mut page = PageSize::A4;
        let mut columns = 2;
        let mut rows = 6;
        let mut margins = None;
        let mut barcode_height = None;
        let mut cell_padding = None;
        let mut caption = true;
        let mut border = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output" | "-o" => {
                    i += 1;
                    output = PathBuf::from(next_value(&args, i)?);
                },
                "--page" => {
                    i += 1;
                    page = parse_page(next_value(&args, i)?)?;
                },
                "--columns" | "-c" => {
                    i += 1;
                    columns = parse_num(next_value(&args, i)?, "--columns")?;
                },
                "--rows" | "-r" => {
                    i += 1;
                    rows = parse_num(next_value(&args, i)?, "--rows")?;
                },
                "--margins" => {
                    i += 1;
                    margins = Some(parse_margins(next_value(&args, i)?)?);
                },
                "--barcode-height" => {
                    i += 1;
                    barcode_height = Some(parse_num(next_value(&args, i)?, "--barcode-height")?);
                },
                "--padding" => {
                    i += 1;
                    cell_padding = Some(parse_num(next_value(&args, i)?, "--padding")?);
                },
                "--no-caption" => caption = false,
                "--border" => border = true,
                "--help" | "-h" => return Err(usage()),
                other if codes_path.is_none() && !other.starts_with('-') => {
                    codes_path = Some(PathBuf::from(other));
                },
                other => return Err(format!("Unknown argument: {}\n\n{}", other, usage())),
            }
            i += 1;
        }

        Ok(Self {
            codes_path: codes_path.ok_or_else(usage)?,
            output,
            page,
            columns,
            rows,
            margins,
            barcode_height,
            cell_padding,
            caption,
            border,
        })
    }
}

fn usage() -> String {
    "Usage: sheetgen <codes-file> [--output PATH] [--page a4|letter|legal|a3|a4-landscape] \
     [--columns N] [--rows N] [--margins L,R,T,B] [--barcode-height MM] [--padding MM] \
     [--no-caption] [--border]"
        .to_string()
}

fn next_value<'a>(args: &'a [String], i: usize) -> Result<&'a str, String> {
    args.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing value for {}\n\n{}", args[i - 1], usage()))
}

fn parse_num<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value))
}

fn parse_page(value: &str) -> Result<PageSize, String> {
    match value.to_lowercase().as_str() {
        "a4" => Ok(PageSize::A4),
        "a4-landscape" => Ok(PageSize::A4.landscape()),
        "letter" => Ok(PageSize::Letter),
        "legal" => Ok(PageSize::Legal),
        "a3" => Ok(PageSize::A3),
        other => Err(format!("Unknown page size: {}", other)),
    }
}

fn parse_margins(value: &str) -> Result<(f32, f32, f32, f32), String> {
    let parts: Vec<f32> = value
        .split(',')
        .map(|p| p.trim().parse())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("Invalid margins: {}", value))?;
    if parts.len() != 4 {
        return Err(format!(
            "Margins must be four comma-separated mm values, got: {}",
            value
        ));
    }
    Ok((parts[0], parts[1], parts[2], parts[3]))
}

fn run(args: SheetArgs) -> barcode_sheet::Result<usize> {
    let content = std::fs::read_to_string(&args.codes_path)?;
    let codes: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();
    let code_count = codes.len();

    let mut builder = SheetBuilder::new(codes, args.page, args.columns, args.rows)
        .with_caption(args.caption)
        .with_border(args.border)
        .to_file(&args.output);
    if let Some((l, r, t, b)) = args.margins {
        builder = builder.page_margins(l, r, t, b);
    }
    if let Some(height) = args.barcode_height {
        builder = builder.barcode_height(height);
    }
    if let Some(padding) = args.cell_padding {
        builder = builder.cell_padding(padding);
    }

    builder.build()?;
    Ok(code_count)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match SheetArgs::from_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        },
    };

    let output = args.output.clone();
    match run(args) {
        Ok(count) => {
            println!("Wrote {} code(s) to {}", count, output.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}
