use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::Parser;
use pipegrid::canonical::is_canonical_with_options;
use pipegrid::{fence, Edit, FenceOptions, Grid, ParseOptions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pipegrid", version, about = "Reformat and edit pipe-delimited tables")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Edit to apply, in order: remove-row=N, remove-column=N,
    /// insert-column-left=N, insert-column-right=N, insert-row-above=N,
    /// insert-row-below=N, append-column, append-row, toggle-header=N,
    /// set=ROW,COL,TEXT.
    #[arg(long = "op", value_name = "edit", value_parser = parse_edit)]
    ops: Vec<Edit>,

    /// Print the grid model as JSON instead of table text.
    #[arg(long, conflicts_with = "fence")]
    json: bool,

    /// Wrap the output in a fenced code block.
    #[arg(long)]
    fence: bool,

    /// Info string of the fenced block.
    #[arg(long = "info-string", value_name = "tag", default_value = "tb")]
    info_string: String,

    /// Treat pipe-free input as a plain cell instead of an "RxC" size.
    #[arg(long = "no-compact")]
    no_compact: bool,

    /// Exit with an error when the input is not in canonical form.
    #[arg(long, conflicts_with_all = ["ops", "json", "output"])]
    check: bool,
}

#[derive(Debug)]
enum InputSource {
    Stdin,
    File(String),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (input_text, input_source) = read_input(args.input.as_deref())?;
    let fence_options = FenceOptions::new().with_info_string(args.info_string.clone());
    let parse_options = ParseOptions::new().with_compact_size(!args.no_compact);

    let fenced = fence::is_fenced(&input_text);
    let body = if fenced {
        fence::unwrap_block(&input_text, &fence_options)?
    } else {
        input_text.as_str()
    };
    tracing::debug!(?input_source, fenced, "read input");

    if args.check {
        if is_canonical_with_options(body, &parse_options) {
            return Ok(());
        }
        return Err("input is not in canonical form".into());
    }

    let mut grid = pipegrid::from_str_with_options(body, &parse_options);
    let changed = grid.apply_all(&args.ops)?;
    tracing::debug!(
        edits = args.ops.len(),
        changed,
        rows = grid.row_count(),
        columns = grid.column_count(),
        "applied edits"
    );

    let output_target = OutputTarget::from_arg(args.output.as_deref());
    if args.json {
        with_output_writer(output_target.path(), |writer| write_json(writer, &grid))?;
    } else {
        let mut text = pipegrid::to_string(&grid);
        if args.fence || fenced {
            text = fence::wrap(&text, &fence_options);
        }
        write_output(output_target.path(), text.as_bytes())?;
    }
    if let OutputTarget::File(path) = &output_target {
        report_status(&input_source, path);
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<(String, InputSource), Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok((buf, InputSource::Stdin))
        }
        Some(path) => {
            let buf = fs::read_to_string(path)?;
            Ok((buf, InputSource::File(path.to_string())))
        }
    }
}

fn parse_edit(raw: &str) -> Result<Edit, String> {
    let (name, arg) = match raw.split_once('=') {
        Some((name, arg)) => (name.trim(), Some(arg)),
        None => (raw.trim(), None),
    };
    let index = || -> Result<usize, String> {
        let arg = arg.ok_or_else(|| format!("\"{name}\" needs an index, e.g. {name}=0"))?;
        arg.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid index \"{arg}\" for \"{name}\""))
    };

    let edit = match name {
        "remove-row" => Edit::RemoveRow(index()?),
        "remove-column" => Edit::RemoveColumn(index()?),
        "insert-column-left" => Edit::InsertColumnLeft(index()?),
        "insert-column-right" => Edit::InsertColumnRight(index()?),
        "insert-row-above" => Edit::InsertRowAbove(index()?),
        "insert-row-below" => Edit::InsertRowBelow(index()?),
        "append-column" => Edit::AppendColumn,
        "append-row" => Edit::AppendRow,
        "toggle-header" => Edit::ToggleHeader(index()?),
        "set" => parse_set(arg.unwrap_or_default())?,
        _ => return Err(format!("unknown edit \"{name}\"")),
    };
    Ok(edit)
}

// `set=ROW,COL,TEXT`; TEXT may contain commas and `\n` for a line break.
fn parse_set(arg: &str) -> Result<Edit, String> {
    let mut parts = arg.splitn(3, ',');
    let (Some(row), Some(column), Some(text)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("invalid set \"{arg}\", expected ROW,COL,TEXT"));
    };
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row \"{row}\""))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column \"{column}\""))?;
    Ok(Edit::SetCell {
        row,
        column,
        text: text.replace("\\n", "\n"),
    })
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_output(path: Option<&str>, data: &[u8]) -> Result<(), Box<dyn Error>> {
    with_output_writer(path, |writer| {
        writer.write_all(data)?;
        Ok(())
    })
}

fn write_json(writer: &mut dyn Write, grid: &Grid) -> Result<(), Box<dyn Error>> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    grid.serialize(&mut serializer)?;
    Ok(())
}

fn report_status(input_source: &InputSource, output_path: &str) {
    let input_label = match input_source {
        InputSource::Stdin => "stdin".to_string(),
        InputSource::File(path) => display_path(path),
    };
    let output_label = display_path(output_path);
    println!("✔ Wrote {input_label} → {output_label}");
}

fn display_path(path: &str) -> String {
    let path = Path::new(path);
    let Ok(cwd) = std::env::current_dir() else {
        return path.to_string_lossy().into_owned();
    };
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    match abs.strip_prefix(&cwd) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => abs.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_index_edits() {
        assert_eq!(parse_edit("remove-row=2"), Ok(Edit::RemoveRow(2)));
        assert_eq!(parse_edit("toggle-header = 0"), Ok(Edit::ToggleHeader(0)));
        assert_eq!(parse_edit("append-row"), Ok(Edit::AppendRow));
    }

    #[test]
    fn parses_set_with_commas_and_breaks() {
        assert_eq!(
            parse_edit("set=1,0,a, b\\nc"),
            Ok(Edit::SetCell {
                row: 1,
                column: 0,
                text: "a, b\nc".to_string(),
            })
        );
    }

    #[test]
    fn rejects_bad_edits() {
        assert!(parse_edit("remove-row").is_err());
        assert!(parse_edit("remove-row=x").is_err());
        assert!(parse_edit("set=1").is_err());
        assert!(parse_edit("explode=1").is_err());
    }
}
