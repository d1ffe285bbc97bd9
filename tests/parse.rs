use pipegrid::{from_slice, from_str, from_str_with_options, tokenize_line, Grid, ParseOptions};
use rstest::rstest;

fn heads(grid: &Grid) -> Vec<bool> {
    grid.rows().iter().map(|row| row.is_head()).collect()
}

#[rstest]
fn tokenizes_plain_line() {
    assert_eq!(tokenize_line("a | b | c").as_slice(), ["a", "b", "c"]);
}

#[rstest]
fn keeps_pipe_inside_code_span() {
    assert_eq!(
        tokenize_line("a | `b|c` | d").as_slice(),
        ["a", "`b|c`", "d"]
    );
}

#[rstest]
fn parses_header_table() {
    let grid = from_str("| A | B |\n| --- | --- |\n| 1 | 2 |");
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(heads(&grid), vec![true, false]);
    assert_eq!(grid.to_values(), vec![vec!["A", "B"], vec!["1", "2"]]);
}

#[rstest]
fn parses_compact_size() {
    let grid = from_str("3x2");
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.row_count(), 2);
    assert!(grid
        .rows()
        .iter()
        .flat_map(|row| row.cells())
        .all(|cell| cell.is_empty()));
}

#[rstest]
#[case("4 cols x 3 rows", 4, 3)]
#[case("make it 2X5 please", 2, 5)]
fn compact_size_tolerates_noise(
    #[case] input: &str,
    #[case] columns: usize,
    #[case] rows: usize,
) {
    let grid = from_str(input);
    assert_eq!(grid.column_count(), columns);
    assert_eq!(grid.row_count(), rows);
}

#[rstest]
fn pipes_disable_compact_size() {
    let grid = from_str("| 3x2 |");
    assert_eq!(grid.to_values(), vec![vec!["3x2"]]);
}

#[rstest]
#[case("")]
#[case("\n\n")]
fn empty_text_yields_empty_grid(#[case] input: &str) {
    let grid = from_str(input);
    assert_eq!(grid.row_count(), 0);
    assert_eq!(grid.column_count(), 0);
}

#[rstest]
fn plain_text_without_size_is_single_cell() {
    let grid = from_str("just some words");
    assert_eq!(grid.to_values(), vec![vec!["just some words"]]);
}

#[rstest]
fn header_flag_uses_raw_next_line() {
    let input = "| h1 |\n| --- |\n| h2 |\n| --- |\n| body |\n| tail |";
    let grid = from_str(input);
    assert_eq!(heads(&grid), vec![true, true, false, false]);
}

#[rstest]
fn blank_line_inside_block_marks_header() {
    let grid = from_str("| a |\n\n| b |");
    assert_eq!(heads(&grid), vec![true, false]);
    assert_eq!(grid.to_values(), vec![vec!["a"], vec!["b"]]);
}

#[rstest]
fn large_size_spec_builds_grid() {
    let grid = from_str("100x1000");
    assert_eq!(grid.column_count(), 100);
    assert_eq!(grid.row_count(), 1000);
}

#[rstest]
fn pads_short_rows_at_end() {
    let grid = from_str("| a | b | c |\n| --- |\n| d |");
    assert_eq!(grid.column_count(), 3);
    assert_eq!(
        grid.to_values(),
        vec![vec!["a", "b", "c"], vec!["d", "", ""]]
    );
}

#[rstest]
fn unbalanced_bracket_keeps_rest_of_line() {
    let grid = from_str("| [link | x |\n| a | b |");
    assert_eq!(
        grid.to_values(),
        vec![vec!["[link | x |", ""], vec!["a", "b"]]
    );
}

#[rstest]
fn compact_limit_is_configurable() {
    let options = ParseOptions::new().with_max_compact_cells(10);
    assert_eq!(from_str_with_options("5x2", &options).row_count(), 2);
    assert_eq!(from_str_with_options("5x3", &options).row_count(), 1);
}

#[rstest]
fn from_slice_parses_utf8() {
    let grid = from_slice("| ä | ß |".as_bytes()).unwrap();
    assert_eq!(grid.to_values(), vec![vec!["ä", "ß"]]);
    assert!(from_slice(&[0xc3, 0x28]).is_err());
}
