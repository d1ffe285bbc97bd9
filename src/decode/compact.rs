/// Grid dimensions from the pipe-free `<columns> x <rows>` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactSize {
    pub columns: usize,
    pub rows: usize,
}

impl CompactSize {
    pub fn cells(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }
}

/// Match `<digits> <junk> x <junk> <digits>`, case-insensitive.
///
/// The first digit run gives the column count. The row count is the last
/// digit run that follows the last `x` having any digit after it. Zero or
/// overflowing values do not match.
pub fn parse_size(input: &str) -> Option<CompactSize> {
    let bytes = input.as_bytes();

    let first_start = bytes.iter().position(u8::is_ascii_digit)?;
    let first_end = digit_run_end(bytes, first_start);

    let last_digit = bytes.iter().rposition(u8::is_ascii_digit)?;
    if last_digit < first_end {
        return None;
    }
    let x_pos = first_end
        + bytes[first_end..last_digit]
            .iter()
            .rposition(|&byte| byte == b'x' || byte == b'X')?;

    let mut second_start = last_digit;
    while second_start > x_pos + 1 && bytes[second_start - 1].is_ascii_digit() {
        second_start -= 1;
    }

    let columns = parse_positive(&input[first_start..first_end])?;
    let rows = parse_positive(&input[second_start..=last_digit])?;
    Some(CompactSize { columns, rows })
}

fn digit_run_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|byte| !byte.is_ascii_digit())
        .map_or(bytes.len(), |offset| start + offset)
}

fn parse_positive(digits: &str) -> Option<usize> {
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}
