use memchr::memchr_iter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanLine {
    pub start: usize,
    pub end: usize,
    pub is_blank: bool,
}

impl ScanLine {
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }
}

/// Split input into line spans, dropping a trailing `\r` from each line.
pub fn scan_lines(input: &str) -> Vec<ScanLine> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for idx in memchr_iter(b'\n', bytes) {
        lines.push(build_line(bytes, start, idx));
        start = idx + 1;
    }
    lines.push(build_line(bytes, start, bytes.len()));
    lines
}

fn build_line(bytes: &[u8], start: usize, mut end: usize) -> ScanLine {
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    let is_blank = bytes[start..end].iter().all(u8::is_ascii_whitespace);
    ScanLine {
        start,
        end,
        is_blank,
    }
}
