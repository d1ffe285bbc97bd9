use crate::constants::{PIPE, SEPARATOR_FIELD};

pub(crate) struct Writer {
    buffer: String,
    lines: usize,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            lines: 0,
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    /// `| a | b |`
    pub fn write_row<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
        self.begin_line();
        self.buffer.push(PIPE);
        for (idx, value) in values.into_iter().enumerate() {
            if idx > 0 {
                self.buffer.push(PIPE);
            }
            self.buffer.push(' ');
            self.buffer.push_str(value);
            self.buffer.push(' ');
        }
        self.buffer.push(PIPE);
    }

    /// `| --- | --- |`
    pub fn write_separator(&mut self, columns: usize) {
        self.write_row(std::iter::repeat(SEPARATOR_FIELD).take(columns));
    }

    fn begin_line(&mut self) {
        if self.lines > 0 {
            self.buffer.push('\n');
        }
        self.lines += 1;
    }
}
