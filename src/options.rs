use crate::constants::DEFAULT_INFO_STRING;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept the pipe-free "RxC" size form.
    pub compact_size: bool,
    /// Optional upper bound on `rows * columns` for the size form. Larger
    /// specs are parsed as ordinary table text. Unbounded by default.
    pub max_compact_cells: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compact_size(mut self, compact_size: bool) -> Self {
        self.compact_size = compact_size;
        self
    }

    pub fn with_max_compact_cells(mut self, max_compact_cells: usize) -> Self {
        self.max_compact_cells = Some(max_compact_cells);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            compact_size: true,
            max_compact_cells: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOptions {
    pub info_string: String,
}

impl FenceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_info_string(mut self, info_string: impl Into<String>) -> Self {
        self.info_string = info_string.into();
        self
    }
}

impl Default for FenceOptions {
    fn default() -> Self {
        Self {
            info_string: DEFAULT_INFO_STRING.to_string(),
        }
    }
}
