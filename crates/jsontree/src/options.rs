//! Parser configuration.

/// Default maximum nesting depth of arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while parsing.
///
/// The defaults accept any input size and reject documents nested deeper than
/// [`DEFAULT_MAX_DEPTH`], which keeps the recursive-descent parser well clear
/// of stack exhaustion on adversarial input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of simultaneously open arrays/objects.
    pub max_depth: usize,
    /// Maximum input length in bytes, or `None` for no limit.
    pub max_input_len: Option<usize>,
}

impl ParseOptions {
    pub const fn new() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: None,
        }
    }

    /// No depth or size limit. Only for trusted input: nesting depth is then
    /// bounded by the thread's stack.
    pub const fn unlimited() -> Self {
        ParseOptions {
            max_depth: usize::MAX,
            max_input_len: None,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub const fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = Some(max_input_len);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions::new()
    }
}
