/// Decoder settings.
///
/// The default decodes exactly like [`crate::deserialize`]: unlimited nesting,
/// and bytes after the first complete value are ignored.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodeConfig {
    /// Maximum count of nested lists and maps. `Some(0)` rejects any container.
    pub max_depth: Option<usize>,
    /// Fail with [`crate::XsonError::ExtraInput`] when input remains after the value.
    pub reject_trailing: bool,
}

impl DecodeConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_reject_trailing(mut self, reject_trailing: bool) -> Self {
        self.reject_trailing = reject_trailing;
        self
    }
}
