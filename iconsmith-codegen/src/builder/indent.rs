//! Indentation configuration for code generation.

const SPACES: &str = "        ";

/// Width of one indentation level, in spaces (at most 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// 2-space indentation (Vue, JavaScript, JSX).
    pub const JAVASCRIPT: Self = Self(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..usize::from(self.0).min(SPACES.len())]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVASCRIPT
    }
}
