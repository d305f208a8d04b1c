use crate::Font;

/// Toolkit-wide defaults.
///
/// Create one at startup and hand it to widget constructors by reference.
/// Nothing in the crate reads settings from global state.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The font used by widgets that are not given one explicitly.
    pub default_font: Font,

    /// Whether new boxes refuse float components in name-keyed
    /// assignments instead of truncating them.
    pub strict_assignment: bool,

    /// Mean channel value above which text drawn on a background switches
    /// from white to black.
    pub contrast_threshold: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_font: Font::default(),
            strict_assignment: false,
            contrast_threshold: 200,
        }
    }
}
