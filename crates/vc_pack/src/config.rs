// -----------------------------------------------------------------------------
// Constants

/// Default limit of nested `write_value` calls.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Default capacity of a fresh [`ByteSink`](crate::ByteSink).
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

// -----------------------------------------------------------------------------
// TextUnit

/// Unit of the native length written after a string's UTF-8 length.
///
/// Readers discard this value; it only matters to peers that size their
/// decode buffers from it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextUnit {
    /// UTF-8 bytes, the same value as the first header.
    #[default]
    Utf8,
    /// UTF-16 code units.
    Utf16,
}

impl TextUnit {
    /// Length of `text` in this unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_pack::TextUnit;
    ///
    /// assert_eq!(TextUnit::Utf8.measure("é😀"), 6);
    /// assert_eq!(TextUnit::Utf16.measure("é😀"), 3);
    /// ```
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.len(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }
}

// -----------------------------------------------------------------------------
// PackConfig

/// Runtime settings of a [`MemoryPack`](crate::MemoryPack) engine.
///
/// # Examples
///
/// ```
/// use vc_pack::{PackConfig, TextUnit};
///
/// let config = PackConfig::new()
///     .with_max_depth(64)
///     .with_text_unit(TextUnit::Utf16);
///
/// assert_eq!(config.max_depth(), 64);
/// assert_eq!(config.initial_capacity(), 128);
/// assert!(!config.format_version_header());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    max_depth: usize,
    initial_capacity: usize,
    text_unit: TextUnit,
    format_version_header: bool,
}

impl Default for PackConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl PackConfig {
    /// Creates the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            text_unit: TextUnit::Utf8,
            format_version_header: false,
        }
    }

    /// Sets the limit of nested values on write.
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the starting capacity of output buffers.
    #[inline]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the unit of the native string length.
    #[inline]
    pub const fn with_text_unit(mut self, text_unit: TextUnit) -> Self {
        self.text_unit = text_unit;
        self
    }

    /// Prefixes output with the format version byte, and expects it on input.
    #[inline]
    pub const fn with_format_version_header(mut self, enabled: bool) -> Self {
        self.format_version_header = enabled;
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub const fn text_unit(&self) -> TextUnit {
        self.text_unit
    }

    #[inline]
    pub const fn format_version_header(&self) -> bool {
        self.format_version_header
    }
}
