use core::fmt;
use core::str::FromStr;

/// How nesting is rendered, one unit per indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndentationStyle {
    /// `"|\t"` per level, so nested blocks are easy to follow.
    #[default]
    Pipe,
    /// A plain `"\t"` per level.
    Tab,
}

impl IndentationStyle {
    /// The text written once per indentation level.
    pub fn unit(self) -> &'static str {
        match self {
            IndentationStyle::Pipe => "|\t",
            IndentationStyle::Tab => "\t",
        }
    }
}

impl fmt::Display for IndentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentationStyle::Pipe => f.write_str("pipe"),
            IndentationStyle::Tab => f.write_str("tab"),
        }
    }
}

impl FromStr for IndentationStyle {
    type Err = ParseIndentationStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pipe" => Ok(IndentationStyle::Pipe),
            "tab" => Ok(IndentationStyle::Tab),
            _ => Err(ParseIndentationStyleError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Error returned when parsing an [`IndentationStyle`] from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndentationStyleError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseIndentationStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown indentation style `{}`, expected `pipe` or `tab`",
            self.input
        )
    }
}

impl core::error::Error for ParseIndentationStyleError {}

/// The four words a report is written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Names the left-hand value, `Expected` by default.
    pub expected: String,
    /// Names the right-hand value, `Received` by default.
    pub received: String,
    /// Prefix for entries only found on the left, `Missing` by default.
    pub missing: String,
    /// Prefix for entries only found on the right, `Extra` by default.
    pub extra: String,
}

impl Labels {
    /// Creates a custom set of labels.
    pub fn new(
        expected: impl Into<String>,
        received: impl Into<String>,
        missing: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            expected: expected.into(),
            received: received.into(),
            missing: missing.into(),
            extra: extra.into(),
        }
    }

    /// Labels for comparing two states of the same thing rather than checking a test
    /// expectation: `Previous`, `Current`, `Removed`, `Added`.
    pub fn state_comparison() -> Self {
        Self::new("Previous", "Current", "Removed", "Added")
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::new("Expected", "Received", "Missing", "Extra")
    }
}

/// Options for computing and rendering a diff.
///
/// # Example
///
/// ```
/// use shapediff_diff::{DiffOptions, IndentationStyle, Labels};
///
/// let options = DiffOptions::new()
///     .indentation(IndentationStyle::Tab)
///     .skip_value_on_count_mismatch(true)
///     .labels(Labels::state_comparison());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub(crate) indentation: IndentationStyle,
    pub(crate) skip_value_on_count_mismatch: bool,
    pub(crate) labels: Labels,
}

/// Environment variable selecting the [`IndentationStyle`], `pipe` or `tab`.
pub const INDENT_ENV: &str = "SHAPEDIFF_INDENT";

/// Environment variable enabling `skip_value_on_count_mismatch`, `1`/`true` or `0`/`false`.
pub const SKIP_COUNT_VALUES_ENV: &str = "SHAPEDIFF_SKIP_COUNT_VALUES";

impl DiffOptions {
    /// Create a new `DiffOptions` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads overrides from [`INDENT_ENV`] and [`SKIP_COUNT_VALUES_ENV`].
    ///
    /// Unset variables keep their default; set but invalid ones are an error.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        if let Some(value) = lookup(INDENT_ENV) {
            options.indentation = value.parse().map_err(OptionsError::InvalidIndentation)?;
        }
        if let Some(value) = lookup(SKIP_COUNT_VALUES_ENV) {
            options.skip_value_on_count_mismatch = match value.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(OptionsError::InvalidFlag {
                        variable: SKIP_COUNT_VALUES_ENV,
                        value,
                    });
                }
            };
        }
        Ok(options)
    }

    /// Set the indentation style.
    pub fn indentation(mut self, style: IndentationStyle) -> Self {
        self.indentation = style;
        self
    }

    /// When set, count mismatches only show the two counts, not the values.
    pub fn skip_value_on_count_mismatch(mut self, skip: bool) -> Self {
        self.skip_value_on_count_mismatch = skip;
        self
    }

    /// Set the labels.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Error returned by [`DiffOptions::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
    /// [`INDENT_ENV`] holds an unknown style.
    InvalidIndentation(ParseIndentationStyleError),
    /// A boolean variable holds something other than `1`, `true`, `0` or `false`.
    InvalidFlag {
        /// The variable name.
        variable: &'static str,
        /// Its value.
        value: String,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidIndentation(err) => write!(f, "{INDENT_ENV}: {err}"),
            OptionsError::InvalidFlag { variable, value } => {
                write!(f, "{variable}: expected `1`, `true`, `0` or `false`, got `{value}`")
            }
        }
    }
}

impl core::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            OptionsError::InvalidIndentation(err) => Some(err),
            OptionsError::InvalidFlag { .. } => None,
        }
    }
}
