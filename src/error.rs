// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A setter received a value that would produce degenerate geometry or
    /// timing. The engine state is left untouched when this is returned.
    InvalidParameters {
        field: Parameter,
        value: f64,
        reason: &'static str,
    },
    Io(String),
    Config(String),
}

/// Every externally configurable spinner field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    ArrowCount,
    GapRatio,
    ThicknessRatio,
    ArrowWidthRatio,
    ArrowLengthRatio,
    BarbIndentRatio,
    FrameRate,
    RevolutionsPerSecond,
    OutputWidth,
    OutputHeight,
}

impl Parameter {
    /// Returns the snake_case name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            Parameter::ArrowCount => "arrow_count",
            Parameter::GapRatio => "gap_ratio",
            Parameter::ThicknessRatio => "thickness_ratio",
            Parameter::ArrowWidthRatio => "arrow_width_ratio",
            Parameter::ArrowLengthRatio => "arrow_length_ratio",
            Parameter::BarbIndentRatio => "barb_indent_ratio",
            Parameter::FrameRate => "frame_rate",
            Parameter::RevolutionsPerSecond => "revolutions_per_second",
            Parameter::OutputWidth => "output_width",
            Parameter::OutputHeight => "output_height",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Error {
    pub(crate) fn invalid(field: Parameter, value: f64, reason: &'static str) -> Self {
        Error::InvalidParameters {
            field,
            value,
            reason,
        }
    }

    /// Returns the offending field for parameter errors.
    pub fn field(&self) -> Option<Parameter> {
        match self {
            Error::InvalidParameters { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters {
                field,
                value,
                reason,
            } => write!(f, "Invalid {} = {}: {}", field, value, reason),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_parameters_names_field_and_value() {
        let err = Error::invalid(Parameter::ArrowCount, 0.0, "at least one arrow is required");
        assert_eq!(
            format!("{}", err),
            "Invalid arrow_count = 0: at least one arrow is required"
        );
        assert_eq!(err.field(), Some(Parameter::ArrowCount));
    }

    #[test]
    fn field_is_none_for_io_errors() {
        assert_eq!(Error::Io("x".into()).field(), None);
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
