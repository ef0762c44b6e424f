//! Error types for projections, input loading and configuration

use thiserror::Error;

/// Errors raised by the growth projector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// An input was zero, negative, not finite, or too small to project
    #[error("Invalid input: {field} {reason} (got {value})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ProjectionError {
    /// Input that is not a positive finite number
    pub fn invalid(field: &'static str, value: f64) -> Self {
        ProjectionError::InvalidInput {
            field,
            value,
            reason: "must be a positive finite number",
        }
    }

    /// Rate so small the doubling month runs past the projection horizon
    pub fn beyond_horizon(value: f64) -> Self {
        ProjectionError::InvalidInput {
            field: "monthly_rate_percent",
            value,
            reason: "is too small to double within the projection horizon",
        }
    }

    /// Input large enough that the projected values overflow f64
    pub fn too_large(field: &'static str, value: f64) -> Self {
        ProjectionError::InvalidInput {
            field,
            value,
            reason: "is too large to project",
        }
    }
}

/// Errors raised while loading projection inputs from CSV
#[derive(Error, Debug)]
pub enum LoadError {
    /// Missing file, unreadable or malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but holds values the projector rejects
    #[error("Row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: ProjectionError,
    },
}

/// Errors raised while loading the application config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid slider range for {name}: {reason}")]
    InvalidRange { name: &'static str, reason: String },

    #[error("max_months must be at least 1 (got {0})")]
    InvalidMaxMonths(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ProjectionError::invalid("monthly_rate_percent", 0.0);
        assert_eq!(
            err.to_string(),
            "Invalid input: monthly_rate_percent must be a positive finite number (got 0)"
        );
    }

    #[test]
    fn test_beyond_horizon_display() {
        let err = ProjectionError::beyond_horizon(0.001);
        assert_eq!(
            err.to_string(),
            "Invalid input: monthly_rate_percent is too small to double within the projection horizon (got 0.001)"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = ProjectionError::too_large("initial_investment", 1e308);
        assert!(err
            .to_string()
            .starts_with("Invalid input: initial_investment is too large to project (got 1000"));
    }

    #[test]
    fn test_load_error_wraps_row() {
        let err = LoadError::InvalidRow {
            row: 3,
            source: ProjectionError::invalid("initial_investment", -5.0),
        };
        assert!(err.to_string().starts_with("Row 3: Invalid input: initial_investment"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
