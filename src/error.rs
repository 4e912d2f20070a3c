use thiserror::Error;

/// Top-level error type for the planar geometry kernel.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors produced while parsing the textual `(x, y[, theta])` form.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("component {component} has invalid value {value:?}")]
    Component {
        component: &'static str,
        value: String,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
