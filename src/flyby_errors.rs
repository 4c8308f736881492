use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlybyError {
    #[error("Invalid orbital elements: {0}")]
    InvalidElements(String),

    #[error("Invalid sampling parameters: {0}")]
    InvalidParameters(String),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),

    #[error("hyperbolic Kepler equation did not converge at t = {t_days} days from perihelion")]
    NonConvergence {
        t_days: f64,
        #[source]
        source: roots::SearchError,
    },

    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl PartialEq for FlybyError {
    fn eq(&self, other: &Self) -> bool {
        use FlybyError::*;
        match (self, other) {
            (InvalidElements(a), InvalidElements(b)) => a == b,
            (InvalidParameters(a), InvalidParameters(b)) => a == b,
            (RootFindingError(a), RootFindingError(b)) => a == b,
            (NonConvergence { t_days: a, .. }, NonConvergence { t_days: b, .. }) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,

            // Not comparable beyond the variant itself
            (IoError(_), IoError(_)) => true,
            (ImageError(_), ImageError(_)) => true,

            _ => false,
        }
    }
}
