use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("numerical degeneracy in {stage} at index {index}: near-zero vector cannot be normalized")]
    NumericalDegeneracy { stage: &'static str, index: usize },

    #[error("{stage} requires at least {required} positions, but {actual} were provided")]
    InsufficientData {
        stage: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("eigen-decomposition did not converge for frame pair {index}")]
    EigenDecompositionFailure { index: usize },

    #[error("screw motion input mismatch: {quaternions} quaternions vs {translations} translations")]
    MismatchedLengths {
        quaternions: usize,
        translations: usize,
    },
}
