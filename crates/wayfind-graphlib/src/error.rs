#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("edge ({from}, {to}) has weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
