use crate::log;
use derive_more::Display;

pub type Result<T> = std::result::Result<T, VectorError>;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum VectorError
{
    /// Coordinate read or write past the last dimension
    #[display("Index {index} out of range for a {dimension}-dimensional vector")]
    IndexOutOfRange
    {
        index:     usize,
        dimension: usize,
    },
    /// Normalizing a vector whose magnitude is zero
    #[display("Cannot normalize a vector of zero magnitude")]
    DegenerateVector,
}

impl log::ProjectError for VectorError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            VectorError::IndexOutOfRange { .. } => "Index",
            VectorError::DegenerateVector => "Degenerate Vector",
        })
    }
}

impl std::error::Error for VectorError {}
