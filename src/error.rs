use crate::models::LineId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("invalid quantity {0}: must be a positive integer")]
    InvalidQuantity(i64),
    #[error("no cart line with id {0}")]
    UnknownLineId(LineId),
    #[error("item not in catalog: {0}")]
    UnknownItem(String),
    #[error("no selector mounted for {0}")]
    NotMounted(String),
}
