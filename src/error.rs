use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("need at least 2 stops to calculate a route, got {found}")]
    InsufficientPoints { found: usize },
    #[error("route planning was cancelled")]
    Cancelled,
}
