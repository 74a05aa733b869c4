#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The view asked the session for something the catalog does not have.
    InvalidAction,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidAction => "That action is not available. Please try again.",
        }
    }
}
