/// Lifecycle of one asynchronous operation.
///
/// `Pending` doubles as the busy flag: the affordance that started the
/// operation is disabled and new attempts are dropped until it leaves
/// `Pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AsyncPhase {
    #[default]
    Idle,
    Pending,
    Success,
    /// Carries the human-readable (localized) reason.
    Failed(String),
}

impl AsyncPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncPhase::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncPhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
