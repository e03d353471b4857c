use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("no task is active")]
    NoActiveTask,

    #[error("the last task cannot be removed")]
    LastTask,
}

impl StoreError {
    pub(crate) fn bookmark(id: Uuid) -> Self {
        Self::NotFound { kind: "bookmark", id }
    }

    pub(crate) fn todo(id: Uuid) -> Self {
        Self::NotFound { kind: "todo", id }
    }

    pub(crate) fn task(id: Uuid) -> Self {
        Self::NotFound { kind: "task", id }
    }
}
