use thiserror::Error;

// Every rejection the user can run into. None of them are fatal: the menu
// prints the message and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Description cannot be empty.")]
    EmptyDescription,

    #[error("Invalid priority.")]
    InvalidPriority,

    #[error("Invalid date.")]
    InvalidDate,

    #[error("Invalid due date input. Keeping the old due date.")]
    DueDateKept,

    #[error("Invalid task number.")]
    InvalidTaskNumber,

    #[error("Invalid input. Task not updated.")]
    NotUpdated,

    #[error("No tasks found.")]
    NoTasksFound,

    #[error("Invalid option.")]
    InvalidOption,
}
