use chrono::NaiveDate;

use crate::app::error::TaskError;
use crate::app::task_edit::{DateParts, TaskFields};

pub const COMPLETED_MESSAGE: &str = "Task completed!";

// Task kind, fixed when the task is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Work { due_date: NaiveDate },
    Personal,
}

// Plain tag used for filtering the list by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Work,
    Personal,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Work => "WorkTask",
            Variant::Personal => "PersonalTask",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub priority: i32,
    pub completed: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn work(description: impl Into<String>, priority: i32, due_date: NaiveDate) -> Task {
        Task {
            description: description.into(),
            priority,
            completed: false,
            kind: TaskKind::Work { due_date },
        }
    }

    pub fn personal(description: impl Into<String>, priority: i32) -> Task {
        Task {
            description: description.into(),
            priority,
            completed: false,
            kind: TaskKind::Personal,
        }
    }

    pub fn variant(&self) -> Variant {
        match self.kind {
            TaskKind::Work { .. } => Variant::Work,
            TaskKind::Personal => Variant::Personal,
        }
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.kind {
            TaskKind::Work { due_date } => Some(due_date),
            TaskKind::Personal => None,
        }
    }

    // Mark the task as done and return the messages to celebrate it with.
    // Completing twice is allowed and celebrates twice.
    pub fn complete(&mut self) -> [&'static str; 2] {
        self.completed = true;
        let cheer = match self.kind {
            TaskKind::Work { .. } => "You completed a work task. Nice job! \u{1F4BC}",
            TaskKind::Personal => "Personal task done. Time to relax~ \u{1F334}",
        };
        [COMPLETED_MESSAGE, cheer]
    }

    // Overwrite description and priority. A work task given date parts only
    // takes the new due date if it parses; otherwise the old one stays and a
    // warning is returned.
    pub fn edit(&mut self, fields: TaskFields, due: Option<&DateParts>) -> Option<TaskError> {
        self.description = fields.description;
        self.priority = fields.priority;

        match (&mut self.kind, due) {
            (TaskKind::Work { due_date }, Some(parts)) => match parts.parse() {
                Ok(new_due_date) => {
                    *due_date = new_due_date;
                    None
                }
                Err(_) => Some(TaskError::DueDateKept),
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields(description: &str, priority: i32) -> TaskFields {
        TaskFields {
            description: description.to_string(),
            priority,
        }
    }

    #[test]
    fn complete_marks_done_with_variant_message() {
        let mut work = Task::work("Ship report", 2, date(2025, 3, 10));
        let messages = work.complete();
        assert!(work.completed);
        assert_eq!(messages[0], COMPLETED_MESSAGE);
        assert!(messages[1].starts_with("You completed a work task"));

        let mut personal = Task::personal("Yoga", 1);
        assert!(personal.complete()[1].starts_with("Personal task done"));
        // No guard against a second completion
        assert!(personal.complete()[1].starts_with("Personal task done"));
        assert!(personal.completed);
    }

    #[test]
    fn edit_replaces_due_date_when_valid() {
        let mut task = Task::work("Ship report", 2, date(2025, 3, 10));
        let warning = task.edit(fields("Ship final report", 5), Some(&DateParts::new("1", "4", "2025")));

        assert_eq!(warning, None);
        assert_eq!(task.description, "Ship final report");
        assert_eq!(task.priority, 5);
        assert_eq!(task.due_date(), Some(date(2025, 4, 1)));
    }

    #[test]
    fn edit_keeps_due_date_on_impossible_date() {
        let mut task = Task::work("Ship report", 2, date(2025, 3, 10));
        let warning = task.edit(fields("Ship report", 3), Some(&DateParts::new("31", "2", "2025")));

        assert_eq!(warning, Some(TaskError::DueDateKept));
        assert_eq!(task.priority, 3);
        assert_eq!(task.due_date(), Some(date(2025, 3, 10)));
    }

    #[test]
    fn edit_keeps_due_date_on_non_numeric_part() {
        let mut task = Task::work("Ship report", 2, date(2025, 3, 10));
        let warning = task.edit(fields("Ship report", 2), Some(&DateParts::new("ten", "3", "2025")));

        assert_eq!(warning, Some(TaskError::DueDateKept));
        assert_eq!(task.due_date(), Some(date(2025, 3, 10)));
    }

    #[test]
    fn personal_edit_ignores_date_parts() {
        let mut task = Task::personal("Yoga", 1);
        let warning = task.edit(fields("Pilates", 4), Some(&DateParts::new("x", "y", "z")));

        assert_eq!(warning, None);
        assert_eq!(task.description, "Pilates");
        assert_eq!(task.variant(), Variant::Personal);
        assert_eq!(task.due_date(), None);
    }
}
