use chrono::NaiveDate;
use derivative::Derivative;

use crate::app::error::TaskError;
use crate::app::models::Task;

// Raw answers collected by the menu while adding a task.
// Nothing here is validated until a task is built from it.
#[derive(Derivative, Debug)]
#[derivative(Default)]
pub struct TaskForm {
    pub description: String,
    pub priority: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

// Validated description and priority, ready to be written into a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub description: String,
    pub priority: i32,
}

impl TaskFields {
    pub fn parse(description: &str, priority: &str) -> Result<TaskFields, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        let priority = priority
            .trim()
            .parse::<i32>()
            .map_err(|_| TaskError::InvalidPriority)?;

        Ok(TaskFields {
            description: description.to_string(),
            priority,
        })
    }
}

// Day, month and year as typed, one prompt each
#[derive(Derivative, Debug, Clone, PartialEq, Eq)]
#[derivative(Default)]
pub struct DateParts {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateParts {
    pub fn new(day: &str, month: &str, year: &str) -> DateParts {
        DateParts {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }

    // All three parts must be integers and name a real calendar day
    pub fn parse(&self) -> Result<NaiveDate, TaskError> {
        let number = |part: &str| part.trim().parse::<i32>().map_err(|_| TaskError::InvalidDate);
        let day = number(&self.day)?;
        let month = number(&self.month)?;
        let year = number(&self.year)?;

        if !(1..=9999).contains(&year) {
            return Err(TaskError::InvalidDate);
        }
        let month = u32::try_from(month).map_err(|_| TaskError::InvalidDate)?;
        let day = u32::try_from(day).map_err(|_| TaskError::InvalidDate)?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or(TaskError::InvalidDate)
    }
}

impl TaskForm {
    pub fn fields(&self) -> Result<TaskFields, TaskError> {
        TaskFields::parse(&self.description, &self.priority)
    }

    pub fn due_parts(&self) -> DateParts {
        DateParts::new(&self.day, &self.month, &self.year)
    }

    pub fn personal_task(&self) -> Result<Task, TaskError> {
        let fields = self.fields()?;
        Ok(Task::personal(fields.description, fields.priority))
    }

    // An unusable date rejects the whole task, unlike editing which keeps
    // the old date
    pub fn work_task(&self) -> Result<Task, TaskError> {
        let fields = self.fields()?;
        let due_date = self.due_parts().parse()?;
        Ok(Task::work(fields.description, fields.priority, due_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(description: &str, priority: &str, day: &str, month: &str, year: &str) -> TaskForm {
        TaskForm {
            description: description.into(),
            priority: priority.into(),
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    #[test]
    fn default_form_is_empty() {
        let empty = TaskForm::default();
        assert_eq!(empty.fields(), Err(TaskError::EmptyDescription));
        assert_eq!(empty.due_parts(), DateParts::default());
    }

    #[test]
    fn fields_are_trimmed_and_checked() {
        assert_eq!(
            TaskFields::parse("  Yoga ", " 3 "),
            Ok(TaskFields {
                description: "Yoga".to_string(),
                priority: 3
            })
        );
        assert_eq!(TaskFields::parse("   ", "3"), Err(TaskError::EmptyDescription));
        assert_eq!(TaskFields::parse("Yoga", "high"), Err(TaskError::InvalidPriority));
        assert_eq!(TaskFields::parse("Yoga", "-2").map(|f| f.priority), Ok(-2));
    }

    #[test]
    fn date_parts_reject_impossible_dates() {
        assert_eq!(
            DateParts::new("29", "2", "2024").parse(),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert_eq!(DateParts::new("29", "2", "2025").parse(), Err(TaskError::InvalidDate));
        assert_eq!(DateParts::new("31", "4", "2025").parse(), Err(TaskError::InvalidDate));
        assert_eq!(DateParts::new("1", "13", "2025").parse(), Err(TaskError::InvalidDate));
        assert_eq!(DateParts::new("-1", "3", "2025").parse(), Err(TaskError::InvalidDate));
        assert_eq!(DateParts::new("1", "3", "0").parse(), Err(TaskError::InvalidDate));
        assert_eq!(DateParts::new("", "3", "2025").parse(), Err(TaskError::InvalidDate));
    }

    #[test]
    fn work_task_needs_a_valid_date() {
        let task = form("Ship report", "2", "10", "3", "2025").work_task().unwrap();
        assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2025, 3, 10));

        assert_eq!(
            form("Ship report", "2", "31", "2", "2025").work_task(),
            Err(TaskError::InvalidDate)
        );
        // Description is checked before anything else
        assert_eq!(
            form("", "x", "31", "2", "2025").work_task(),
            Err(TaskError::EmptyDescription)
        );
    }

    #[test]
    fn personal_task_ignores_date_fields() {
        let task = form("Yoga", "1", "", "", "").personal_task().unwrap();
        assert_eq!(task, Task::personal("Yoga", 1));
    }
}
