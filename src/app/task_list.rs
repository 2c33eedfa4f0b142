use chrono::{Duration, NaiveDate};
use crossterm::style::Stylize;
use tracing::{debug, warn};

use crate::app::error::TaskError;
use crate::app::models::{Task, Variant};
use crate::app::task_edit::{DateParts, TaskFields};

// `None` selects the whole list
pub type Filter = Option<Variant>;

pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Default)]
pub struct TaskList {
    items: Vec<Task>,
}

// A task that was completed and taken off the list
#[derive(Debug)]
pub struct Completed {
    pub task: Task,
    pub messages: [&'static str; 2],
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub work: usize,
    pub personal: usize,
    pub due_next_week: usize,
    pub overdue: usize,
}

impl TaskList {
    pub fn new() -> TaskList {
        TaskList::default()
    }

    pub fn add(&mut self, task: Task) {
        debug!(
            description = %task.description,
            priority = task.priority,
            kind = task.variant().name(),
            "adding task"
        );
        self.items.push(task);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.items
    }

    // Indices of the tasks matching the filter, ordered by priority.
    // The sort is stable so equal priorities keep their insertion order.
    pub fn view(&self, filter: Filter) -> Vec<usize> {
        let mut indices = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, task)| filter.map_or(true, |variant| task.variant() == variant))
            .map(|(i, _)| i)
            .collect::<Vec<usize>>();
        indices.sort_by_key(|&i| self.items[i].priority);
        return indices;
    }

    // Turn a 1-based position within the filtered view into a list index
    pub fn resolve(&self, filter: Filter, selector: &str) -> Result<usize, TaskError> {
        let view = self.view(filter);
        let index = selector
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|position| view.get(position).copied());

        match index {
            Some(index) => Ok(index),
            None => {
                warn!(selector, candidates = view.len(), "task selection out of range");
                Err(TaskError::InvalidTaskNumber)
            }
        }
    }

    // Short listing shown before asking which task to act on
    pub fn selection_lines(&self, filter: Filter) -> Result<Vec<String>, TaskError> {
        let view = self.view(filter);
        if view.is_empty() {
            return Err(TaskError::NoTasksFound);
        }

        Ok(view
            .iter()
            .enumerate()
            .map(|(position, &i)| {
                let task = &self.items[i];
                format!("{}. {} - Priority: {}", position + 1, task.description, task.priority)
            })
            .collect())
    }

    // Complete the selected task and drop it from the list
    pub fn complete(&mut self, filter: Filter, selector: &str) -> Result<Completed, TaskError> {
        let index = self.resolve(filter, selector)?;
        let mut task = self.items.remove(index);
        let messages = task.complete();
        debug!(description = %task.description, "completed and removed task");
        Ok(Completed { task, messages })
    }

    // Apply already validated fields to the selected task.
    // The inner value is the warning raised when a new due date was rejected.
    pub fn edit(
        &mut self,
        filter: Filter,
        selector: &str,
        fields: TaskFields,
        due: Option<&DateParts>,
    ) -> Result<Option<TaskError>, TaskError> {
        let index = self.resolve(filter, selector)?;
        let task = &mut self.items[index];
        let warning = task.edit(fields, due);
        debug!(
            description = %task.description,
            priority = task.priority,
            due_date_kept = warning.is_some(),
            "edited task"
        );
        Ok(warning)
    }

    pub fn remove(&mut self, filter: Filter, selector: &str) -> Result<Task, TaskError> {
        let index = self.resolve(filter, selector)?;
        let task = self.items.remove(index);
        debug!(description = %task.description, "removed task");
        Ok(task)
    }

    // Full listing of the filtered view, sorted by priority
    pub fn display(&self, filter: Filter, color: bool) -> Result<Vec<String>, TaskError> {
        let tasks = self
            .view(filter)
            .into_iter()
            .map(|i| &self.items[i])
            .collect::<Vec<&Task>>();
        if tasks.is_empty() {
            return Err(TaskError::NoTasksFound);
        }
        Ok(get_list_lines(&tasks, color))
    }

    // Counts for the summary under the full listing
    pub fn statistics(&self, today: NaiveDate) -> Statistics {
        let next_week = today + Duration::weeks(1);
        let due_dates = self
            .items
            .iter()
            .filter_map(|task| task.due_date())
            .collect::<Vec<NaiveDate>>();

        Statistics {
            total: self.items.len(),
            work: due_dates.len(),
            personal: self.items.len() - due_dates.len(),
            due_next_week: due_dates
                .iter()
                .filter(|&&due| due >= today && due <= next_week)
                .count(),
            overdue: due_dates.iter().filter(|&&due| due < today).count(),
        }
    }
}

// Build the display lines for the given tasks, numbered from 1
pub fn get_list_lines(tasks: &[&Task], color: bool) -> Vec<String> {
    let mut lines = Vec::new();

    for (position, task) in tasks.iter().enumerate() {
        let description = if color {
            match task.priority {
                1 => task.description.as_str().yellow().to_string(),
                2 => task.description.as_str().red().to_string(),
                _ => task.description.clone(),
            }
        } else {
            task.description.clone()
        };

        lines.push(format!(
            "{}. {} - Priority: {} - Type: {}",
            position + 1,
            description,
            task.priority,
            task.variant().name()
        ));

        if let Some(due_date) = task.due_date() {
            lines.push(format!(
                "   \u{1F5D3}\u{FE0F} Due Date: {}",
                due_date.format(DUE_DATE_FORMAT)
            ));
        }
    }

    return lines;
}

// Build the summary lines shown under the full listing
pub fn get_statistics_lines(statistics: &Statistics) -> Vec<String> {
    vec![
        format!("Total tasks: {}", statistics.total),
        format!(
            "Work: {} / Personal: {}",
            statistics.work, statistics.personal
        ),
        format!("Due next week: {}", statistics.due_next_week),
        format!("Late: {}", statistics.overdue),
    ]
}
