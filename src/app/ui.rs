use chrono::Local;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};
use tracing::{debug, warn};

use crate::app::config::Settings;
use crate::app::error::TaskError;
use crate::app::models::Variant;
use crate::app::task_edit::{DateParts, TaskFields, TaskForm};
use crate::app::task_list::{get_statistics_lines, Filter, TaskList};

pub struct App {
    pub items: TaskList,
    pub settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> App {
        App {
            items: TaskList::new(),
            settings,
        }
    }
}

// Line based terminal: one answer per prompt
struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn warn(&mut self, error: TaskError) -> io::Result<()> {
        warn!(%error, "rejected input");
        let text = format!("\u{2757} {error}");
        if self.color {
            self.say(text.red())
        } else {
            self.say(text)
        }
    }

    // Read one line without its line ending.
    // End of input surfaces as UnexpectedEof so the loop can stop cleanly.
    fn read(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        self.say(prompt)?;
        self.read()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }
}

// Run the menu until the user exits or the input ends
pub fn run_app<R: BufRead, W: Write>(input: R, output: W, app: &mut App) -> io::Result<()> {
    let mut console = Console {
        input,
        output,
        color: app.settings.color,
    };

    match menu_loop(&mut console, app) {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("input closed, leaving");
            Ok(())
        }
        result => result,
    }
}

fn menu_loop<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &mut App) -> io::Result<()> {
    loop {
        draw_menu(console)?;

        let choice = console.read()?;
        match choice.trim() {
            "1" => add_work_task(console, app)?,
            "2" => add_personal_task(console, app)?,
            "3" => {
                complete_task(console, app)?;
                pause(console, app)?;
            }
            "4" => {
                edit_task(console, app)?;
                pause(console, app)?;
            }
            "5" => {
                display_tasks(console, app)?;
                pause(console, app)?;
            }
            "6" => {
                remove_task(console, app)?;
                pause(console, app)?;
            }
            "7" => return Ok(()),
            _ => console.warn(TaskError::InvalidOption)?,
        }
    }
}

fn draw_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    for line in [
        "To-Do List Menu:",
        "1. Add Work Task",
        "2. Add Personal Task",
        "3. Complete Task",
        "4. Edit Task",
        "5. Display Tasks",
        "6. Remove Task",
        "7. Exit",
    ] {
        console.say(line)?;
    }
    Ok(())
}

// Wait for Enter, then start over on a fresh screen
fn pause<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &App) -> io::Result<()> {
    console.ask("Press Enter to continue...")?;
    if app.settings.clear_screen {
        console.clear()?;
    }
    Ok(())
}

// Ask which kind of task to work on. `None` means the answer was not usable.
fn choose_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    action: &str,
    allow_all: bool,
) -> io::Result<Option<Filter>> {
    console.say(format!("Select task type to {action}:"))?;
    console.say("1. Work Task")?;
    console.say("2. Personal Task")?;
    if allow_all {
        console.say("3. All Tasks")?;
    }

    let filter = match console.read()?.trim() {
        "1" => Some(Some(Variant::Work)),
        "2" => Some(Some(Variant::Personal)),
        "3" if allow_all => Some(None),
        _ => None,
    };
    if filter.is_none() {
        console.warn(TaskError::InvalidOption)?;
    }
    Ok(filter)
}

// Print the numbered candidates. Returns false when there is nothing to pick.
fn show_candidates<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    items: &TaskList,
    filter: Filter,
) -> io::Result<bool> {
    match items.selection_lines(filter) {
        Ok(lines) => {
            for line in lines {
                console.say(line)?;
            }
            Ok(true)
        }
        Err(error) => {
            console.say(error)?;
            Ok(false)
        }
    }
}

fn add_work_task<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &mut App) -> io::Result<()> {
    let mut form = TaskForm::default();

    form.description = console.ask("Enter work task description:")?;
    if form.description.trim().is_empty() {
        return console.warn(TaskError::EmptyDescription);
    }
    form.priority = console.ask("Enter priority:")?;
    if let Err(error) = form.fields() {
        return console.warn(error);
    }
    form.day = console.ask("Enter due day (1-31):")?;
    form.month = console.ask("Enter due month (1-12):")?;
    form.year = console.ask("Enter due year (e.g. 2025):")?;

    match form.work_task() {
        Ok(task) => {
            app.items.add(task);
            if app.settings.clear_screen {
                console.clear()?;
            }
            Ok(())
        }
        Err(error) => console.warn(error),
    }
}

fn add_personal_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &mut App,
) -> io::Result<()> {
    let mut form = TaskForm::default();

    form.description = console.ask("Enter personal task description:")?;
    if form.description.trim().is_empty() {
        return console.warn(TaskError::EmptyDescription);
    }
    form.priority = console.ask("Enter priority:")?;

    match form.personal_task() {
        Ok(task) => {
            app.items.add(task);
            if app.settings.clear_screen {
                console.clear()?;
            }
            Ok(())
        }
        Err(error) => console.warn(error),
    }
}

fn complete_task<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &mut App) -> io::Result<()> {
    let Some(filter) = choose_filter(console, "complete", false)? else {
        return Ok(());
    };
    if !show_candidates(console, &app.items, filter)? {
        return Ok(());
    }

    let number = console.ask("Enter task number to complete:")?;
    match app.items.complete(filter, &number) {
        Ok(completed) => {
            for message in completed.messages {
                console.say(message)?;
            }
            Ok(())
        }
        Err(error) => console.warn(error),
    }
}

fn edit_task<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &mut App) -> io::Result<()> {
    let Some(filter) = choose_filter(console, "edit", false)? else {
        return Ok(());
    };
    if !show_candidates(console, &app.items, filter)? {
        return Ok(());
    }

    let number = console.ask("Enter task number to edit:")?;
    let index = match app.items.resolve(filter, &number) {
        Ok(index) => index,
        Err(error) => return console.warn(error),
    };

    let description = console.ask("Enter new description:")?;
    let priority = console.ask("Enter new priority:")?;
    let fields = match TaskFields::parse(&description, &priority) {
        Ok(fields) => fields,
        Err(_) => return console.warn(TaskError::NotUpdated),
    };

    let due = if app.items.tasks()[index].variant() == Variant::Work {
        Some(DateParts {
            day: console.ask("Enter new due day (1-31):")?,
            month: console.ask("Enter new due month (1-12):")?,
            year: console.ask("Enter new due year (e.g. 2025):")?,
        })
    } else {
        None
    };

    match app.items.edit(filter, &number, fields, due.as_ref()) {
        Ok(warning) => {
            if let Some(warning) = warning {
                console.warn(warning)?;
            }
            console.say("Task updated successfully!")
        }
        Err(error) => console.warn(error),
    }
}

fn remove_task<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &mut App) -> io::Result<()> {
    let Some(filter) = choose_filter(console, "remove", false)? else {
        return Ok(());
    };
    if !show_candidates(console, &app.items, filter)? {
        return Ok(());
    }

    let number = console.ask("Enter task number to remove:")?;
    match app.items.remove(filter, &number) {
        Ok(_) => console.say("Task removed."),
        Err(error) => console.warn(error),
    }
}

fn display_tasks<R: BufRead, W: Write>(console: &mut Console<R, W>, app: &App) -> io::Result<()> {
    let Some(filter) = choose_filter(console, "display", true)? else {
        return Ok(());
    };

    match app.items.display(filter, app.settings.color) {
        Ok(lines) => {
            for line in lines {
                console.say(line)?;
            }
        }
        Err(error) => return console.say(error),
    }

    // Whole list: add the summary
    if filter.is_none() {
        let statistics = app.items.statistics(Local::now().date_naive());
        console.say("")?;
        for line in get_statistics_lines(&statistics) {
            console.say(line)?;
        }
    }
    Ok(())
}
