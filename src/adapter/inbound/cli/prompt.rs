//! Interactive prompts standing in for the roster's modal dialogs.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm as ConfirmPrompt, Input, Select};

use super::command::StudentFieldArgs;
use super::output;
use crate::domain::course::CourseList;
use crate::domain::student::StudentDetails;
use crate::error::Result;
use crate::port::inbound::view::Confirm;

/// True when both ends of the terminal are attached and output is not JSON.
#[must_use]
pub fn is_interactive() -> bool {
    !output::is_json() && std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Yes/no confirmation read from the terminal. Defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(ConfirmPrompt::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()?)
    }
}

/// Free-text field prefilled with `initial`. Blank answers are allowed.
pub fn text(label: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

/// Pick a course, starting on `current`.
pub fn course(courses: &CourseList, current: &str) -> Result<String> {
    let (items, start) = course_choices(courses, current);
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Course")
        .items(items.as_slice())
        .default(start)
        .interact()?;
    Ok(items[index].clone())
}

/// Items for the course picker and the index to start on.
///
/// A stored course that is no longer offered is listed first and
/// preselected, so accepting the default keeps it.
fn course_choices(courses: &CourseList, current: &str) -> (Vec<String>, usize) {
    let offered = courses.as_slice().to_vec();
    if let Some(index) = courses.position(current) {
        return (offered, index);
    }
    if current.is_empty() {
        return (offered, 0);
    }
    let mut items = Vec::with_capacity(offered.len() + 1);
    items.push(current.to_string());
    items.extend(offered);
    (items, 0)
}

/// Fill a form's fields from command-line flags, falling back to prompts.
///
/// Flags win. A field without a flag is prompted for when `interactive`,
/// starting from its value in `base`; otherwise `base` is kept. Courses
/// given as flags must be one of `courses`.
pub fn fill_details(
    args: &StudentFieldArgs,
    base: StudentDetails,
    courses: &CourseList,
    interactive: bool,
) -> Result<StudentDetails> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => text("Name", &base.name)?,
        None => base.name,
    };
    let course = match &args.course {
        Some(course) => courses.resolve(course)?,
        None if interactive && !courses.is_empty() => course(courses, &base.course)?,
        None => base.course,
    };
    let mobile = match &args.mobile {
        Some(mobile) => mobile.clone(),
        None if interactive => text("Mobile", &base.mobile)?,
        None => base.mobile,
    };
    Ok(StudentDetails {
        name,
        course,
        mobile,
    })
}
