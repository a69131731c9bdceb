use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    form::{EditReminderForm, Field, FormView, Message, Visibility},
    session::Session,
};

use super::TerminalBoard;

const MENU_PROMPT: &str = "What do you want to update? (title, notes, date, time, flag)
Use /save to save the reminder or /cancel to stop editing.";
const INVALID_INPUT: &str =
    "Unable to handle the input. Please try again or use /cancel to stop current operation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Edit(Field),
    ToggleFlag,
    Save,
    Cancel,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.to_lowercase().as_str() {
        "title" => Some(Command::Edit(Field::Title)),
        "notes" => Some(Command::Edit(Field::Notes)),
        "date" => Some(Command::Edit(Field::Date)),
        "time" => Some(Command::Edit(Field::Time)),
        "flag" => Some(Command::ToggleFlag),
        "/save" => Some(Command::Save),
        "/cancel" => Some(Command::Cancel),
        _ => None,
    }
}

fn field_prompt(field: Field) -> &'static str {
    match field {
        Field::Title => "Please enter reminder title.",
        Field::Notes => "Please enter reminder notes.",
        Field::Date => "Please enter the date. Example: 2025-05-31",
        Field::Time => "Please enter the time. Example: 13:00",
    }
}

fn edit_message(field: Field, value: String) -> Message {
    match field {
        Field::Title => Message::TitleInput(value),
        Field::Notes => Message::NotesInput(value),
        Field::Date => Message::DateInput(value),
        Field::Time => Message::TimeInput(value),
    }
}

pub fn render(view: &FormView<'_>) -> String {
    let draft = view.draft;
    let mut out = String::new();

    let _ = writeln!(out, "== {} ==", view.heading);
    let _ = writeln!(out, "Title: {}", draft.title());
    let _ = writeln!(out, "Notes: {}", draft.notes());
    let _ = writeln!(out, "Date:  {}", draft.date());
    let _ = writeln!(out, "Time:  {}", draft.time());
    let _ = writeln!(out, "Flag:  [{}]", if draft.flag() { "x" } else { " " });
    if view.save.dimmed {
        let _ = writeln!(out, "(saving...)");
    }

    out
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> anyhow::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Drive the edit form from line-based input until the dialog closes or input ends.
pub async fn run_dialogue<R, W>(
    form: &mut EditReminderForm,
    board: &TerminalBoard,
    session: &Session,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        form.sync(
            board.reminder_details().await,
            board.is_edit_reminder_open().await,
        );

        let view = form.view();
        if view.visibility == Visibility::Collapsed {
            write_line(&mut output, "Edit dialog closed.").await?;
            return Ok(());
        }
        output.write_all(render(&view).as_bytes()).await?;
        write_line(&mut output, MENU_PROMPT).await?;

        let Some(line) = lines.next_line().await? else {
            log::info!("Input closed, leaving the edit dialog");
            return Ok(());
        };

        match parse_command(line.trim()) {
            Some(Command::Edit(field)) => {
                write_line(&mut output, field_prompt(field)).await?;
                let Some(value) = lines.next_line().await? else {
                    return Ok(());
                };
                form.update(edit_message(field, value));
            }
            Some(Command::ToggleFlag) => {
                let flag = form.draft().flag();
                form.update(Message::FlagToggled(!flag));
            }
            Some(Command::Save) => {
                let outcome = form.submit(session).await;
                log::debug!("Save finished with {outcome:?}");
            }
            Some(Command::Cancel) => form.cancel().await,
            None => write_line(&mut output, INVALID_INPUT).await?,
        }
    }
}
