//! Command parsing and dispatch for the interactive shell.

use crate::config::MAX_WINDOW_DAYS;
use crate::error::{CommandError, CommandResult};
use crate::models::BirthdayLookup;
use crate::services::{Change, ContactService};
use std::str::FromStr;

/// A command word typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    RemovePhone,
    Delete,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Print(String),
    /// Save and stop
    Exit,
}

const HELP: &str = "\
Available commands:
  hello                                  greet the assistant
  add <name> [phone]                     add a contact or a phone to it
  change <name> <old phone> <new phone>  replace a phone number
  remove-phone <name> <phone>            remove a phone number
  delete <name>                          delete a contact
  phone <name>                           show a contact's phones
  all                                    show every contact
  add-birthday <name> <DD.MM.YYYY>       set a contact's birthday
  show-birthday <name>                   show a contact's birthday
  birthdays [days]                       birthdays in the coming days
  close | exit                           save and quit";

/// Split a line into its command word and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

/// Run one command against the contact service.
pub fn execute(
    command: Command,
    args: &[&str],
    service: &mut dyn ContactService,
) -> CommandResult<Reply> {
    let text = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => add_contact(args, service)?,
        Command::Change => change_contact(args, service)?,
        Command::RemovePhone => remove_phone(args, service)?,
        Command::Delete => delete_contact(args, service)?,
        Command::Phone => find_phones(args, service)?,
        Command::All => show_all(service),
        Command::AddBirthday => add_birthday(args, service)?,
        Command::ShowBirthday => show_birthday(args, service)?,
        Command::Birthdays => birthdays(args, service)?,
        Command::Help => HELP.to_string(),
        Command::Exit => return Ok(Reply::Exit),
    };
    Ok(Reply::Print(text))
}

fn add_contact(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let (name, phone) = match args {
        [name] => (*name, None),
        [name, phone] => (*name, Some(*phone)),
        _ => return Err(CommandError::Usage("<Name> (optional <Phone>).")),
    };

    Ok(match service.add_contact(name, phone)? {
        Change::Added => "Contact added.",
        Change::Updated => "Contact updated.",
    }
    .to_string())
}

fn change_contact(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(CommandError::Usage("<Name> <Old phone> <New phone>."));
    };

    service.change_phone(name, old, new)?;
    Ok("Phone changed successfully.".to_string())
}

fn remove_phone(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::Usage("<Name> <Phone>."));
    };

    Ok(if service.remove_phone(name, phone)? {
        "Phone removed."
    } else {
        "Contact has no such phone."
    }
    .to_string())
}

fn delete_contact(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("<Name>."));
    };

    service.delete_contact(name)?;
    Ok("Contact deleted successfully.".to_string())
}

fn find_phones(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("<Name>."));
    };

    let phones = service.phones(name)?;
    if phones.is_empty() {
        return Ok("No phones yet.".to_string());
    }
    Ok(phones
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

fn show_all(service: &dyn ContactService) -> String {
    let book = service.book();
    if book.is_empty() {
        return "No contacts yet.".to_string();
    }
    book.to_string()
}

fn add_birthday(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::Usage("<Name> <Birthday>."));
    };

    Ok(match service.add_birthday(name, birthday)? {
        Change::Added => "Birthday added.",
        Change::Updated => "Birthday updated.",
    }
    .to_string())
}

fn show_birthday(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("<Name>."));
    };

    Ok(match service.show_birthday(name)? {
        BirthdayLookup::Known(birthday) => birthday.to_string(),
        BirthdayLookup::NotSpecified => format!("{}'s birthday is not specified.", name),
    })
}

fn birthdays(args: &[&str], service: &mut dyn ContactService) -> CommandResult<String> {
    let window = match args {
        [] => None,
        [days] => match days.parse::<u32>() {
            Ok(days) if days <= MAX_WINDOW_DAYS => Some(days),
            _ => return Err(CommandError::Usage("(optional <Days> from 0 to 366).")),
        },
        _ => return Err(CommandError::Usage("(optional <Days> from 0 to 366).")),
    };

    let upcoming = service.upcoming_birthdays(window);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays yet.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
