use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wrk::api::{CmdMessage, Listing, MessageLevel};
use wrk::error::WrkError;
use wrk::model::KindSet;

const LINE_WIDTH: usize = 100;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_warning(warning: &str) {
    eprintln!("{}", warning.yellow());
}

/// One row per alias: token, label, then the prefixed id it stands for.
pub(super) fn print_listing(listed: &[Listing]) {
    let token_width = listed.iter().map(|l| l.token.width()).max().unwrap_or(0);

    for entry in listed {
        let id = entry.target.to_string();
        let fixed = 2 + token_width + 2 + 2 + id.width();
        let label = truncate_to_width(&entry.label, LINE_WIDTH.saturating_sub(fixed));
        let token = format!("{:<width$}", entry.token, width = token_width);
        println!("  {}  {}  {}", token.bold(), label, id.dimmed());
    }
}

/// Renders a command failure the way the user should see it.
pub(super) fn print_error(error: &WrkError) {
    match error {
        WrkError::InvalidArgs {
            command,
            args,
            usage,
        } => {
            println!(
                "{} {}{} {}",
                "Invalid arguments to command".red(),
                command.italic().red(),
                ":".red(),
                args.red()
            );
            println!();
            println!("Usage:");
            for line in usage.lines() {
                println!("  {}", line);
            }
        }
        WrkError::TypeMismatch {
            token,
            found,
            expected,
        } => print_mismatch(token, found.plural().red(), *expected),
        WrkError::UnreadableWrkId {
            token,
            value,
            expected,
        } => print_mismatch(token, format!("<unknown> ({})", value).red(), *expected),
        WrkError::EmptyText { .. } | WrkError::TextTooLong { .. } => {
            println!("{}", error.to_string().red());
        }
        other => eprintln!("{} {}", "Error:".red(), other),
    }
}

fn print_mismatch(token: &str, found: ColoredString, expected: KindSet) {
    let expected: Vec<String> = expected
        .kinds()
        .iter()
        .map(|k| k.plural().bold().to_string())
        .collect();
    println!(
        "The wrk-id [ {} ] is for {} but the command is for [ {} ].",
        token.bold(),
        found,
        expected.join(", ")
    );
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_to_width("Roadmap", 20), "Roadmap");
    }

    #[test]
    fn long_labels_end_in_ellipsis() {
        let cut = truncate_to_width("abcdefghij", 5);
        assert_eq!(cut, "abcd…");
        assert_eq!(cut.width(), 5);
    }

    #[test]
    fn wide_chars_count_double() {
        let cut = truncate_to_width("日本語のボード", 6);
        assert_eq!(cut, "日本…");
    }
}
