use chrono::{DateTime, Utc};
use colored::Colorize;
use mailz::api::{CmdMessage, MessageLevel};
use mailz::inbox::Inbox;
use mailz::index::DisplayRecord;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const ID_WIDTH: usize = 15;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[DisplayRecord], inbox: &Inbox) {
    print!("{}", render_record_list(records, inbox, Utc::now()));
}

pub(super) fn print_entries(entries: &[(String, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}

pub(super) fn print_paths(paths: &[(String, PathBuf)]) {
    for (label, path) in paths {
        println!("{:<8}{}", label, path.display());
    }
}

/// One line per record: index, full address, id, age.
fn render_record_list(records: &[DisplayRecord], inbox: &Inbox, now: DateTime<Utc>) -> String {
    let mut output = String::new();

    for dr in records {
        let idx_str = format!("{:>3}. ", dr.index);
        let address = inbox.address(&dr.record.email);
        let time_ago = format_time_ago(dr.record.created_at_utc(), now);

        let fixed_width = idx_str.width() + ID_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let address_display = truncate_to_width(&address, available);
        let padding = available.saturating_sub(address_display.width());

        output.push_str(&format!(
            "{}{}{}{}{}\n",
            idx_str.yellow(),
            address_display,
            " ".repeat(padding),
            format!("{:>width$}", dr.record.id, width = ID_WIDTH).dimmed(),
            time_ago.dimmed()
        ));
    }

    output
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
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');

    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use mailz::model::EmailRecord;

    fn display(index: usize, email: &str, created_at: i64) -> DisplayRecord {
        DisplayRecord {
            index,
            record: EmailRecord::new(email, created_at),
        }
    }

    #[test]
    fn renders_full_address_and_age() {
        let created = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let now = created + Duration::minutes(3);
        let records = vec![display(1, "ninja4k2zq", 1_700_000_000_000)];

        let output = render_record_list(&records, &Inbox::default(), now);
        assert!(output.contains("ninja4k2zq@bugbug-inbox.com"));
        assert!(output.contains("1700000000000"));
        assert!(output.contains("3 minutes ago"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let output = render_record_list(&[], &Inbox::default(), Utc::now());
        assert!(output.is_empty());
    }

    #[test]
    fn truncates_long_values() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abcd", 4), "abcd");
    }
}
