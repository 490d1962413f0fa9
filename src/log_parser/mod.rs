use std::io;
use std::io::BufRead;

pub mod log_entry;
use self::log_entry::LogEntry;

pub fn parse(reader: &mut dyn io::Read) -> Vec<LogEntry> {
    let input = io::BufReader::new(reader);

    let mut entries: Vec<LogEntry> = Vec::new();

    for line in input.lines() {
        let line_value = match line {
            Ok(line_value) => line_value,
            Err(err) => {
                warn!("Skipped an unreadable line: {}", err);
                continue;
            }
        };

        match LogEntry::new_from_log_line(&line_value) {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!("Skipped a line: {}", err),
        }
    }

    entries
}
