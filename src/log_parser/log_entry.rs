use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
#[fail(display = "Uncomprehensible log line: {}", _0)]
pub struct MalformedLine(pub &'static str);

#[derive(Eq, PartialEq, Clone)]
#[derive(Debug)]
pub struct LogEntry {
    pub ip: String,
    pub method: String,
    pub endpoint: String,
    pub status_code: i32,
    pub response_time_ms: i64,
}

impl LogEntry {
    pub fn new_from_log_line(log_line: &str) -> Result<LogEntry, MalformedLine> {
        let parts: Vec<&str> = log_line.split_whitespace().collect();

        // Shortest valid line is "<ip> <method> <endpoint> <status> <time>"
        if parts.len() < 5 {
            return Err(MalformedLine("expected at least 5 fields"));
        }

        let status_code: i32 = match parts[3].parse() {
            Ok(number) => number,
            Err(_) => return Err(MalformedLine("status code is not a number")),
        };

        let response_time_ms: i64 = match parts[4].parse() {
            Ok(number) => number,
            Err(_) => return Err(MalformedLine("response time is not a number")),
        };

        Ok(LogEntry {
            ip: parts[0].to_string(),
            method: parts[1].to_string(),
            endpoint: parts[2].to_string(),
            status_code,
            response_time_ms,
        })
    }
}
