use crate::log_parser::log_entry::LogEntry;
use crate::result;

pub mod frequency;
use self::frequency::FrequencyCounter;

/// Computes aggregate statistics over all entries in a single pass.
///
/// Only 5xx statuses count as errors. An empty input yields an average
/// response time of 0.0 rather than NaN, and empty top keys.
pub fn analyze(entries: &[LogEntry]) -> result::AccessLogAnalyzerResult {
    let mut ip_frequencies = FrequencyCounter::new();
    let mut endpoint_frequencies = FrequencyCounter::new();

    let mut response_time_sum: i64 = 0;
    let mut server_error_count: usize = 0;

    for entry in entries {
        ip_frequencies.add(&entry.ip);
        endpoint_frequencies.add(&entry.endpoint);

        response_time_sum += entry.response_time_ms;

        if entry.status_code >= 500 {
            server_error_count += 1;
        }
    }

    let avg_response_time_ms = if entries.is_empty() {
        0.0
    } else {
        response_time_sum as f64 / entries.len() as f64
    };

    result::AccessLogAnalyzerResult {
        total_requests: entries.len(),
        total_server_errors: server_error_count,
        avg_response_time_ms,
        top_ip: ip_frequencies.top(),
        top_endpoint: endpoint_frequencies.top(),
    }
}
