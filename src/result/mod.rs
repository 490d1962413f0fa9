#[derive(PartialEq, Debug)]
pub struct AccessLogAnalyzerResult {
    pub total_requests: usize,
    pub total_server_errors: usize,
    pub avg_response_time_ms: f64,
    pub top_ip: String,
    pub top_endpoint: String,
}
