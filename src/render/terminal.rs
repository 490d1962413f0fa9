use std::io::prelude::*;
use crate::render::Renderer;
use crate::result;

pub struct TerminalRenderer<'a> {
    stream: &'a mut dyn Write,
}

impl<'a> TerminalRenderer<'a> {
    pub fn new(stream: &'a mut dyn Write) -> TerminalRenderer {
        TerminalRenderer { stream }
    }
}

impl<'a> Renderer for TerminalRenderer<'a> {
    fn render(&mut self, result: result::AccessLogAnalyzerResult) {
        let mut write =
            |text: String| { let _ = self.stream.write(format!("{}\n", text).as_bytes()); };

        write(format!("count:\t{}", result.total_requests));

        if result.total_requests == 0 {
            warn!("No parseable log lines in input.");
            return;
        }

        write(format!("error.server_5xx:\t{}", result.total_server_errors));
        write(format!("time.avg:\t{}", result.avg_response_time_ms));
        write(format!("top.ip:\t{}", result.top_ip));
        write(format!("top.endpoint:\t{}", result.top_endpoint));
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::prelude::*;
    use std::str;
    use super::*;

    struct MockWrite {
        write_calls: Vec<String>,
    }

    impl Write for MockWrite {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.write_calls.push(
                str::from_utf8(buf).unwrap().to_string(),
            );
            Ok(1)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn get_result_fixture() -> result::AccessLogAnalyzerResult {
        result::AccessLogAnalyzerResult {
            total_requests: 3,
            total_server_errors: 1,
            avg_response_time_ms: 200.0,
            top_ip: String::from("1.1.1.1"),
            top_endpoint: String::from("/a"),
        }
    }

    #[test]
    fn test_terminal_renderer() {
        let mut mock_write = MockWrite { write_calls: vec![] };

        {
            let mut renderer = TerminalRenderer::new(&mut mock_write);
            let result = get_result_fixture();
            renderer.render(result);
        }

        assert!(mock_write.write_calls.contains(
            &String::from("count:\t3\n"),
        ));
        assert!(mock_write.write_calls.contains(&String::from(
            "error.server_5xx:\t1\n",
        )));
        assert!(mock_write.write_calls.contains(
            &String::from("time.avg:\t200\n"),
        ));
        assert!(mock_write.write_calls.contains(
            &String::from("top.ip:\t1.1.1.1\n"),
        ));
        assert!(mock_write.write_calls.contains(&String::from(
            "top.endpoint:\t/a\n",
        )));
    }

    #[test]
    fn test_terminal_renderer_no_lines() {
        let mut mock_write = MockWrite { write_calls: vec![] };

        {
            let mut renderer = TerminalRenderer::new(&mut mock_write);

            let result = result::AccessLogAnalyzerResult {
                total_requests: 0,
                total_server_errors: 0,
                avg_response_time_ms: 0.0,
                top_ip: String::new(),
                top_endpoint: String::new(),
            };

            renderer.render(result);
        }

        assert!(mock_write.write_calls.contains(
            &String::from("count:\t0\n"),
        ));
        assert_eq!(mock_write.write_calls.len(), 1);
    }
}
