use crate::result;

pub mod terminal;

pub trait Renderer {
    fn render(&mut self, result: result::AccessLogAnalyzerResult);
}
