#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use std::fs::File;
use std::io;

use failure::Error;

pub mod analyzer;
pub mod args;
pub mod log_parser;
pub mod render;
pub mod result;

pub fn open_input(filename: &str) -> Result<Box<dyn io::Read>, Error> {
    match filename {
        "-" => Ok(Box::new(io::stdin())),
        _ => Ok(Box::new(File::open(filename)?)),
    }
}

pub fn run(args: &args::AccessLogAnalyzerArgs) -> Result<result::AccessLogAnalyzerResult, Error> {
    let mut input = open_input(&args.filename)?;

    let entries = log_parser::parse(&mut *input);

    Ok(analyzer::analyze(&entries))
}
