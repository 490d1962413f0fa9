use clap::{App, Arg};

#[derive(PartialEq, Debug)]
pub struct AccessLogAnalyzerArgs {
    pub filename: String,
    pub quiet: bool,
}

pub fn parse_args<T>(args: T) -> AccessLogAnalyzerArgs
where
    T: IntoIterator<Item = String>,
{
    let app = App::new("Access Log Analyzer")
        .author(crate_authors!())
        .version(crate_version!())
        .after_help(crate_description!())
        .arg(
            Arg::with_name("filename")
                .index(1)
                .value_name("FILE")
                .required(false)
                .help("Log file to analyze, defaults to stdin")
                .takes_value(true),
        )
        .arg(Arg::with_name("quiet").short("q").long("quiet").help(
            "Don't output results to stdout",
        ))
        .get_matches_from(args);

    let filename = app.value_of("filename").unwrap_or("-").to_string();

    let quiet = app.is_present("quiet");

    AccessLogAnalyzerArgs { filename, quiet }
}
