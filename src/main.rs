use std::env;
use std::io;
use std::process;

use access_log_analyzer::args;
use access_log_analyzer::render::terminal::TerminalRenderer;
use access_log_analyzer::render::Renderer;
use access_log_analyzer::run;

fn main() {
    env_logger::init();

    let args = args::parse_args(env::args());

    let result = match run(&args) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if !args.quiet {
        let mut stdout = io::stdout();
        let mut renderer = TerminalRenderer::new(&mut stdout);
        renderer.render(result);
    }
}
