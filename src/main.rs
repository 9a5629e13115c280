/**
 * Take a trivia quiz from the command line.
 */
use std::io;

use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use trivia::common::{is_broken_pipe, is_user_exit, Options, QuizError};
use trivia::logging::init_logging;
use trivia::loader::load_pool;
use trivia::quiz::Quiz;
use trivia::ui::CmdUI;


fn main() {
    let options = Options::from_args();

    if let Err(e) = run(options) {
        if !is_broken_pipe(&e) && !is_user_exit(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}


fn run(options: Options) -> Result<(), QuizError> {
    if options.no_color {
        colored::control::set_override(false);
    }
    init_logging(options.verbose, options.log_file.as_ref().map(|p| p.as_path()))?;

    let quiz = Quiz::new(load_pool(&options.path)?);

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ui = CmdUI::new(io::stdout(), rustyline::Editor::<()>::new());
    quiz.run_forever(&mut ui, &mut rng)
}
