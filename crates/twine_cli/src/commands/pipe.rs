use twine_text::Text;

use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

/// Reads lines until end of input, writing each one back trimmed.
pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if !args.positional.is_empty() {
        eprintln!("pipe reads from standard input and takes no arguments");
        std::process::exit(2);
    }
    loop {
        let line = match console.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("stdin error: {e}");
                std::process::exit(2);
            }
        };
        let trimmed = Text::from_str(&line).trim().to_string();
        emit_line(console, &trimmed);
    }
}
