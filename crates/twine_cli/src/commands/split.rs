use twine_text::Text;

use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

/// Splits on any character of the separator set, dropping empty runs.
pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if args.positional.len() != 2 {
        eprintln!("Missing <separators> <text>");
        std::process::exit(2);
    }
    let separators: Vec<char> = args.positional[0].chars().collect();
    if separators.is_empty() {
        eprintln!("Separators must not be empty");
        std::process::exit(2);
    }
    let text = Text::from_str(&args.positional[1]);
    for segment in text.split(&separators) {
        emit_line(console, &segment.to_string());
    }
}
