use twine_text::Text;

use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if args.positional.len() != 1 {
        eprintln!("Missing <text>");
        std::process::exit(2);
    }
    let text = Text::from_str(&args.positional[0]);
    emit_line(console, &text.trim().to_string());
}
