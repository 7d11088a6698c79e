use twine_text::Text;

use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

/// Prints the first position of the needle, or -1 when absent.
pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if args.positional.len() != 2 {
        eprintln!("Missing <needle> <haystack>");
        std::process::exit(2);
    }
    let needle = Text::from_str(&args.positional[0]);
    let haystack = Text::from_str(&args.positional[1]);
    match haystack.index_of(&needle) {
        Ok(Some(position)) => {
            let mut buf = itoa::Buffer::new();
            emit_line(console, buf.format(position));
        }
        Ok(None) => emit_line(console, "-1"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
