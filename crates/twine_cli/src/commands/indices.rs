use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

/// Prints every position of a character, comma separated.
pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if args.positional.len() != 2 {
        eprintln!("Missing <char> <text>");
        std::process::exit(2);
    }
    let mut needle_chars = args.positional[0].chars();
    let (Some(needle), None) = (needle_chars.next(), needle_chars.next()) else {
        eprintln!("Needle must be a single character");
        std::process::exit(2);
    };
    let text: Vec<char> = args.positional[1].chars().collect();
    let found = twine_array::all_indices(&text, &needle);
    emit_line(console, &twine_array::join(&found, ","));
}
