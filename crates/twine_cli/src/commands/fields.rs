use crate::args::CliArgs;
use crate::commands::{StdConsole, emit_line};

/// Splits on a single separator, keeping empty segments.
pub(crate) fn run(args: &CliArgs, console: &mut StdConsole) {
    if args.positional.len() != 2 {
        eprintln!("Missing <separator> <text>");
        std::process::exit(2);
    }
    let mut separator_chars = args.positional[0].chars();
    let (Some(separator), None) = (separator_chars.next(), separator_chars.next()) else {
        eprintln!("Separator must be a single character");
        std::process::exit(2);
    };
    let text: Vec<char> = args.positional[1].chars().collect();
    for segment in twine_chars::split(&text, separator) {
        let rendered: String = segment.iter().collect();
        emit_line(console, &rendered);
    }
}
