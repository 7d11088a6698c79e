//! One module per subcommand, plus shared output plumbing.

use std::io::{BufReader, Stdin, Stdout};

use twine_console::Console;

pub(crate) mod fields;
pub(crate) mod find;
pub(crate) mod indices;
pub(crate) mod pipe;
pub(crate) mod split;
pub(crate) mod trim;

pub(crate) type StdConsole = Console<BufReader<Stdin>, Stdout>;

/// Writes one output line, tolerating a closed downstream pipe.
pub(crate) fn emit_line(console: &mut StdConsole, line: &str) {
    if let Err(e) = console.write_line(line) {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("stdout error: {e}");
        std::process::exit(2);
    }
}
