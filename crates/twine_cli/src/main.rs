#[cfg(not(target_env = "msvc"))]
use mimalloc::MiMalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod args;
mod commands;

use twine_console::Console;

fn main() {
    let parsed = match args::parse_args() {
        Ok(v) => v,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if trace_enabled() {
        eprintln!("command: {}", parsed.cmd);
    }

    let mut console = Console::stdio();
    match parsed.cmd.as_str() {
        "trim" => commands::trim::run(&parsed, &mut console),
        "split" => commands::split::run(&parsed, &mut console),
        "fields" => commands::fields::run(&parsed, &mut console),
        "find" => commands::find::run(&parsed, &mut console),
        "indices" => commands::indices::run(&parsed, &mut console),
        "pipe" => commands::pipe::run(&parsed, &mut console),
        _ => {
            eprintln!("Unknown command: {}", parsed.cmd);
            std::process::exit(2);
        }
    }
}

fn trace_enabled() -> bool {
    std::env::var("TWINE_TRACE")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}
