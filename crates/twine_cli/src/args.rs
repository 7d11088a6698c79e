pub(crate) struct CliArgs {
    pub cmd: String,
    pub positional: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: twine <trim|split|fields|find|indices|pipe> <args>"
}

pub(crate) fn parse_args() -> Result<CliArgs, String> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    let cmd = argv.first().cloned().ok_or_else(|| usage().to_string())?;
    argv.remove(0);

    let mut positional: Vec<String> = Vec::new();
    for a in argv {
        if a.starts_with("--") {
            return Err(format!("Unknown option: {a}"));
        }
        positional.push(a);
    }

    Ok(CliArgs { cmd, positional })
}
