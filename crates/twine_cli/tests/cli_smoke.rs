use assert_cmd::Command;

fn twine() -> Command {
    Command::cargo_bin("twine").unwrap()
}

#[test]
fn usage_without_args() {
    twine()
        .assert()
        .code(2)
        .stderr("Usage: twine <trim|split|fields|find|indices|pipe> <args>\n");
}

#[test]
fn unknown_command_is_a_usage_error() {
    twine()
        .arg("frob")
        .assert()
        .code(2)
        .stderr("Unknown command: frob\n");
}

#[test]
fn unknown_option_is_rejected() {
    twine()
        .args(["trim", "--color"])
        .assert()
        .code(2)
        .stderr("Unknown option: --color\n");
}

#[test]
fn trim_strips_surrounding_whitespace() {
    twine()
        .args(["trim", "  hi  "])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn split_drops_empty_runs() {
    twine()
        .args(["split", ",", "a,b,,c"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn split_accepts_a_separator_set() {
    twine()
        .args(["split", ",;", "a;b,c"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn fields_keeps_empty_segments() {
    twine()
        .args(["fields", ",", "a,b,"])
        .assert()
        .success()
        .stdout("a\nb\n\n");
}

#[test]
fn find_prints_the_position() {
    twine()
        .args(["find", "abc", "abcabc"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn find_prints_a_sentinel_when_absent() {
    twine()
        .args(["find", "zz", "abcabc"])
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn indices_lists_every_occurrence() {
    twine()
        .args(["indices", "a", "banana"])
        .assert()
        .success()
        .stdout("1,3,5\n");
    twine()
        .args(["indices", "z", "banana"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn find_rejects_an_empty_needle() {
    twine()
        .args(["find", "", "abc"])
        .assert()
        .code(1)
        .stderr("Error: Search value must not be empty\n");
}

#[test]
fn pipe_trims_each_input_line() {
    twine()
        .arg("pipe")
        .write_stdin("  a  \n\tb\nc\n")
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn trace_is_gated_by_env_var() {
    twine()
        .env("TWINE_TRACE", "1")
        .args(["trim", " x "])
        .assert()
        .success()
        .stdout("x\n")
        .stderr("command: trim\n");
}
