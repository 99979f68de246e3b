use std::path::PathBuf;
use std::{env, process::Command};

use regex::Regex;
use test_generator::test_resources;

fn command() -> Command {
    // Integration tests live one directory below the compiled binary.
    let path = env::current_exe().expect("Could not get path to current executable.");
    let path = path.parent().expect("Path parent not found.");
    let mut path = path.parent().expect("Path parent not found.").to_owned();
    path.push(env!("CARGO_PKG_NAME"));
    path.set_extension(env::consts::EXE_EXTENSION);
    Command::new(path.into_os_string())
}

struct Expected {
    tokens: Vec<String>,
    diagnostics: Vec<String>,
}

/// Expectations are trailing comments in the scanned file itself; the scanner
/// skips comments, so they never disturb the token listing they describe.
fn parse_expectations(path: &PathBuf) -> Expected {
    let token_re = Regex::new(r"// expect: ?(.*)").expect("Invalid regex.");
    let error_re = Regex::new(r"// error: (.*)").expect("Invalid regex.");
    let error_line_re = Regex::new(r"// error line (\d+): (.*)").expect("Invalid regex.");

    let mut expected = Expected {
        tokens: vec![],
        diagnostics: vec![],
    };

    let content = std::fs::read_to_string(path).expect("Could not read path to string.");
    for (i, line) in content.lines().enumerate() {
        if let Some(m) = token_re.captures(line) {
            expected.tokens.push(m[1].to_owned());
        }
        if let Some(m) = error_line_re.captures(line) {
            let s = format!("[Line {}] Error : {}", &m[1], &m[2]);
            expected.diagnostics.push(s);
        } else if let Some(m) = error_re.captures(line) {
            let s = format!("[Line {}] Error : {}", i + 1, &m[1]);
            expected.diagnostics.push(s);
        }
    }
    expected
}

#[test_resources("tests/suite/*.lox")]
fn scan_file_test(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = parse_expectations(&path);
    let output = command()
        .arg(path)
        .output()
        .expect("Command execution error.");

    let out: Vec<String> = String::from_utf8(output.stdout)
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();
    let err: Vec<String> = String::from_utf8(output.stderr)
        .expect("Invalid UTF-8")
        .lines()
        .map(|x| x.to_owned())
        .collect();

    match expected.diagnostics.is_empty() {
        true => assert!(
            output.status.success(),
            "Program exited with failure, expected success"
        ),
        false => assert_eq!(
            output
                .status
                .code()
                .expect("Process terminated by a signal."),
            65,
            "Lexical errors should have error code 65"
        ),
    }

    assert_eq!(expected.diagnostics, err, "Diagnostics should match");
    assert_eq!(expected.tokens, out, "Token listing should match");
}
