use std::env;
use std::io;
use std::io::Write;
use std::process::exit;

use mimalloc::MiMalloc;
use reporter::Reporter;
use scanner::Scanner;

mod reporter;
mod scanner;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let args = env::args().collect::<Vec<String>>();

    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => println!("Usage: skimmer [script]"),
    }
}

fn repl() {
    let mut buf = String::new();
    let mut reporter = Reporter::default();
    loop {
        buf.clear();
        print!("> ");
        io::stdout().flush().unwrap();
        if io::stdin().read_line(&mut buf).unwrap() == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }
        run(line, &mut reporter);
        reporter.clear();
    }
}

fn run_file(path: &str) {
    let Ok(source) = std::fs::read_to_string(path) else {
        eprintln!("Could not read file '{path}'.");
        exit(74);
    };
    let mut reporter = Reporter::default();
    run(&source, &mut reporter);
    if reporter.had_error() {
        exit(65);
    }
}

fn run(source: &str, reporter: &mut Reporter) {
    let tokens = Scanner::new(source).scan_tokens(reporter);
    for token in &tokens {
        println!("{token}");
    }
    for diagnostic in reporter.diagnostics() {
        eprintln!("{diagnostic}");
    }
}
