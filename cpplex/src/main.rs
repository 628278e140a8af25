//! cpplex CLI
//!
//! Inspect, rebuild, and verify lossless C++ token streams.

mod commands;
mod tracing_setup;

use commands::{check_file, print_tokens, rebuild_file};

fn main() {
    tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "tokens" => {
            let debug = args.iter().skip(2).any(|a| a == "--debug");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: cpplex tokens <file> [--debug]");
                std::process::exit(1);
            };
            print_tokens(path, debug);
        }
        "rebuild" => {
            if args.len() < 3 {
                eprintln!("Usage: cpplex rebuild <file>");
                std::process::exit(1);
            }
            rebuild_file(&args[2]);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: cpplex check <file>");
                std::process::exit(1);
            }
            std::process::exit(check_file(&args[2]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("cpplex - lossless C++ tokenizer");
    println!();
    println!("Usage: cpplex <command> [arguments]");
    println!();
    println!("Commands:");
    println!("  tokens <file> [--debug]  Print the token stream, one color per kind");
    println!("  rebuild <file>           Write <file>.rebuilt from the token stream");
    println!("  check <file>             Tokenize, rebuild, and compare to the input");
    println!("  help                     Show this help");
    println!();
    println!("check exits 0 on an exact rebuild and 1 on a tokenization error");
    println!("or any mismatch (newline-style-only differences included).");
}
