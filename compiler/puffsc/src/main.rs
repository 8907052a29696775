//! Puffs token inspector CLI.

use puffsc::commands::{classify_lexeme, describe, list_built_ins};

fn print_usage() {
    eprintln!("Usage: puffs <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  classify <lexeme>...   Show the identity, flags and forms of each lexeme");
    eprintln!("  builtins               List every built-in spelling with its identity");
}

fn main() {
    puffsc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "classify" => {
            if args.len() < 3 {
                eprintln!("Usage: puffs classify <lexeme>...");
                std::process::exit(1);
            }
            let mut failed = false;
            for lexeme in &args[2..] {
                match classify_lexeme(lexeme) {
                    Ok(found) => println!("{:<8} {}", lexeme, describe(&found)),
                    Err(err) => {
                        eprintln!("error: {err}");
                        failed = true;
                    }
                }
            }
            if failed {
                std::process::exit(1);
            }
        }
        "builtins" => {
            for line in list_built_ins() {
                println!("{line}");
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}
