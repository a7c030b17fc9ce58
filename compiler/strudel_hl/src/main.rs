//! Strudel highlighter CLI.

use strudel_hl::{init_tracing, CliError, HighlightCommand};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("strudel-hl {}", env!("CARGO_PKG_VERSION"));
        }
        _ => match HighlightCommand::parse(command, &args[2..]) {
            Ok(Some(cmd)) => match cmd.execute() {
                Ok(output) => {
                    print!("{output}");
                    if !output.is_empty() && !output.ends_with('\n') {
                        println!();
                    }
                }
                Err(err) => fail(&err),
            },
            Ok(None) => {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(2);
            }
            Err(err) => fail(&err),
        },
    }
}

fn fail(err: &CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(err.exit_code());
}

fn print_usage() {
    println!("Strudel pattern highlighter");
    println!();
    println!("Usage: strudel-hl <command> [options]");
    println!();
    println!("Commands:");
    println!("  html <file|->             Print highlighted markup");
    println!("  meta <file|-> [--pretty]  Print markup and string locations as JSON");
    println!("  tokens <file|->           List tokens with their byte spans");
    println!("  strings <file|->          List string literal locations");
    println!("  mini <text> [--base=N]    Highlight a bare mini-notation string");
    println!("  help                      Show this help message");
    println!("  version                   Show version information");
    println!();
    println!("Use `-` to read the source from standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to log to stderr.");
    println!();
    println!("Examples:");
    println!("  strudel-hl html song.strudel");
    println!("  echo 's(\"bd sd\")' | strudel-hl meta - --pretty");
    println!("  strudel-hl mini '<c4 e4>*2' --base=6");
}
