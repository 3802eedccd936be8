//! EUnit discovery CLI.
//!
//! Thin command dispatch over the `erl_eunit` locator. Finding nothing is
//! a valid outcome and exits 0; only usage errors and unreadable explicit
//! arguments exit 1.

mod commands;

use commands::{run_test_at, run_test_files};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "test-files" => {
            if args.len() < 3 {
                eprintln!("Usage: erlt test-files <path>...");
                eprintln!();
                eprintln!("Prints every selected EUnit test file, in selection order.");
                eprintln!("Directories expand to their immediate .erl files only.");
                1
            } else {
                run_test_files(&args[2..])
            }
        }
        "test-at" => {
            if args.len() != 4 {
                eprintln!("Usage: erlt test-at <file.erl> <byte-offset>");
                eprintln!();
                eprintln!("Prints the zero-arity test function under the offset, if any.");
                1
            } else {
                run_test_at(&args[2], &args[3])
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    eprintln!("EUnit test discovery");
    eprintln!();
    eprintln!("Usage: erlt <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  test-files <path>...            List test files in the selection");
    eprintln!("  test-at <file.erl> <offset>     Test function at a byte offset");
    eprintln!("  help                            Show this message");
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
