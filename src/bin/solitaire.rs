//! Solitaire Command Line Tool
//!
//! Encrypts, decrypts and prints decks keyed from a passphrase or an
//! exported deck. Results go to stdout; errors are one line on stderr.

use solitaire::cli::Cli;

fn main() {
    if let Err(e) = Cli::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
