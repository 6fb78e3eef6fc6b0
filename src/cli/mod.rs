//! Command-line front end: encrypt, decrypt and print-deck.

pub mod command;
pub use command::*;

pub mod passphrase;
pub use passphrase::*;

use crate::Arbitrary;
use crate::Deck;
use crate::PASSPHRASE_ENV;
use crate::Solitaire;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    name = "solitaire",
    version,
    about = "Solitaire encryption and decryption tool",
    long_about = "Encrypts and decrypts short messages with Bruce Schneier's Solitaire \
                  card cipher. Only suited to a few thousand characters at most."
)]
pub struct Cli {
    #[arg(
        long,
        short,
        global = true,
        env = PASSPHRASE_ENV,
        hide_env_values = true,
        value_parser = Passphrase::parse,
        help = "Passphrase for the de- and encryption (letters only)"
    )]
    pub passphrase: Option<Passphrase>,
    #[arg(
        long,
        global = true,
        value_name = "EXPORTED",
        help = "Key with an exported deck instead of a passphrase"
    )]
    pub deck: Option<String>,
    #[arg(
        long,
        short,
        global = true,
        action = clap::ArgAction::Count,
        help = "Log more detail to stderr (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parses arguments, initializes logging and runs the subcommand.
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        crate::log(cli.level());
        cli.execute()
    }

    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Encrypt { input } => {
                let cleartext = Self::read(input.as_deref())?;
                println!("{}", self.session()?.encrypt(&cleartext));
            }
            Command::Decrypt { input } => {
                let ciphertext = Self::read(input.as_deref())?;
                let cleartext = self
                    .session()?
                    .decrypt(&ciphertext)
                    .context("cannot decrypt")?;
                println!("{}", cleartext);
            }
            Command::PrintDeck { export, random } => {
                let deck = match random {
                    true => {
                        if self.passphrase.is_some() || self.deck.is_some() {
                            log::warn!("--random ignores the configured key");
                        }
                        Deck::random()
                    }
                    false => self.session()?.deck().clone(),
                };
                match export {
                    true => println!("{}", deck.export()),
                    false => Self::list(&deck),
                }
            }
        }
        Ok(())
    }

    /// Builds the session from whichever key source was given.
    fn session(&self) -> anyhow::Result<Solitaire> {
        match (&self.passphrase, &self.deck) {
            (Some(_), Some(_)) => anyhow::bail!("use either --passphrase or --deck, not both"),
            (Some(passphrase), None) => {
                passphrase.audit();
                Solitaire::with_passphrase(passphrase.as_bytes())
                    .context("cannot key deck from passphrase")
            }
            (None, Some(exported)) => {
                Solitaire::import(exported).context("cannot import deck")
            }
            (None, None) => anyhow::bail!(
                "passphrase is required, use --passphrase (or {}). \
                 If you really want to use an empty passphrase, use --passphrase=''",
                PASSPHRASE_ENV
            ),
        }
    }

    /// Whole input as text, from a file or from stdin.
    fn read(input: Option<&Path>) -> anyhow::Result<String> {
        match input {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display())),
            _ => {
                let ref mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(buffer)
                    .context("cannot read stdin")?;
                Ok(std::mem::take(buffer))
            }
        }
    }

    /// Numbered listing with red suits highlighted.
    fn list(deck: &Deck) {
        for (i, card) in deck.iter().enumerate() {
            let name = card.to_string();
            match card.suit() {
                Some(suit) if suit.is_red() => println!("{:>2}: {}", i + 1, name.red()),
                Some(_) => println!("{:>2}: {}", i + 1, name),
                None => println!("{:>2}: {}", i + 1, name.bold()),
            }
        }
    }
}
