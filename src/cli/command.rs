use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(about = "Encrypt the given cleartext", alias = "enc")]
    Encrypt {
        #[arg(help = "File holding the cleartext; reads stdin when omitted or '-'")]
        input: Option<PathBuf>,
    },
    #[command(about = "Decrypt the given ciphertext", alias = "dec")]
    Decrypt {
        #[arg(help = "File holding the ciphertext; reads stdin when omitted or '-'")]
        input: Option<PathBuf>,
    },
    #[command(about = "Print the deck for a given passphrase", alias = "deck")]
    PrintDeck {
        #[arg(long, help = "Print the deck as a sequence suitable for importing")]
        export: bool,
        #[arg(long, help = "Print a freshly shuffled deck instead of a keyed one")]
        random: bool,
    },
}
