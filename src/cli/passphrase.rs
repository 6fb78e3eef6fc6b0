use crate::RECOMMENDED_PASSPHRASE_LEN;
use zeroize::Zeroizing;

/// Passphrase taken from the command line or environment.
///
/// Letters are accepted in either case and stored uppercased, in a buffer
/// that is wiped when dropped.
#[derive(Clone)]
pub struct Passphrase(Zeroizing<Vec<u8>>);

impl Passphrase {
    /// Value parser for clap: letters only, any case, possibly empty.
    pub fn parse(raw: &str) -> Result<Self, String> {
        match raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            true => Ok(Self(Zeroizing::new(raw.to_ascii_uppercase().into_bytes()))),
            false => Err(String::from(
                "passphrase must contain only letters from A-Z and a-z",
            )),
        }
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    /// Warns about passphrases too short to key the deck well.
    pub fn audit(&self) {
        match self.0.len() {
            0 => log::warn!("passphrase is empty, this is not recommended"),
            n if n < RECOMMENDED_PASSPHRASE_LEN => log::warn!(
                "passphrase should be at least {} characters long",
                RECOMMENDED_PASSPHRASE_LEN
            ),
            _ => {}
        }
    }
}

/// Never prints the secret.
impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Passphrase(<{} letters>)", self.0.len())
    }
}
