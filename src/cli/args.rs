use std::path::PathBuf;

use clap::Parser;

use crate::phrase::DEFAULT_DICTIONARY;

/// Generate a short random password with lowercase, uppercase and digit
/// characters, leaving out look-alike characters.
#[derive(Debug, Parser)]
#[command(name = "passgen", version)]
pub struct PassgenArgs {
    /// Estimate the entropy of generated passwords instead of generating one
    #[arg(short = 'e', long = "entropy")]
    pub entropy: bool,
}

/// Generate a random passphrase of four dictionary words.
#[derive(Debug, Parser)]
#[command(name = "passphrase", version)]
pub struct PassphraseArgs {
    /// Word list to use, one word per line
    #[arg(default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// Estimate the entropy of the generated passphrase
    #[arg(short = 'e', long = "entropy")]
    pub entropy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passgen_without_arguments_generates() {
        let args = PassgenArgs::try_parse_from(["passgen"]).unwrap();
        assert!(!args.entropy);
    }

    #[test]
    fn passgen_short_and_long_entropy_flag() {
        assert!(PassgenArgs::try_parse_from(["passgen", "-e"]).unwrap().entropy);
        assert!(PassgenArgs::try_parse_from(["passgen", "--entropy"]).unwrap().entropy);
    }

    #[test]
    fn passgen_rejects_unknown_arguments() {
        let err = PassgenArgs::try_parse_from(["passgen", "-x"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(PassgenArgs::try_parse_from(["passgen", "extra"]).is_err());
    }

    #[test]
    fn passphrase_defaults_dictionary() {
        let args = PassphraseArgs::try_parse_from(["passphrase"]).unwrap();
        assert_eq!(args.dictionary, PathBuf::from("goodwords.txt"));
        assert!(!args.entropy);
    }

    #[test]
    fn passphrase_accepts_dictionary_and_flag() {
        let args = PassphraseArgs::try_parse_from(["passphrase", "-e", "words.txt"]).unwrap();
        assert_eq!(args.dictionary, PathBuf::from("words.txt"));
        assert!(args.entropy);
    }
}
