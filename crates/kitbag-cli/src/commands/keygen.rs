//! Substitution key generation command.

use crate::cli::KeygenArgs;
use crate::error::convert_kit_error;
use crate::output::OutputFormatter;
use anyhow::Result;
use kitbag_core::Alphabet;
use kitbag_core::build_key;

pub fn execute(args: &KeygenArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let alphabet = resolve_alphabet(args.alphabet.as_deref())?;
    let key = build_key(&alphabet, args.seed);
    formatter.format_key(&key)
}

fn resolve_alphabet(chars: Option<&str>) -> Result<Alphabet> {
    match chars {
        Some(chars) => Alphabet::new(chars).map_err(convert_kit_error),
        None => Ok(Alphabet::default()),
    }
}
