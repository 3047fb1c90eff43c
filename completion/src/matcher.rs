//! Option matching against a partial token.
//!
//! Options store dash-less identifiers; this module owns the rendering
//! convention: single-character spellings render as `-x`, anything longer as
//! `--name`. Matching compares the rendered spelling against the partial
//! token as typed, so `-` offers every option, `--` offers only long forms,
//! and an empty partial offers everything.

use crate::types::{Command, OptionDef};

/// One candidate spelling of an option.
#[derive(Debug, Clone)]
pub struct OptionMatch<'a> {
    /// The rendered spelling (`--password`, `-p`).
    pub word: String,
    /// The option the spelling belongs to.
    pub option: &'a OptionDef,
}

/// Renders a dash-less identifier as a command-line spelling.
pub fn render_spelling(name: &str) -> String {
    if name.chars().count() == 1 {
        format!("-{name}")
    } else {
        format!("--{name}")
    }
}

fn spellings(option: &OptionDef) -> impl Iterator<Item = String> + '_ {
    std::iter::once(option.name.as_str())
        .chain(option.aliases.iter().map(String::as_str))
        .map(render_spelling)
}

/// Lists every spelling of `cmd`'s options that has `partial` as a literal
/// prefix.
///
/// Results keep declaration order, with an option's canonical name before its
/// aliases. An exact match that is also a strict prefix of another spelling
/// is not deduplicated; both are reported.
pub fn match_options<'a>(cmd: &'a Command, partial: &str) -> Vec<OptionMatch<'a>> {
    cmd.options
        .iter()
        .flat_map(|option| {
            spellings(option)
                .filter(|word| word.starts_with(partial))
                .map(move |word| OptionMatch { word, option })
        })
        .collect()
}

/// Finds the option one of whose spellings equals `token` exactly.
///
/// Used by the resolver to decide whether a completed token named an option.
pub fn exact_option<'a>(cmd: &'a Command, token: &str) -> Option<&'a OptionDef> {
    cmd.options
        .iter()
        .find(|option| spellings(option).any(|word| word == token))
}
