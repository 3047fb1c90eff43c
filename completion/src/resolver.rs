//! Resolution of a raw word list against the command tree.
//!
//! The resolver walks every completed word left to right, descending into
//! subcommands and tracking option state, and always treats the final word as
//! the partial word being completed. There is no error path: a token that
//! matches nothing is consumed as a positional argument, so resolution only
//! ever narrows the candidate space.

use tracing::debug;

use crate::matcher;
use crate::types::{Command, OptionDef};

/// What the resolver was expecting when the word stream ran out.
#[derive(Debug)]
pub enum ResolvedState<'a> {
    /// Options, subcommands, or positional arguments may follow.
    Open,
    /// The previous token named this option and it consumes a value; the
    /// partial word is that value.
    OptionValue(&'a OptionDef),
    /// The command's positional boundary was reached; the partial word and
    /// everything after it is passthrough.
    Passthrough,
}

/// Outcome of resolving one word list: the active command, the partial word
/// to complete, and the state completion dispatch should honor.
///
/// Borrows the tree (`'a`) and the word list (`'w`) independently, so the
/// resolution outlives the request's word buffer only through tree data.
#[derive(Debug)]
pub struct Resolution<'a, 'w> {
    /// Deepest command reached.
    pub cmd: &'a Command,
    /// Final, possibly-incomplete word.
    pub partial_word: &'w str,
    /// Parse state at the partial word.
    pub state: ResolvedState<'a>,
}

/// Resolves `words` against the tree rooted at `root`.
///
/// The last word is never consumed as a completed token; it becomes the
/// partial word even when it is lexically identical to an option or
/// subcommand name. An empty word list resolves to `root` with an empty
/// partial word.
pub fn resolve<'a, 'w>(root: &'a Command, words: &'w [String]) -> Resolution<'a, 'w> {
    let (partial_word, completed) = match words.split_last() {
        Some((last, rest)) => (last.as_str(), rest),
        None => ("", &[] as &[String]),
    };

    let mut cmd = root;
    let mut arg_index = 0usize;
    let mut pending_option: Option<&'a OptionDef> = None;
    let mut passthrough = false;

    for word in completed {
        // An option's value is consumed without counting as positional.
        if pending_option.take().is_some() {
            continue;
        }

        if passthrough {
            arg_index += 1;
            continue;
        }
        if let Some(stop) = cmd.stop_processing_at_arg {
            if arg_index >= stop {
                debug!(cmd = %cmd.name, stop, "positional boundary reached, passthrough");
                passthrough = true;
                arg_index += 1;
                continue;
            }
        }

        if let Some(option) = matcher::exact_option(cmd, word) {
            if option.has_following_arg {
                pending_option = Some(option);
            }
            continue;
        }

        if let Some(sub) = cmd.find_subcommand(word) {
            debug!(from = %cmd.name, to = %sub.name, "descending into subcommand");
            cmd = sub;
            arg_index = 0;
            continue;
        }

        arg_index += 1;
    }

    let state = if let Some(option) = pending_option {
        ResolvedState::OptionValue(option)
    } else if passthrough
        || cmd
            .stop_processing_at_arg
            .is_some_and(|stop| arg_index >= stop)
    {
        ResolvedState::Passthrough
    } else {
        ResolvedState::Open
    };

    debug!(
        cmd = %cmd.name,
        partial_word,
        ?state,
        "resolved completion request"
    );

    Resolution {
        cmd,
        partial_word,
        state,
    }
}
