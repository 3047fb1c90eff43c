//! Completion dispatch: from a resolved request to match groups.
//!
//! Once the resolver has produced the active command and partial word, this
//! module decides which candidates to offer and assembles them into titled
//! [`MatchGroup`]s. Dispatch is read-only with respect to the command tree;
//! it only writes into the per-request [`Completions`] accumulator.

use tracing::debug;

use crate::matcher;
use crate::resolver::{self, ResolvedState};
use crate::types::{Command, Completions, MatchGroup};

/// Runs one full completion request: resolve, dispatch, build groups.
///
/// Invoking this twice with the same inputs and unchanged external state
/// (e.g. an unchanged filesystem for file completers) yields identical
/// groups.
///
/// # Examples
///
/// ```
/// use termctl_completion::{complete, Command};
///
/// let root = Command::new("termctl")
///     .with_subcommand(Command::new("send-text"))
///     .with_subcommand(Command::new("send-key"));
///
/// let words = vec!["send-t".to_string()];
/// let completions = complete(&root, &words);
/// assert_eq!(completions.groups[0].matches[0].word, "send-text");
/// ```
pub fn complete<'a>(root: &'a Command, words: &[String]) -> Completions<'a> {
    let resolution = resolver::resolve(root, words);
    let mut completions = Completions::for_command(resolution.cmd);

    match resolution.state {
        ResolvedState::OptionValue(option) => {
            if let Some(completer) = &option.completer {
                completer.complete(&mut completions, resolution.partial_word);
            }
        }
        ResolvedState::Passthrough => {
            if let Some(completer) = &resolution.cmd.completer {
                completer.complete(&mut completions, resolution.partial_word);
            }
        }
        ResolvedState::Open => {
            dispatch_open(&mut completions, resolution.cmd, resolution.partial_word);
        }
    }

    debug!(
        cmd = %resolution.cmd.name,
        groups = completions.groups.len(),
        matches = completions.match_count(),
        "completion request finished"
    );
    completions
}

fn dispatch_open<'a>(completions: &mut Completions<'a>, cmd: &'a Command, partial_word: &str) {
    if partial_word.starts_with('-') {
        completions.add_group(option_group(cmd, partial_word));
    } else if !cmd.subcommands.is_empty() {
        completions.add_group(subcommand_group(cmd, partial_word));
    } else if let Some(completer) = &cmd.completer {
        completer.complete(completions, partial_word);
    }
}

/// Builds the option group for `cmd`, declaration order preserved.
fn option_group(cmd: &Command, partial_word: &str) -> MatchGroup {
    let mut group = MatchGroup::new(&cmd.options_title);
    for candidate in matcher::match_options(cmd, partial_word) {
        group.push(candidate.word, candidate.option.description.clone());
    }
    group
}

/// Builds the subcommand group for `cmd`, declaration order preserved.
fn subcommand_group(cmd: &Command, partial_word: &str) -> MatchGroup {
    let mut group = MatchGroup::new(&cmd.subcommands_title);
    for sub in &cmd.subcommands {
        if sub.name.starts_with(partial_word) {
            group.push(sub.name.clone(), sub.description.clone());
        }
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionDef;

    fn words(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|p| p.to_string()).collect()
    }

    fn tree() -> Command {
        Command::new("termctl")
            .with_options_title("Global options")
            .with_subcommands_title("Commands")
            .with_option(
                OptionDef::with_value("password")
                    .with_alias("p")
                    .with_description("Password for the remote instance"),
            )
            .with_subcommand(
                Command::new("send-text").with_description("Send arbitrary text to the terminal"),
            )
            .with_subcommand(Command::new("send-key"))
    }

    #[test]
    fn test_bare_partial_lists_subcommands() {
        let root = tree();
        let w = words(&["se"]);
        let completions = complete(&root, &w);

        assert_eq!(completions.groups.len(), 1);
        let group = &completions.groups[0];
        assert_eq!(group.title, "Commands");
        let names: Vec<&str> = group.matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(names, vec!["send-text", "send-key"]);
    }

    #[test]
    fn test_dash_partial_lists_options() {
        let root = tree();
        let w = words(&["--pa"]);
        let completions = complete(&root, &w);

        let group = &completions.groups[0];
        assert_eq!(group.title, "Global options");
        assert_eq!(group.matches[0].word, "--password");
        assert_eq!(
            group.matches[0].description.as_deref(),
            Some("Password for the remote instance")
        );
    }

    #[test]
    fn test_pending_option_value_goes_to_its_completer() {
        let root = Command::new("termctl").with_option(
            OptionDef::with_value("use-password").with_completer(
                |completions: &mut Completions<'_>, partial: &str| {
                    let mut group = MatchGroup::new("Choices");
                    for choice in ["if-available", "always", "never"] {
                        if choice.starts_with(partial) {
                            group.push(choice, None);
                        }
                    }
                    completions.add_group(group);
                },
            ),
        );

        let w = words(&["--use-password", "a"]);
        let completions = complete(&root, &w);
        assert_eq!(completions.groups[0].matches[0].word, "always");
    }

    #[test]
    fn test_pending_option_without_completer_yields_nothing() {
        let root = tree();
        let w = words(&["--password", ""]);
        let completions = complete(&root, &w);
        assert!(completions.groups.is_empty());
        // The resolved command is still recorded for diagnostics.
        assert_eq!(completions.current_cmd().unwrap().name, "termctl");
    }

    #[test]
    fn test_no_subcommands_falls_back_to_command_completer() {
        let root = Command::new("goto-layout").with_completer(
            |completions: &mut Completions<'_>, partial: &str| {
                let mut group = MatchGroup::new("Layouts");
                for layout in ["stack", "splits", "tall"] {
                    if layout.starts_with(partial) {
                        group.push(layout, None);
                    }
                }
                completions.add_group(group);
            },
        );

        let w = words(&["s"]);
        let completions = complete(&root, &w);
        let names: Vec<&str> = completions.groups[0]
            .matches
            .iter()
            .map(|m| m.word.as_str())
            .collect();
        assert_eq!(names, vec!["stack", "splits"]);
    }

    #[test]
    fn test_no_candidates_means_no_groups() {
        let root = tree();
        let w = words(&["zzz"]);
        let completions = complete(&root, &w);
        assert!(completions.groups.is_empty());
    }

    #[test]
    fn test_completion_is_idempotent() {
        let root = tree();
        let w = words(&["se"]);
        let first = complete(&root, &w);
        let second = complete(&root, &w);
        assert_eq!(first.groups, second.groups);
    }
}
