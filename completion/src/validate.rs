//! Construction-time validation of a command tree.
//!
//! The engine itself has no error path, so structural mistakes in a
//! registered tree would otherwise surface only as wrong completions.
//! Validation catches them once, at registration: empty names, option
//! spellings that collide within one command, and duplicate sibling
//! subcommands. Spelling uniqueness is per command, not global; the same
//! name may appear in different subcommands with different meaning.
//!
//! # Examples
//!
//! ```
//! use termctl_completion::{validate_command, Command, OptionDef};
//!
//! let good = Command::new("termctl")
//!     .with_option(OptionDef::with_value("password").with_alias("p"))
//!     .with_subcommand(Command::new("ls"));
//! assert!(validate_command(&good).is_empty());
//!
//! // "p" collides with the alias of --password.
//! let bad = Command::new("termctl")
//!     .with_option(OptionDef::with_value("password").with_alias("p"))
//!     .with_option(OptionDef::flag("p"));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::types::Command;

/// Structural problems found in a command tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A command has an empty or whitespace-only name.
    #[error("command at path '{0}' has an empty name")]
    EmptyCommandName(String),
    /// An option has an empty name.
    #[error("option of command '{0}' has an empty name")]
    EmptyOptionName(String),
    /// Two option spellings collide within one command.
    #[error("duplicate option spelling '{spelling}' in command '{command}'")]
    DuplicateOptionSpelling {
        /// The colliding name or alias.
        spelling: String,
        /// Path of the owning command.
        command: String,
    },
    /// Two sibling subcommands share a name.
    #[error("duplicate subcommand '{name}' under '{command}'")]
    DuplicateSubcommand {
        /// The repeated subcommand name.
        name: String,
        /// Path of the parent command.
        command: String,
    },
}

/// Validates a command tree, returning every problem found.
///
/// An empty result means the tree upholds the invariants every completion
/// request relies on.
pub fn validate_command(root: &Command) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut path = Vec::new();
    validate_node(root, &mut path, &mut errors);
    errors
}

fn validate_node(cmd: &Command, path: &mut Vec<String>, errors: &mut Vec<ValidationError>) {
    let label = if path.is_empty() {
        cmd.name.clone()
    } else {
        format!("{} {}", path.join(" "), cmd.name)
    };

    if cmd.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName(path.join(" ")));
        return;
    }

    let mut seen_spellings: HashSet<&str> = HashSet::new();
    for option in &cmd.options {
        if option.name.trim().is_empty() {
            errors.push(ValidationError::EmptyOptionName(label.clone()));
            continue;
        }
        for spelling in std::iter::once(option.name.as_str())
            .chain(option.aliases.iter().map(String::as_str))
        {
            if !seen_spellings.insert(spelling) {
                errors.push(ValidationError::DuplicateOptionSpelling {
                    spelling: spelling.to_string(),
                    command: label.clone(),
                });
            }
        }
    }

    let mut seen_subcommands: HashSet<&str> = HashSet::new();
    for sub in &cmd.subcommands {
        if !seen_subcommands.insert(sub.name.as_str()) {
            errors.push(ValidationError::DuplicateSubcommand {
                name: sub.name.clone(),
                command: label.clone(),
            });
        }
    }

    path.push(cmd.name.clone());
    for sub in &cmd.subcommands {
        validate_node(sub, path, errors);
    }
    path.pop();
}
