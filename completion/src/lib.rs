//! Shell-completion resolution engine for the `termctl` remote-control tool.
//!
//! Given the partially-typed command line a shell hands over, the engine
//! determines which completions to offer:
//!
//! - [`Command`] / [`OptionDef`] — the immutable command tree, registered
//!   once at startup.
//! - [`resolve`] — walks the raw word list down the tree, honoring option
//!   values, subcommand descent, and per-command positional boundaries, and
//!   identifies the active command plus the partial word being typed.
//! - [`complete`] — dispatches the resolved request to option listing,
//!   subcommand listing, or an [`ArgCompleter`], and assembles titled
//!   [`MatchGroup`]s for the shell front-end to render.
//! - [`validate_command`] — construction-time structural checks.
//! - [`Choices`] / [`FilePaths`] — stock completers for fixed values and
//!   filesystem paths.
//!
//! Resolution is deliberately permissive: unrecognized tokens are treated as
//! positional arguments and the worst possible outcome of a request is an
//! empty result, never an error.
//!
//! # Example
//!
//! ```
//! use termctl_completion::{complete, Choices, Command, OptionDef};
//!
//! let root = Command::new("termctl")
//!     .with_subcommands_title("Commands")
//!     .with_option(
//!         OptionDef::with_value("use-password")
//!             .with_completer(Choices::new("Password use", ["if-available", "always", "never"])),
//!     )
//!     .with_subcommand(Command::new("send-text"))
//!     .with_subcommand(Command::new("send-key"));
//!
//! // The user typed: termctl send-t<TAB>
//! let words = vec!["send-t".to_string()];
//! let completions = complete(&root, &words);
//! assert_eq!(completions.groups[0].title, "Commands");
//! assert_eq!(completions.groups[0].matches[0].word, "send-text");
//!
//! // The user typed: termctl --use-password <TAB>
//! let words = vec!["--use-password".to_string(), String::new()];
//! let completions = complete(&root, &words);
//! assert_eq!(completions.groups[0].title, "Password use");
//! ```

mod completers;
mod dispatch;
mod matcher;
mod resolver;
mod types;
mod validate;

pub use completers::{Choices, FilePaths};
pub use dispatch::complete;
pub use matcher::{OptionMatch, exact_option, match_options, render_spelling};
pub use resolver::{Resolution, ResolvedState, resolve};
pub use types::{ArgCompleter, Command, Completions, Match, MatchGroup, OptionDef};
pub use validate::{ValidationError, validate_command};
