//! Data model for the completion engine.
//!
//! This module defines the command tree ([`Command`], [`OptionDef`]) that the
//! resolver walks, the completion output types ([`Match`], [`MatchGroup`],
//! [`Completions`]) handed to a shell front-end, and the [`ArgCompleter`]
//! capability used to plug in domain-specific completion such as file paths.
//!
//! The tree is built once during startup and never mutated afterwards; every
//! completion request only traverses it.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Capability for completing the value of an option or a command's bare
/// positional arguments.
///
/// Implementations append [`Match`]es to the per-request [`Completions`]
/// accumulator; they must not touch groups produced earlier. Attached to the
/// tree at construction time, one implementation per argument kind.
///
/// Any `Fn(&mut Completions, &str)` closure is an `ArgCompleter`:
///
/// ```
/// use termctl_completion::{ArgCompleter, Completions, MatchGroup};
///
/// let completer = |completions: &mut Completions<'_>, partial: &str| {
///     let mut group = MatchGroup::new("Sessions");
///     if "main".starts_with(partial) {
///         group.push("main", None);
///     }
///     completions.add_group(group);
/// };
/// let mut completions = Completions::new();
/// completer.complete(&mut completions, "ma");
/// assert_eq!(completions.groups[0].matches[0].word, "main");
/// ```
pub trait ArgCompleter: Send + Sync {
    /// Appends matches for `partial_word` to `completions`.
    fn complete(&self, completions: &mut Completions<'_>, partial_word: &str);
}

impl<F> ArgCompleter for F
where
    F: Fn(&mut Completions<'_>, &str) + Send + Sync,
{
    fn complete(&self, completions: &mut Completions<'_>, partial_word: &str) {
        self(completions, partial_word)
    }
}

/// An option belonging to a single command.
///
/// `name` is the canonical dash-less identifier (`"password"`); `aliases`
/// hold alternate spellings (`"p"`). How a spelling is rendered on the
/// command line (`--password`, `-p`) is decided by the matcher. Name and
/// aliases must be pairwise disjoint within the owning command, which
/// [`validate_command`](crate::validate_command) enforces.
///
/// # Examples
///
/// ```
/// use termctl_completion::OptionDef;
///
/// let opt = OptionDef::with_value("password")
///     .with_alias("p")
///     .with_description("Password for the remote instance");
/// assert!(opt.has_following_arg);
/// assert_eq!(opt.aliases, vec!["p"]);
/// ```
#[derive(Clone, Default)]
pub struct OptionDef {
    /// Canonical identifier, unique within the owning command.
    pub name: String,
    /// Alternate spellings, disjoint from all other names/aliases in the
    /// owning command.
    pub aliases: Vec<String>,
    /// Description shown next to the candidate.
    pub description: Option<String>,
    /// Whether this option consumes the next token as its value.
    pub has_following_arg: bool,
    /// Completer invoked for this option's value.
    pub completer: Option<Arc<dyn ArgCompleter>>,
}

impl OptionDef {
    /// Creates a standalone flag (no following value).
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Creates an option that consumes the next token as its value.
    pub fn with_value(name: &str) -> Self {
        Self {
            name: name.to_string(),
            has_following_arg: true,
            ..Default::default()
        }
    }

    /// Adds an alternate spelling.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Attaches a completer for this option's value.
    pub fn with_completer(mut self, completer: impl ArgCompleter + 'static) -> Self {
        self.completer = Some(Arc::new(completer));
        self
    }
}

impl fmt::Debug for OptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDef")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("has_following_arg", &self.has_following_arg)
            .field("has_completer", &self.completer.is_some())
            .finish()
    }
}

/// A node in the command tree.
///
/// Commands own their options and subcommands; both sequences keep
/// declaration order, which is also display order. The root is registered
/// once at process start and is read-only for the lifetime of every
/// completion request.
///
/// # Examples
///
/// ```
/// use termctl_completion::{Command, OptionDef};
///
/// let root = Command::new("termctl")
///     .with_option(OptionDef::with_value("to"))
///     .with_subcommand(Command::new("ls"))
///     .with_subcommand(Command::new("send-text"));
///
/// assert!(root.find_subcommand("ls").is_some());
/// assert!(root.find_subcommand("resize").is_none());
/// ```
#[derive(Clone, Default)]
pub struct Command {
    /// Command name, unique among siblings.
    pub name: String,
    /// Description shown when this command is offered as a candidate.
    pub description: Option<String>,
    /// Options in declaration order.
    pub options: Vec<OptionDef>,
    /// Subcommands in declaration order.
    pub subcommands: Vec<Command>,
    /// Group title used when listing subcommands.
    pub subcommands_title: String,
    /// Group title used when listing options.
    pub options_title: String,
    /// Completer for this command's bare positional arguments.
    pub completer: Option<Arc<dyn ArgCompleter>>,
    /// Positional-argument count after which option and subcommand matching
    /// stops for this command; remaining tokens are passthrough.
    pub stop_processing_at_arg: Option<usize>,
}

impl Command {
    /// Creates a command with default group titles.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subcommands_title: "Subcommands".to_string(),
            options_title: "Options".to_string(),
            ..Default::default()
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }

    /// Adds a subcommand.
    pub fn with_subcommand(mut self, subcommand: Command) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Sets the group title used when listing subcommands.
    pub fn with_subcommands_title(mut self, title: &str) -> Self {
        self.subcommands_title = title.to_string();
        self
    }

    /// Sets the group title used when listing options.
    pub fn with_options_title(mut self, title: &str) -> Self {
        self.options_title = title.to_string();
        self
    }

    /// Attaches a completer for bare positional arguments.
    pub fn with_completer(mut self, completer: impl ArgCompleter + 'static) -> Self {
        self.completer = Some(Arc::new(completer));
        self
    }

    /// Stops option/subcommand matching once `count` positional arguments
    /// have been consumed for this command.
    pub fn stop_processing_at_arg(mut self, count: usize) -> Self {
        self.stop_processing_at_arg = Some(count);
        self
    }

    /// Finds a direct subcommand by exact name.
    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|sub| sub.name == name)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("subcommands", &self.subcommands)
            .field("stop_processing_at_arg", &self.stop_processing_at_arg)
            .field("has_completer", &self.completer.is_some())
            .finish()
    }
}

/// A single completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Literal candidate text.
    pub word: String,
    /// Description shown alongside the candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A titled, flag-annotated bundle of candidates rendered uniformly by the
/// shell front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchGroup {
    /// Group heading.
    pub title: String,
    /// Suppress the shell's default trailing space after insertion; set when
    /// more typing is expected (e.g. completing a directory).
    pub no_trailing_space: bool,
    /// Candidates are filesystem paths; enables path-aware rendering.
    pub is_files: bool,
    /// Candidates in the order the producer emitted them.
    pub matches: Vec<Match>,
}

impl MatchGroup {
    /// Creates an empty group with default flags.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            no_trailing_space: false,
            is_files: false,
            matches: Vec::new(),
        }
    }

    /// Marks the group as expecting further typing after insertion.
    pub fn no_trailing_space(mut self) -> Self {
        self.no_trailing_space = true;
        self
    }

    /// Marks the candidates as filesystem paths.
    pub fn files(mut self) -> Self {
        self.is_files = true;
        self
    }

    /// Appends a candidate.
    pub fn push(&mut self, word: impl Into<String>, description: Option<String>) {
        self.matches.push(Match {
            word: word.into(),
            description,
        });
    }

    /// True when the group holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Result of one completion request.
///
/// Holds the produced [`MatchGroup`]s plus a non-owning back-reference to the
/// command the request resolved to, kept for diagnostics only. Created fresh
/// per request and discarded after the response is emitted; it never owns or
/// mutates the command tree.
#[derive(Debug, Default)]
pub struct Completions<'a> {
    /// Match groups in production order.
    pub groups: Vec<MatchGroup>,
    current_cmd: Option<&'a Command>,
}

impl<'a> Completions<'a> {
    /// Creates an empty accumulator with no resolved command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator recording the command a request resolved to.
    pub fn for_command(cmd: &'a Command) -> Self {
        Self {
            groups: Vec::new(),
            current_cmd: Some(cmd),
        }
    }

    /// The command resolved for this request, for diagnostics.
    pub fn current_cmd(&self) -> Option<&'a Command> {
        self.current_cmd
    }

    /// Appends a group, dropping it when empty.
    pub fn add_group(&mut self, group: MatchGroup) {
        if !group.is_empty() {
            self.groups.push(group);
        }
    }

    /// Total candidate count across all groups.
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|group| group.matches.len()).sum()
    }
}
