//! Stock [`ArgCompleter`] implementations.
//!
//! The engine's only extension point is the completer attached to an option
//! or command; these cover the two kinds the registered tree needs: fixed
//! choice lists and filesystem paths. Both are permissive: anything that
//! cannot be completed degrades to no matches, never to an error.

use std::fs;
use std::path::Path;

use crate::types::{ArgCompleter, Completions, MatchGroup};

/// Completes a value from a fixed list of choices, in declared order.
///
/// # Examples
///
/// ```
/// use termctl_completion::{ArgCompleter, Choices, Completions};
///
/// let choices = Choices::new("Password use", ["if-available", "always", "never"]);
/// let mut completions = Completions::new();
/// choices.complete(&mut completions, "a");
/// assert_eq!(completions.groups[0].matches[0].word, "always");
/// ```
#[derive(Debug, Clone)]
pub struct Choices {
    title: String,
    choices: Vec<String>,
}

impl Choices {
    /// Creates a choice completer with the given group title.
    pub fn new<I, S>(title: &str, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArgCompleter for Choices {
    fn complete(&self, completions: &mut Completions<'_>, partial_word: &str) {
        let mut group = MatchGroup::new(&self.title);
        for choice in &self.choices {
            if choice.starts_with(partial_word) {
                group.push(choice.clone(), None);
            }
        }
        completions.add_group(group);
    }
}

/// Completes filesystem paths relative to the partial word.
///
/// Directories get a trailing `/`; the produced group is flagged as holding
/// file paths and suppresses the trailing space, since a path is usually
/// typed further. Hidden entries are offered only when the partial word's
/// final segment already starts with a dot. Entries are sorted by name so
/// repeated requests over an unchanged filesystem produce identical output.
#[derive(Debug, Clone)]
pub struct FilePaths {
    title: String,
}

impl FilePaths {
    /// Creates a path completer with the given group title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl ArgCompleter for FilePaths {
    fn complete(&self, completions: &mut Completions<'_>, partial_word: &str) {
        let mut group = MatchGroup::new(&self.title).files().no_trailing_space();
        for word in path_candidates(partial_word) {
            group.push(word, None);
        }
        completions.add_group(group);
    }
}

fn path_candidates(partial_word: &str) -> Vec<String> {
    // Everything up to and including the last slash names the directory to
    // list; the rest is the prefix entries must match.
    let (dir_part, name_prefix) = match partial_word.rfind('/') {
        Some(idx) => (&partial_word[..=idx], &partial_word[idx + 1..]),
        None => ("", partial_word),
    };
    let listed = if dir_part.is_empty() {
        Path::new(".")
    } else {
        Path::new(dir_part)
    };

    let Ok(entries) = fs::read_dir(listed) else {
        return Vec::new();
    };

    let mut words = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.starts_with(name_prefix) {
            continue;
        }
        if name.starts_with('.') && !name_prefix.starts_with('.') {
            continue;
        }
        let mut word = format!("{dir_part}{name}");
        if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            word.push('/');
        }
        words.push(word);
    }
    words.sort();
    words
}
