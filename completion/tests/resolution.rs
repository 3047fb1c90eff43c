use termctl_completion::{
    Choices, Command, Completions, MatchGroup, OptionDef, ResolvedState, complete, resolve,
    validate_command,
};

fn words(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

/// A tree shaped like the real termctl command set, small enough to reason
/// about in assertions.
fn fixture_tree() -> Command {
    Command::new("termctl")
        .with_subcommands_title("Commands")
        .with_options_title("Global options")
        .with_option(
            OptionDef::with_value("to").with_description("Address of the instance to control"),
        )
        .with_option(
            OptionDef::with_value("password")
                .with_alias("p")
                .with_description("Password for the remote instance"),
        )
        .with_option(
            OptionDef::with_value("use-password")
                .with_description("When to use the supplied password")
                .with_completer(Choices::new("Password use", ["if-available", "always", "never"])),
        )
        .with_subcommand(
            Command::new("send-text")
                .with_description("Send arbitrary text")
                .with_option(OptionDef::with_value("match").with_alias("m"))
                .with_option(OptionDef::flag("stdin")),
        )
        .with_subcommand(Command::new("send-key").with_description("Send key presses"))
        .with_subcommand(
            Command::new("goto-layout")
                .with_description("Switch the window layout")
                .with_completer(Choices::new("Layouts", ["stack", "splits", "tall", "grid"])),
        )
        .with_subcommand(
            Command::new("launch")
                .with_description("Run a program in a new window")
                .with_option(OptionDef::flag("hold"))
                .with_completer(Choices::new("Programs", ["vim", "htop"]))
                .stop_processing_at_arg(1),
        )
}

#[test]
fn test_fixture_tree_is_structurally_valid() {
    assert!(validate_command(&fixture_tree()).is_empty());
}

#[test]
fn test_partial_subcommand_yields_single_candidate() {
    let root = fixture_tree();
    let completions = complete(&root, &words(&["send-t"]));

    assert_eq!(completions.groups.len(), 1);
    let group = &completions.groups[0];
    assert_eq!(group.title, "Commands");
    assert_eq!(group.matches.len(), 1);
    assert_eq!(group.matches[0].word, "send-text");
    assert_eq!(group.matches[0].description.as_deref(), Some("Send arbitrary text"));
}

#[test]
fn test_option_value_dispatches_to_option_completer() {
    let root = fixture_tree();
    // termctl --use-password <TAB>: the option's completer answers, not the
    // sibling option listing.
    let completions = complete(&root, &words(&["--use-password", ""]));

    assert_eq!(completions.groups.len(), 1);
    let group = &completions.groups[0];
    assert_eq!(group.title, "Password use");
    let choices: Vec<&str> = group.matches.iter().map(|m| m.word.as_str()).collect();
    assert_eq!(choices, vec!["if-available", "always", "never"]);
}

#[test]
fn test_option_without_completer_yields_empty_result() {
    let root = fixture_tree();
    let completions = complete(&root, &words(&["--password", ""]));
    assert!(completions.groups.is_empty());
}

#[test]
fn test_option_listing_after_descent_uses_subcommand_options() {
    let root = fixture_tree();
    let completions = complete(&root, &words(&["send-text", "--"]));

    let group = &completions.groups[0];
    assert_eq!(group.title, "Options");
    let spellings: Vec<&str> = group.matches.iter().map(|m| m.word.as_str()).collect();
    // Long forms only; the short alias -m does not start with "--".
    assert_eq!(spellings, vec!["--match", "--stdin"]);
}

#[test]
fn test_stop_boundary_sends_option_lookalikes_to_command_completer() {
    let root = fixture_tree();
    // launch stops processing after its first positional, so the second
    // token goes to the command's own completer even though it looks like a
    // flag.
    let completions = complete(&root, &words(&["launch", "firstarg", "--looks-like-flag"]));
    assert!(completions.groups.is_empty());

    let completions = complete(&root, &words(&["launch", "firstarg", "v"]));
    assert_eq!(completions.groups[0].title, "Programs");
    assert_eq!(completions.groups[0].matches[0].word, "vim");
}

#[test]
fn test_before_the_boundary_launch_options_complete_normally() {
    let root = fixture_tree();
    let completions = complete(&root, &words(&["launch", "--h"]));
    assert_eq!(completions.groups[0].matches[0].word, "--hold");
}

#[test]
fn test_boundary_resolution_state_is_passthrough() {
    let root = fixture_tree();
    let w = words(&["launch", "firstarg", "--looks-like-flag"]);
    let resolution = resolve(&root, &w);
    assert_eq!(resolution.cmd.name, "launch");
    assert!(matches!(resolution.state, ResolvedState::Passthrough));
}

#[test]
fn test_bare_positional_on_leaf_uses_command_completer() {
    let root = fixture_tree();
    let completions = complete(&root, &words(&["goto-layout", "s"]));

    let group = &completions.groups[0];
    assert_eq!(group.title, "Layouts");
    let layouts: Vec<&str> = group.matches.iter().map(|m| m.word.as_str()).collect();
    assert_eq!(layouts, vec!["stack", "splits"]);
}

#[test]
fn test_global_flag_then_subcommand_completion() {
    let root = fixture_tree();
    // A consumed option value must not disturb subcommand matching.
    let completions = complete(&root, &words(&["--to", "unix:/tmp/termctl", "goto-l"]));
    assert_eq!(completions.groups[0].matches[0].word, "goto-layout");
}

#[test]
fn test_complete_twice_is_identical() {
    let root = fixture_tree();
    for parts in [
        vec!["send-t"],
        vec!["--use-password", "a"],
        vec!["send-text", "-"],
        vec!["launch", "firstarg", "x"],
    ] {
        let w = words(&parts);
        let first = complete(&root, &w);
        let second = complete(&root, &w);
        assert_eq!(first.groups, second.groups, "input {parts:?}");
    }
}

#[test]
fn test_callback_appends_without_touching_prior_groups() {
    // A completer only appends; groups added before it stay untouched.
    let mut existing = MatchGroup::new("Existing");
    existing.push("kept", None);
    let mut completions = Completions::new();
    completions.add_group(existing.clone());

    let choices = Choices::new("Added", ["one"]);
    termctl_completion::ArgCompleter::complete(&choices, &mut completions, "");

    assert_eq!(completions.groups.len(), 2);
    assert_eq!(completions.groups[0], existing);
    assert_eq!(completions.groups[1].title, "Added");
}
