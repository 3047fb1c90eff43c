//! The registered termctl command tree.
//!
//! Built once on first access and read-only for the rest of the process;
//! every completion request traverses the same tree. The shape mirrors the
//! termctl remote-control command set: global connection/password options on
//! the root, one subcommand per remote operation.

use std::sync::OnceLock;

use termctl_completion::{Choices, Command, FilePaths, OptionDef};

static COMMAND_TREE: OnceLock<Command> = OnceLock::new();

/// The process-wide command tree.
pub fn command_tree() -> &'static Command {
    COMMAND_TREE.get_or_init(build_command_tree)
}

/// Option shared by every window-addressing subcommand.
fn match_option() -> OptionDef {
    OptionDef::with_value("match")
        .with_alias("m")
        .with_description("The window to act on, as a match expression")
}

fn build_command_tree() -> Command {
    Command::new("termctl")
        .with_description("Control termctl-enabled terminals remotely")
        .with_options_title("Global options")
        .with_subcommands_title("Commands")
        .with_option(
            OptionDef::with_value("to")
                .with_description("The address of the terminal instance to control"),
        )
        .with_option(
            OptionDef::with_value("password")
                .with_alias("p")
                .with_description("Password to authenticate remote control commands"),
        )
        .with_option(
            OptionDef::with_value("password-file")
                .with_description("Read the remote control password from this file")
                .with_completer(FilePaths::new("Password files")),
        )
        .with_option(
            OptionDef::with_value("password-env")
                .with_description("Name of the environment variable holding the password"),
        )
        .with_option(
            OptionDef::with_value("use-password")
                .with_description("Whether to always, never, or opportunistically use the password")
                .with_completer(Choices::new(
                    "Password use",
                    ["if-available", "always", "never"],
                )),
        )
        .with_option(OptionDef::flag("help").with_alias("h").with_description("Show help"))
        .with_subcommand(
            Command::new("ls")
                .with_description("List terminal windows and tabs")
                .with_option(match_option())
                .with_option(
                    OptionDef::flag("self")
                        .with_description("Only list the window this command is run in"),
                ),
        )
        .with_subcommand(
            Command::new("send-text")
                .with_description("Send arbitrary text to a window")
                .with_option(match_option())
                .with_option(
                    OptionDef::flag("stdin").with_description("Read the text from STDIN"),
                )
                .with_option(
                    OptionDef::with_value("from-file")
                        .with_description("Read the text from this file")
                        .with_completer(FilePaths::new("Text files")),
                ),
        )
        .with_subcommand(
            Command::new("send-key")
                .with_description("Send key presses to a window")
                .with_option(match_option()),
        )
        .with_subcommand(
            Command::new("get-text")
                .with_description("Fetch text from a window's screen")
                .with_option(match_option())
                .with_option(
                    OptionDef::with_value("extent")
                        .with_description("How much of the screen to fetch")
                        .with_completer(Choices::new("Extents", ["screen", "all", "selection"])),
                ),
        )
        .with_subcommand(
            Command::new("set-window-title")
                .with_description("Change the title of a window")
                .with_option(match_option())
                .with_option(
                    OptionDef::flag("temporary")
                        .with_description("Reset the title when the window next changes it"),
                ),
        )
        .with_subcommand(
            Command::new("set-font-size").with_description("Change the font size of the terminal"),
        )
        .with_subcommand(
            Command::new("goto-layout")
                .with_description("Switch the current tab to the given window layout")
                .with_completer(Choices::new(
                    "Layouts",
                    ["fat", "grid", "horizontal", "splits", "stack", "tall", "vertical"],
                )),
        )
        .with_subcommand(
            Command::new("focus-window")
                .with_description("Focus the given window")
                .with_option(match_option()),
        )
        .with_subcommand(
            Command::new("close-window")
                .with_description("Close the given window")
                .with_option(match_option())
                .with_option(
                    OptionDef::flag("self")
                        .with_description("Close the window this command is run in"),
                ),
        )
        .with_subcommand(
            Command::new("launch")
                .with_description("Run a program in a new window")
                .with_option(
                    OptionDef::with_value("type")
                        .with_description("Where to launch the program")
                        .with_completer(Choices::new(
                            "Window types",
                            ["window", "tab", "os-window", "overlay"],
                        )),
                )
                .with_option(
                    OptionDef::with_value("cwd")
                        .with_description("Working directory for the launched program")
                        .with_completer(FilePaths::new("Directories")),
                )
                .with_option(
                    OptionDef::flag("hold")
                        .with_description("Keep the window open after the program exits"),
                )
                // The first positional is the program; everything after it
                // belongs to that program, not to termctl.
                .with_completer(FilePaths::new("Program to run"))
                .stop_processing_at_arg(1),
        )
}
