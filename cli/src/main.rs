use clap::{Args, Parser, Subcommand};
use termctl_completion::{Command as CommandNode, complete, render_spelling, validate_command};

mod tree;

#[derive(Debug, Parser)]
#[command(name = "termctl-complete")]
#[command(about = "Shell completion backend for the termctl remote-control tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Produce completions for a partially-typed termctl command line.
    Complete(CompleteArgs),
    /// Print the registered command tree.
    Tree,
}

#[derive(Debug, Args)]
struct CompleteArgs {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Raw words of the command line being completed, the word under the
    /// cursor last (pass an empty word when completing a new one).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Complete(args) => run_complete(args),
        Command::Tree => run_tree(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Returns the registered tree after checking its structural invariants.
fn checked_tree() -> Result<&'static CommandNode, String> {
    let root = tree::command_tree();
    let errors = validate_command(root);
    if errors.is_empty() {
        Ok(root)
    } else {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(format!("invalid command tree: {}", messages.join("; ")))
    }
}

fn run_complete(args: CompleteArgs) -> Result<(), String> {
    let root = checked_tree()?;
    let completions = complete(root, &args.words);

    let raw = if args.pretty {
        serde_json::to_string_pretty(&completions.groups)
    } else {
        serde_json::to_string(&completions.groups)
    }
    .map_err(|err| format!("failed to serialize completions: {err}"))?;
    println!("{raw}");
    Ok(())
}

fn run_tree() -> Result<(), String> {
    let root = checked_tree()?;
    print_command(root, 0);
    Ok(())
}

fn print_command(cmd: &CommandNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match &cmd.description {
        Some(desc) => println!("{indent}{}  {desc}", cmd.name),
        None => println!("{indent}{}", cmd.name),
    }
    for option in &cmd.options {
        let mut spellings = vec![render_spelling(&option.name)];
        spellings.extend(option.aliases.iter().map(|alias| render_spelling(alias)));
        let desc = option.description.as_deref().unwrap_or("");
        println!("{indent}  {}  {desc}", spellings.join(", "));
    }
    for sub in &cmd.subcommands {
        print_command(sub, depth + 1);
    }
}
