//! Line-oriented interactive session.

use anyhow::Result;
use larder_core::{Session, TextGenerationProvider, EXAMPLE_INGREDIENTS};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::view::{render_ingredients, render_state};

const HELP: &str = "\
Commands:
  add <name>     Add an ingredient
  remove <n>     Remove ingredient number n
  list           Show your ingredients
  examples       Show example ingredients
  generate       Ask for recipe ideas
  recipes        Show the last result again
  reset          Clear recipes and errors
  help           Show this help
  quit           Exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Add(String),
    /// 1-based position as shown by `list`.
    Remove(usize),
    List,
    Examples,
    Generate,
    Recipes,
    Reset,
    Help,
    Quit,
    Invalid(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" if !rest.is_empty() => Command::Add(rest.to_string()),
        "add" | "a" => Command::Invalid("usage: add <name>".to_string()),
        "remove" | "rm" => match rest.parse::<usize>() {
            Ok(n) if n > 0 => Command::Remove(n),
            _ => Command::Invalid("usage: remove <n> (see `list`)".to_string()),
        },
        "list" | "ls" => Command::List,
        "examples" => Command::Examples,
        "generate" | "gen" | "g" => Command::Generate,
        "recipes" => Command::Recipes,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command `{other}`, try `help`")),
    };
    Some(command)
}

/// Apply one command. Returns false when the session should end.
pub async fn execute<W: Write>(
    session: &mut Session,
    provider: &dyn TextGenerationProvider,
    command: Command,
    out: &mut W,
) -> Result<bool> {
    match command {
        Command::Add(name) => {
            // Blank and duplicate names are ignored silently.
            session.add_ingredient(&name);
            writeln!(out, "{}", render_ingredients(session.ingredients()))?;
        }
        Command::Remove(n) => {
            session.remove_ingredient(n - 1);
            writeln!(out, "{}", render_ingredients(session.ingredients()))?;
        }
        Command::List => writeln!(out, "{}", render_ingredients(session.ingredients()))?,
        Command::Examples => writeln!(out, "Examples: {}", EXAMPLE_INGREDIENTS.join(", "))?,
        Command::Generate => {
            if session.can_generate() {
                writeln!(out, "Generating...")?;
                out.flush()?;
            }
            let state = session.generate(provider).await;
            writeln!(out, "{}", render_state(state, true))?;
        }
        Command::Recipes => {
            let has_ingredients = !session.ingredients().is_empty();
            writeln!(out, "{}", render_state(session.state(), has_ingredients))?;
        }
        Command::Reset => session.reset(),
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
        Command::Invalid(message) => writeln!(out, "{message}")?,
    }
    Ok(true)
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run(mut session: Session, provider: &dyn TextGenerationProvider) -> Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "Recipe Generator ({})", provider.model_name())?;
    writeln!(stdout, "{}", render_ingredients(session.ingredients()))?;
    writeln!(stdout, "Type `help` for commands.")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        if !execute(&mut session, provider, command, &mut stdout).await? {
            break;
        }
    }

    Ok(())
}
