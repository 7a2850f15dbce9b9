use crate::examples::EXAMPLES;

/// What a line of user input asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    EditUrl(String),
    EditQuery(String),
    /// Zero-based index into `examples::EXAMPLES`.
    ChooseExample(usize),
    Submit,
    CheckHealth,
    Show,
    Help,
    Quit,
}

/// Parses one input line. The error is a usage hint for the user.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };

    match keyword {
        "url" => {
            if rest.is_empty() {
                Err("Usage: url <address>".to_string())
            } else {
                Ok(Command::EditUrl(rest.to_string()))
            }
        }
        "query" => {
            if rest.is_empty() {
                Err("Usage: query <question>".to_string())
            } else {
                Ok(Command::EditQuery(rest.to_string()))
            }
        }
        "example" => parse_example_index(rest),
        "submit" => Ok(Command::Submit),
        "health" => Ok(Command::CheckHealth),
        "show" => Ok(Command::Show),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}'. Type 'help' for commands.")),
    }
}

fn parse_example_index(rest: &str) -> Result<Command, String> {
    let usage = format!("Usage: example <1-{}>", EXAMPLES.len());
    let number: usize = rest.parse().map_err(|_| usage.clone())?;
    if number == 0 || number > EXAMPLES.len() {
        return Err(usage);
    }
    Ok(Command::ChooseExample(number - 1))
}

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        "Commands:".to_string(),
        "  url <address>      set the target URL".to_string(),
        "  query <question>   set the natural-language query".to_string(),
        "  example <n>        fill the form from a preset:".to_string(),
    ];
    for (index, preset) in EXAMPLES.iter().enumerate() {
        lines.push(format!("      {} - {} ({})", index + 1, preset.label, preset.url));
    }
    lines.extend([
        "  submit             send the form to the analysis backend".to_string(),
        "  health             check backend reachability".to_string(),
        "  show               print the current form and result".to_string(),
        "  quit               leave".to_string(),
    ]);
    lines
}
