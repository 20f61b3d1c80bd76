//! Command-line argument parsing for the coffeu CLI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Log in; the password is prompted for when omitted
    Login {
        identifier: String,
        password: Option<String>,
    },
    /// List the catalog, optionally filtered by name
    Catalog { query: Option<String> },
    /// Show which screen the app would open on
    Status,
    /// Forget the remembered session
    Logout,
    /// Arguments that could not be understood
    Invalid(String),
}

/// Usage text printed for `Help` and `Invalid`.
pub const USAGE: &str = "\
Usage: coffeu <command>

Commands:
  login <identifier> [password]   Log in with a username or email
  catalog [query]                 List kitchens, filtered by name
  status                          Show the remembered session
  logout                          Forget the remembered session

Options:
  -V, --version                   Print version
  -h, --help                      Print this help";

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use coffeu::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["coffeu".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return CliCommand::Help;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match (command.as_str(), rest) {
        ("login", [identifier]) => CliCommand::Login {
            identifier: identifier.clone(),
            password: None,
        },
        ("login", [identifier, password]) => CliCommand::Login {
            identifier: identifier.clone(),
            password: Some(password.clone()),
        },
        ("login", _) => CliCommand::Invalid("login expects <identifier> [password]".to_string()),
        ("catalog", []) => CliCommand::Catalog { query: None },
        ("catalog", query) => CliCommand::Catalog {
            query: Some(query.join(" ")),
        },
        ("status", []) => CliCommand::Status,
        ("logout", []) => CliCommand::Logout,
        ("status", _) | ("logout", _) => {
            CliCommand::Invalid(format!("{} takes no arguments", command))
        }
        (other, _) => CliCommand::Invalid(format!("unknown command: {}", other)),
    }
}
