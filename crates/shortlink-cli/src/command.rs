use std::str::FromStr;
use thiserror::Error;

pub const USAGE: &str = "\
commands:
  shorten <url> <hours>   create a short URL that expires after <hours>
  resolve <short-url>     look up the original URL and count a click
  stats <short-url>       show click count and expiration time
  total                   show how many URLs were created
  purge                   drop expired URLs
  help                    show this message
  quit                    leave";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid hours: {0}")]
    InvalidHours(String),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shorten { url: String, hours: i64 },
    Resolve(String),
    Stats(String),
    Total,
    Purge,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("shorten", [url, hours]) => {
                let hours = hours
                    .parse()
                    .map_err(|_| CommandError::InvalidHours((*hours).to_string()))?;
                Ok(Command::Shorten {
                    url: (*url).to_string(),
                    hours,
                })
            }
            ("shorten", _) => Err(CommandError::Usage("shorten <url> <hours>")),
            ("resolve", [link]) => Ok(Command::Resolve((*link).to_string())),
            ("resolve", _) => Err(CommandError::Usage("resolve <short-url>")),
            ("stats", [link]) => Ok(Command::Stats((*link).to_string())),
            ("stats", _) => Err(CommandError::Usage("stats <short-url>")),
            ("total", []) => Ok(Command::Total),
            ("purge", []) => Ok(Command::Purge),
            ("help", _) => Ok(Command::Help),
            ("quit" | "exit", _) => Ok(Command::Quit),
            ("total", _) => Err(CommandError::Usage("total")),
            ("purge", _) => Err(CommandError::Usage("purge")),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
