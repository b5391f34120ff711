//! Command parsing for the interactive shell
//!
//! The shell is glue: it tokenizes a line, parses the numeric size, and
//! dispatches to the allocation table. All input validation lives here so
//! the core only ever sees well-formed requests (a non-positive or
//! unparsable size never reaches [`crate::AllocationTable::create`]).

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `put name,size` — create a file.
    Put { name: String, size: usize },
    /// `del name` — delete a file.
    Del { name: String },
    /// `bitmap` — print the allocation bitmap.
    Bitmap,
    /// `inodes` — print every file's chain.
    Inodes,
    /// `exit` — leave the shell.
    Exit,
}

/// Parse one input line into a [`Command`].
///
/// The command keyword is case-insensitive; arguments are taken verbatim.
/// Errors are the user-facing message to print.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let keyword = match tokens.next() {
        Some(word) => word.to_lowercase(),
        None => return Err("Illegal input!".to_string()),
    };

    match keyword.as_str() {
        "put" => {
            let arg = tokens
                .next()
                .ok_or_else(|| "put expects an argument: name,size".to_string())?;
            let (name, size) = arg
                .split_once(',')
                .ok_or_else(|| "put expects an argument: name,size".to_string())?;
            if name.is_empty() {
                return Err("put: file name must not be empty".to_string());
            }
            let size: usize = size
                .parse()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| format!("put: invalid size '{}'", size))?;
            Ok(Command::Put {
                name: name.to_string(),
                size,
            })
        }
        "del" => {
            let name = tokens
                .next()
                .ok_or_else(|| "del expects a file name".to_string())?;
            Ok(Command::Del {
                name: name.to_string(),
            })
        }
        "bitmap" => Ok(Command::Bitmap),
        "inodes" => Ok(Command::Inodes),
        "exit" => Ok(Command::Exit),
        _ => Err("Illegal input!".to_string()),
    }
}
