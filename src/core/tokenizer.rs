use thiserror::Error;

/// Hard cap on one inbound command line, in bytes. Lines at or above this
/// are rejected by the dispatcher before tokenization starts.
pub const MAX_COMMAND_LENGTH: usize = 1372;

/// Maximum number of arguments per command, command name included.
pub const MAX_NUM_ARGS: usize = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("empty command line")]
    Empty,
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("too many arguments (max {MAX_NUM_ARGS})")]
    TooManyArguments,
}

/// Ordered argument list produced by [`tokenize`]. Element 0 is the command
/// name; capacity is fixed at [`MAX_NUM_ARGS`] and pushing past it is an
/// explicit error, never a silent overflow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentList {
    args: Vec<String>,
}

impl ArgumentList {
    pub fn new() -> Self {
        Self {
            args: Vec::with_capacity(MAX_NUM_ARGS),
        }
    }

    pub fn push(&mut self, arg: String) -> Result<(), TokenizeError> {
        if self.is_full() {
            return Err(TokenizeError::TooManyArguments);
        }
        self.args.push(arg);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.args.len() >= MAX_NUM_ARGS
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Number of arguments parsed, command name included.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// The command name (element 0).
    pub fn command(&self) -> &str {
        &self.args[0]
    }

    /// The arguments after the command name.
    pub fn args(&self) -> &[String] {
        &self.args[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}

/// Splits one input line into arguments. Unquoted spaces separate tokens; a
/// token starting with a double quote runs to the matching close quote and is
/// stored without the quotes. Tokenization stops once [`MAX_NUM_ARGS`]
/// arguments have been collected; trailing text is dropped.
///
/// Pure function: no side effects, deterministic over its input.
pub fn tokenize(input: &str) -> Result<ArgumentList, TokenizeError> {
    let mut args = ArgumentList::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|&c| c == ' ').is_some() {}

        if chars.peek().is_none() || args.is_full() {
            break;
        }

        let token = if chars.next_if(|&c| c == '"').is_some() {
            let mut t = String::new();
            loop {
                match chars.next() {
                    Some('"') => break t,
                    Some(c) => t.push(c),
                    None => return Err(TokenizeError::UnterminatedQuote),
                }
            }
        } else {
            let mut t = String::new();
            while let Some(c) = chars.next_if(|&c| c != ' ') {
                t.push(c);
            }
            t
        };

        args.push(token)?;
    }

    if args.is_empty() {
        return Err(TokenizeError::Empty);
    }

    Ok(args)
}
