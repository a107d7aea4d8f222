use crate::shell::command::Command;
use crate::shell::error::ShellError;
use log::debug;

/// Default longest argument accepted by [`parse`], in bytes.
pub const MAX_ARG_LEN: usize = 4096;

/// Splits `line` on runs of spaces. Nothing else is special: tabs, quotes
/// and backslashes end up in the tokens verbatim. Tokens longer than
/// `max_arg_len` bytes are rejected, never truncated.
pub fn parse(line: &str, max_arg_len: usize) -> Result<Command, ShellError> {
    let mut argv = Vec::new();

    for (index, token) in line.split(' ').filter(|t| !t.is_empty()).enumerate() {
        if token.len() > max_arg_len {
            return Err(ShellError::ArgumentTooLong {
                index,
                len: token.len(),
                max: max_arg_len,
            });
        }
        argv.push(token.to_string());
    }

    let cmd = Command::try_from(argv)?;
    debug!("parsed {:?} into {} argument(s)", line, cmd.argc());
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_not_delimiters() {
        let cmd = parse("echo\ta b", MAX_ARG_LEN).unwrap();
        assert_eq!(cmd.argv(), ["echo\ta", "b"]);
    }

    #[test]
    fn quotes_are_literal() {
        let cmd = parse("echo \"hello world\" 'x'", MAX_ARG_LEN).unwrap();
        assert_eq!(cmd.argv(), ["echo", "\"hello", "world\"", "'x'"]);
    }

    #[test]
    fn token_at_limit_is_accepted() {
        let line = format!("echo {}", "a".repeat(8));
        let cmd = parse(&line, 8).unwrap();
        assert_eq!(cmd.args()[0].len(), 8);
    }

    #[test]
    fn token_over_limit_is_rejected() {
        let line = format!("echo {}", "a".repeat(9));
        match parse(&line, 8) {
            Err(ShellError::ArgumentTooLong { index, len, max }) => {
                assert_eq!((index, len, max), (1, 9, 8));
            }
            other => panic!("expected ArgumentTooLong, got {:?}", other),
        }
    }
}
