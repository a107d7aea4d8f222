use crate::shell::error::ShellError;

/// One parsed command line: the verb followed by its arguments.
///
/// The argument vector is never empty. It owns every string it holds and is
/// released exactly once when dropped. The resolver is the only code that
/// rewrites it, replacing the verb with the path it resolved to.
#[derive(Debug, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
}

impl Command {
    #[cfg(test)]
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            argv: vec![verb.into()],
        }
    }

    #[cfg(test)]
    pub fn with_args<I, S>(verb: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = vec![verb.into()];
        argv.extend(args.into_iter().map(Into::into));
        Self { argv }
    }

    pub fn verb(&self) -> &str {
        &self.argv[0]
    }

    /// Trailing arguments, verb excluded.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// The full argument vector as handed to the new process image.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    pub(crate) fn set_verb(&mut self, verb: String) {
        self.argv[0] = verb;
    }
}

impl TryFrom<Vec<String>> for Command {
    type Error = ShellError;

    fn try_from(argv: Vec<String>) -> Result<Self, Self::Error> {
        if argv.is_empty() {
            return Err(ShellError::EmptyInput);
        }
        Ok(Self { argv })
    }
}
