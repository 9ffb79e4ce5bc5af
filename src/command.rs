use std::fmt;

/// The ordered argument list used to launch a program.
///
/// A single string converts into a one-element list, so `"true"` and `["true"]` name the
/// same invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CommandLine(Vec<String>);

impl CommandLine {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine(args.into_iter().map(Into::into).collect())
    }

    /// The executable, i.e. the first argument.
    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Everything after the executable.
    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl From<&str> for CommandLine {
    fn from(program: &str) -> Self {
        CommandLine(vec![program.to_string()])
    }
}

impl From<String> for CommandLine {
    fn from(program: String) -> Self {
        CommandLine(vec![program])
    }
}

impl From<&String> for CommandLine {
    fn from(program: &String) -> Self {
        CommandLine(vec![program.clone()])
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(args: Vec<String>) -> Self {
        CommandLine(args)
    }
}

impl From<Vec<&str>> for CommandLine {
    fn from(args: Vec<&str>) -> Self {
        CommandLine::new(args)
    }
}

impl From<&[&str]> for CommandLine {
    fn from(args: &[&str]) -> Self {
        CommandLine::new(args.iter().copied())
    }
}

impl From<&[String]> for CommandLine {
    fn from(args: &[String]) -> Self {
        CommandLine(args.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(args: [&str; N]) -> Self {
        CommandLine::new(args)
    }
}

#[cfg(test)]
mod test {
    use super::CommandLine;

    #[test]
    fn test_single_string_is_one_element_list() {
        assert_eq!(CommandLine::from("ls"), CommandLine::from(["ls"]));
        assert_eq!(CommandLine::from("ls".to_string()), CommandLine::from(vec!["ls"]));
    }

    #[test]
    fn test_program_and_args() {
        let cmd = CommandLine::from(["sh", "-c", "exit 0"]);
        assert_eq!(cmd.program(), Some("sh"));
        assert_eq!(cmd.args(), &["-c".to_string(), "exit 0".to_string()]);
        assert_eq!(cmd.to_string(), "sh -c exit 0");
    }

    #[test]
    fn test_empty() {
        let cmd = CommandLine::default();
        assert!(cmd.is_empty());
        assert_eq!(cmd.program(), None);
        assert!(cmd.args().is_empty());
    }
}
