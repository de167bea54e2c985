// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

/// A command to run through an [`Executor`](crate::traits::Executor).
///
/// The first argument is the program; environment entries are applied on top
/// of the executor's own environment. A timeout, when set, is enforced while
/// waiting on the resulting execution.
///
/// # Example
/// ```
/// use iqa_harness::executor::Command;
/// use std::time::Duration;
///
/// let cmd = Command::new(["echo", "hello world"])
///     .with_env("LANG", "C")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(cmd.program(), Some("echo"));
/// assert_eq!(cmd.to_shell_line(), "env LANG=C echo 'hello world'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    args: Vec<String>,
    env: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl Command {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            timeout: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.env
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Render the command as a single POSIX shell line, used when the command
    /// has to travel through a remote shell.
    pub fn to_shell_line(&self) -> String {
        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(self.args.len() + self.env.len() + 1);
        if !self.env.is_empty() {
            parts.push(Cow::Borrowed("env"));
            for (key, value) in &self.env {
                parts.push(Cow::Owned(format!("{}={}", key, shell_quote(value))));
            }
        }
        parts.extend(self.args.iter().map(|arg| shell_quote(arg)));
        parts.join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_line())
    }
}

/// Quote a single word for a POSIX shell. Words made only of safe characters
/// are returned untouched.
pub fn shell_quote(word: &str) -> Cow<'_, str> {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c));

    if safe {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_quote_table_driven() {
        let cases = vec![
            ("plain", "plain"),
            ("with space", "'with space'"),
            ("", "''"),
            ("it's", r"'it'\''s'"),
            ("--broker-url=amqp://10.0.0.5:5672", "--broker-url=amqp://10.0.0.5:5672"),
            ("$HOME", "'$HOME'"),
        ];

        for (input, expected) in cases {
            assert_eq!(shell_quote(input), expected, "quoting {:?}", input);
        }
    }

    #[test]
    fn test_builder_accumulates() {
        let cmd = Command::new(["systemctl"])
            .with_arg("start")
            .with_arg("qdrouterd")
            .with_timeout(Duration::from_secs(3));

        assert_eq!(cmd.args(), &["systemctl", "start", "qdrouterd"]);
        assert_eq!(cmd.timeout(), Some(Duration::from_secs(3)));
        assert!(cmd.envs().is_empty());
    }

    #[test]
    fn test_empty_command_has_no_program() {
        let cmd = Command::new(Vec::<String>::new());
        assert_eq!(cmd.program(), None);
        assert_eq!(cmd.to_shell_line(), "");
    }

    #[test]
    fn test_display_matches_shell_line() {
        let cmd = Command::new(["echo", "a b"]).with_env("X", "1 2");
        assert_eq!(cmd.to_string(), "env X='1 2' echo 'a b'");
    }
}
