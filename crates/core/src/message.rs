use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identity tag attached to every committed message
///
/// There is no real identity system behind these tags: the session simulates a
/// two-party conversation by alternating between them on every commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    #[default]
    Local,
    Remote,
}

impl Author {
    pub const VALUES: &[Author] = &[Author::Local, Author::Remote];

    /// The other participant
    pub fn toggled(self) -> Self {
        match self {
            Author::Local => Author::Remote,
            Author::Remote => Author::Local,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Author::Local => "local",
            Author::Remote => "remote",
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Author::Local)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Author {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Author::Local),
            "remote" => Ok(Author::Remote),
            _ => Err(crate::Error::Config(
                crate::config::ConfigError::InvalidAuthor(s.to_string()).to_string(),
            )),
        }
    }
}

/// A committed chat message
///
/// Fields are private; a message never changes after the store creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    author: Author,
    sent_at: DateTime<Local>,
}

impl Message {
    pub(crate) fn new(text: impl Into<String>, author: Author) -> Self {
        Self { text: text.into(), author, sent_at: Local::now() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn sent_at(&self) -> DateTime<Local> {
        self.sent_at
    }

    /// Wall-clock send time as `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.sent_at.format("%H:%M:%S").to_string()
    }

    /// Number of lines the text spans, counting embedded newlines
    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_toggle() {
        assert_eq!(Author::Local.toggled(), Author::Remote);
        assert_eq!(Author::Remote.toggled(), Author::Local);
        assert_eq!(Author::Local.toggled().toggled(), Author::Local);
    }

    #[test]
    fn test_author_default_is_local() {
        assert_eq!(Author::default(), Author::Local);
    }

    #[test]
    fn test_author_from_str() {
        assert_eq!("local".parse::<Author>().unwrap(), Author::Local);
        assert_eq!("REMOTE".parse::<Author>().unwrap(), Author::Remote);
        assert!("guest".parse::<Author>().is_err());
    }

    #[test]
    fn test_author_display() {
        assert_eq!(Author::Local.to_string(), "local");
        assert_eq!(Author::Remote.to_string(), "remote");
    }

    #[test]
    fn test_message_accessors() {
        let message = Message::new("Hello", Author::Remote);
        assert_eq!(message.text(), "Hello");
        assert_eq!(message.author(), Author::Remote);
        assert_eq!(message.time_label().len(), 8);
    }

    #[test]
    fn test_message_line_count() {
        assert_eq!(Message::new("one", Author::Local).line_count(), 1);
        assert_eq!(Message::new("one\ntwo\nthree", Author::Local).line_count(), 3);
    }
}
