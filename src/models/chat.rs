//! Chat message model.

/// A message the user has sent, attributed to the agent selected at the
/// time of sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEntry {
    pub agent: String,
    pub text: String,
}

impl ChatEntry {
    /// Build an entry from raw composer input.
    ///
    /// Input is trimmed; whitespace-only input yields `None` and nothing
    /// is sent.
    pub fn from_input(agent: &str, input: &str) -> Option<Self> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            agent: agent.to_string(),
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_trimmed() {
        let entry = ChatEntry::from_input("Ask", "  hello there  ").unwrap();
        assert_eq!(entry.text, "hello there");
        assert_eq!(entry.agent, "Ask");
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(ChatEntry::from_input("Ask", ""), None);
        assert_eq!(ChatEntry::from_input("Ask", "   \t  "), None);
    }
}
