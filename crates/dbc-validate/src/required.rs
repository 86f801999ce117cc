/// Collects required-field messages in the order fields are checked.
#[derive(Debug, Default)]
pub(crate) struct Required {
    messages: Vec<String>,
}

impl Required {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A required string left empty. Whitespace counts as a value.
    pub(crate) fn field(mut self, name: &str, value: &str) -> Self {
        if value.is_empty() {
            self.messages.push(format!("{name} is required"));
        }
        self
    }

    /// A required list with no entries.
    pub(crate) fn list<T>(mut self, label: &str, items: &[T]) -> Self {
        if items.is_empty() {
            self.messages.push(format!("At least one {label} is required"));
        }
        self
    }

    pub(crate) fn finish(self) -> Vec<String> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_check_order() {
        let messages = Required::new()
            .field("object", "")
            .list("attribute", &[] as &[u8])
            .field("description", "")
            .field("service", "ASSET")
            .list("row", &[1])
            .finish();
        assert_eq!(
            messages,
            vec![
                "object is required",
                "At least one attribute is required",
                "description is required",
            ]
        );
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let messages = Required::new().field("object", " ").field("remarks", "\t").finish();
        assert!(messages.is_empty());
    }
}
