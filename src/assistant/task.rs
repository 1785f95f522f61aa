use std::fmt;

/// The two jobs the assistant can run on a piece of email text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTask {
    Summarize,
    Draft,
}

impl EmailTask {
    /// JSON field the request body must carry.
    pub fn input_field(&self) -> &'static str {
        match self {
            Self::Summarize => "email_content",
            Self::Draft => "summary",
        }
    }

    pub fn build_prompt(&self, input: &str) -> String {
        match self {
            Self::Summarize => format!(
                "Summarize the following email content:\n\n{}\n\nSummary:",
                input
            ),
            Self::Draft => format!(
                "{} #### Draft a response email based on the contents of the thread.",
                input
            ),
        }
    }

    pub fn missing_input_message(&self) -> &'static str {
        match self {
            Self::Summarize => "No email content provided",
            Self::Draft => "No summary provided",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Summarize => "An error occurred while summarizing the email",
            Self::Draft => "An error occurred while drafting the response",
        }
    }
}

impl fmt::Display for EmailTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summarize => write!(f, "summarize"),
            Self::Draft => write!(f, "draft"),
        }
    }
}
