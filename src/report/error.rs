use std::fmt;

#[derive(Debug)]
pub enum ReportError {
    /// A record failed shape validation at assembly time. Assembly aborts;
    /// no partially built document is ever returned.
    InputShape {
        index: usize,
        title: String,
        reason: String,
    },

    /// A parsed-data value could not be serialized (nesting past the
    /// recursion limit). Scoped to one command execution; the renderer
    /// substitutes a placeholder for that block.
    Serialization {
        device_name: String,
        reason: String,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::InputShape { index, title, reason } => {
                write!(f, "Invalid record #{} ('{}'): {}", index, title, reason)
            }
            ReportError::Serialization { device_name, reason } => {
                write!(f, "Cannot serialize parsed data from '{}': {}", device_name, reason)
            }
        }
    }
}

impl std::error::Error for ReportError {}
