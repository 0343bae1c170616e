// Typed notification events produced by the IDE-side event extractor
//
// Reference fields are positional on the wire, so these types pin the order
// the companion listener expects instead of trusting call sites to get a
// bare string slice right.

use serde::{Deserialize, Serialize};

/// Session-start notification, sent when the debugger attaches.
pub const SESSION_START_EVENT: &str = "OnGIPSStart";

/// Unhandled-exception notification, sent when the debugger breaks on an
/// exception nothing in the program caught.
pub const EXCEPTION_EVENT: &str = "OnExceptionOccured";

/// A named event plus its ordered reference values.
pub trait NotificationEvent {
    fn event_name(&self) -> &'static str;
    fn references(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStart {
    pub product: String,
    pub version: String,
}

impl NotificationEvent for SessionStart {
    fn event_name(&self) -> &'static str {
        SESSION_START_EVENT
    }

    fn references(&self) -> Vec<String> {
        vec![self.product.clone(), self.version.clone()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnhandledException {
    pub language: String,
    pub exception_type: String,
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl NotificationEvent for UnhandledException {
    fn event_name(&self) -> &'static str {
        EXCEPTION_EVENT
    }

    fn references(&self) -> Vec<String> {
        vec![
            self.language.clone(),
            self.exception_type.clone(),
            self.file.clone(),
            self.line.to_string(),
            self.message.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_reference_order() {
        let event = UnhandledException {
            language: "C#".to_string(),
            exception_type: "System.NullReferenceException".to_string(),
            file: "Program.cs".to_string(),
            line: 42,
            message: "Object reference not set to an instance of an object.".to_string(),
        };

        assert_eq!(event.event_name(), "OnExceptionOccured");
        assert_eq!(
            event.references(),
            [
                "C#",
                "System.NullReferenceException",
                "Program.cs",
                "42",
                "Object reference not set to an instance of an object.",
            ]
        );
    }

    #[test]
    fn test_session_start_reference_order() {
        let event = SessionStart {
            product: "GIPS.NET".to_string(),
            version: "0.1".to_string(),
        };

        assert_eq!(event.event_name(), "OnGIPSStart");
        assert_eq!(event.references(), ["GIPS.NET", "0.1"]);
    }
}
