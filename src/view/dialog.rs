//! Generic dialog rendering for text front-ends

use std::fmt;

use crate::model::{DialogKind, DialogState};

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.options.kind {
            DialogKind::Confirm => "?",
            DialogKind::Warning => "!",
        };
        writeln!(f, "[{}] {}", marker, self.options.label)?;

        if self.options.wants_input {
            if self.input.is_empty() {
                let placeholder = self.options.placeholder.as_deref().unwrap_or("");
                writeln!(f, "    > {}", placeholder)?;
            } else {
                writeln!(f, "    > {}", self.input)?;
            }
        }

        match &self.options.cancel {
            Some(cancel) => writeln!(f, "    [{}] [{}]", self.options.ok, cancel),
            None => writeln!(f, "    [{}]", self.options.ok),
        }
    }
}
