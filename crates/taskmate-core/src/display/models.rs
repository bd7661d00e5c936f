//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, kept apart from the
//! model definitions. Task headings carry the status icon; category and due
//! date render as metadata lines the terminal renderer knows how to
//! colorize.

use std::fmt;

use crate::models::{Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        if !self.category.is_empty() {
            writeln!(f, "- Category: {}", self.category)?;
        }
        if let Some(due) = &self.due_date {
            writeln!(f, "- Due: {due}")?;
        }

        // Description as a paragraph
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
