use crate::models::FieldValue;

/// Local edit buffer of a single committing field.
///
/// Mirrors what the select and email inputs keep in component state: the
/// text currently typed and whether Save/Cancel are showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldEditor {
    committed: FieldValue,
    input: String,
    controls_visible: bool,
}

impl FieldEditor {
    #[must_use]
    pub fn new(committed: FieldValue) -> Self {
        let input = committed.display();
        Self {
            committed,
            input,
            controls_visible: false,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub const fn committed(&self) -> &FieldValue {
        &self.committed
    }

    /// Replaces the buffer. Controls show only while it differs from the
    /// committed value.
    pub fn change(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.controls_visible = self.input != self.committed.display();
    }

    /// Hides the controls and hands back the value to commit.
    pub fn submit(&mut self) -> String {
        self.controls_visible = false;
        self.input.clone()
    }

    pub fn cancel(&mut self) {
        self.input = self.committed.display();
        self.controls_visible = false;
    }

    /// Follows a new committed value. An open edit keeps its buffer.
    pub fn sync_committed(&mut self, committed: FieldValue) {
        if committed == self.committed {
            return;
        }
        if !self.controls_visible {
            self.input = committed.display();
        }
        self.committed = committed;
    }
}
