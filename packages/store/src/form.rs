//! Dialog state machine shared by the create-and-edit forms.

/// State of a single editable form: closed, creating a new record, or
/// editing an existing one (identified by id).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(u64),
}

impl FormState {
    /// "New" action: open the form empty.
    pub fn open_new(&mut self) {
        *self = FormState::Creating;
    }

    /// "Edit" action: open the form pre-filled for `id`.
    pub fn open_edit(&mut self, id: u64) {
        *self = FormState::Editing(id);
    }

    /// Cancel or successful submit. A failed submit does not call this;
    /// the form stays open with an inline error.
    pub fn close(&mut self) {
        *self = FormState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// The id being edited, if in the editing state.
    pub fn editing_id(&self) -> Option<u64> {
        match self {
            FormState::Editing(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut form = FormState::default();
        assert!(!form.is_open());

        form.open_new();
        assert_eq!(form, FormState::Creating);
        assert!(form.is_open());
        assert_eq!(form.editing_id(), None);

        form.close();
        assert_eq!(form, FormState::Closed);

        form.open_edit(7);
        assert_eq!(form, FormState::Editing(7));
        assert_eq!(form.editing_id(), Some(7));

        form.close();
        assert!(!form.is_open());
    }
}
