//! Open/closed state of a create-or-edit dialog.

/// Which dialog, if any, is showing.
///
/// One value replaces an "is open" flag plus an "edit target" slot, so a
/// closed dialog can never still hold a target.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Closed,
    CreatingNew,
    Editing(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Editing(target) => Some(target),
            _ => None,
        }
    }

    pub fn open_create(&mut self) {
        *self = ModalState::CreatingNew;
    }

    pub fn open_edit(&mut self, target: T) {
        *self = ModalState::Editing(target);
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut modal: ModalState<u32> = ModalState::default();
        assert!(!modal.is_open());

        modal.open_edit(7);
        assert!(modal.is_open());
        assert_eq!(modal.editing(), Some(&7));

        modal.open_create();
        assert_eq!(modal, ModalState::CreatingNew);
        assert_eq!(modal.editing(), None);

        modal.close();
        assert_eq!(modal, ModalState::Closed);
    }
}
