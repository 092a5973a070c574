use crate::error::DashboardError;
use crate::model::{Subject, SubjectIndex};

/// Whatever displays the panels for a resolved subject.
pub trait RenderTarget {
    fn render(&mut self, subject: &Subject) -> Result<(), DashboardError>;
    fn notify(&mut self, message: &str) -> Result<(), DashboardError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Unselected,
    Selected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Rendered(String),
    Unchanged,
}

/// Owns the current selection. State only moves after the panels for the new
/// subject have been rendered.
#[derive(Debug)]
pub struct SelectionController<'a> {
    index: &'a SubjectIndex,
    state: SelectionState,
}

impl<'a> SelectionController<'a> {
    pub fn new(index: &'a SubjectIndex) -> Self {
        SelectionController {
            index,
            state: SelectionState::Unselected,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            SelectionState::Unselected => None,
            SelectionState::Selected(name) => Some(name),
        }
    }

    /// `Unselected -> Selected(name)` with a full render. On an already
    /// selected controller this behaves like a user selection.
    pub fn initialize(
        &mut self,
        name: &str,
        target: &mut impl RenderTarget,
    ) -> Result<Transition, DashboardError> {
        if self.state != SelectionState::Unselected {
            return self.on_user_select(name, target);
        }
        self.select(name, target)
    }

    /// Change event from the selector. Re-selecting the current subject is a
    /// no-op; an unknown name leaves state and panels untouched.
    pub fn on_user_select(
        &mut self,
        name: &str,
        target: &mut impl RenderTarget,
    ) -> Result<Transition, DashboardError> {
        if self.selected() == Some(name) {
            tracing::debug!(subject = name, "selection unchanged; skipping render");
            return Ok(Transition::Unchanged);
        }
        self.select(name, target)
    }

    fn select(
        &mut self,
        name: &str,
        target: &mut impl RenderTarget,
    ) -> Result<Transition, DashboardError> {
        let Some(subject) = self.index.get(name) else {
            tracing::warn!(subject = name, "selected subject is not in the dataset");
            let err = DashboardError::UnknownSelection(name.to_string());
            target.notify(&err.to_string())?;
            return Err(err);
        };
        target.render(subject)?;
        tracing::info!(subject = name, "selection rendered");
        self.state = SelectionState::Selected(name.to_string());
        Ok(Transition::Rendered(name.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/selection.rs"]
mod tests;
