//! View domain - page-level state kept apart from any renderer

mod dialog;

pub use dialog::{ContributeForm, CreatePoolDialog};

use super::pool::PoolViewState;

/// Top-level page being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Goals,
}

/// Everything the page needs to render, owned in one place.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    view: View,
    pub pool: PoolViewState,
    pub create_dialog: CreatePoolDialog,
    pub contribute: ContributeForm,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn show_goals(&mut self) {
        self.view = View::Goals;
    }

    /// Leaving the goals page closes the creation dialog.
    pub fn show_landing(&mut self) {
        self.create_dialog.close();
        self.view = View::Landing;
    }
}
