//! Reducer-style page updates.

mod action;
mod reducer;

#[cfg(test)]
mod tests;

pub use action::{Action, Delta};

use super::Page;

impl Page {
    pub fn dispatch(&mut self, action: Action) -> Vec<Delta> {
        log::debug!("dispatch {:?}", action);
        reducer::reduce(self, action)
    }
}
