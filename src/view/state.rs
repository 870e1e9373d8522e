use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

/// Shared, mutable view state that async loaders write into.
///
/// Loaders never hold a borrow across an await point: every transition is a
/// short synchronous `update`. Pages use a Dioxus [`Signal`], tests use `Rc<RefCell<_>>`.
pub trait StateCell<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.with_mut(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_peek(f)
    }
}
