// src/table/action.rs

/// A per-row button. `on_click` receives the row; everything it does is
/// up to the caller (the table changes no state of its own).
pub struct RowAction<T> {
    pub label: String,
    pub icon: &'static str,
    on_click: Box<dyn FnMut(&T)>,
    is_disabled: Option<Box<dyn Fn(&T) -> bool>>,
    show_if: Option<Box<dyn Fn(&T) -> bool>>,
}

impl<T> RowAction<T> {
    pub fn new<S, F>(label: S, icon: &'static str, on_click: F) -> Self
    where
        S: Into<String>,
        F: FnMut(&T) + 'static,
    {
        Self {
            label: label.into(),
            icon,
            on_click: Box::new(on_click),
            is_disabled: None,
            show_if: None,
        }
    }

    /// Rendered but greyed out (and rejected) when `f` is true.
    pub fn disabled_when<F: Fn(&T) -> bool + 'static>(mut self, f: F) -> Self {
        self.is_disabled = Some(Box::new(f));
        self
    }

    /// Not rendered at all for rows where `f` is false.
    pub fn shown_if<F: Fn(&T) -> bool + 'static>(mut self, f: F) -> Self {
        self.show_if = Some(Box::new(f));
        self
    }

    pub fn is_shown(&self, row: &T) -> bool {
        self.show_if.as_ref().map(|f| f(row)).unwrap_or(true)
    }

    pub fn is_disabled(&self, row: &T) -> bool {
        self.is_disabled.as_ref().map(|f| f(row)).unwrap_or(false)
    }

    pub(crate) fn fire(&mut self, row: &T) {
        (self.on_click)(row)
    }
}

/// Outcome of `TabularView::invoke_action`. Only `Invoked` ran the callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invocation {
    Invoked,
    Disabled,
    Hidden,
    UnknownRow,
    UnknownAction,
}
