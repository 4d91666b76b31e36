// src/table/filter.rs
//
// Filter groups. Each group holds one baseline option (value "all") that
// lets every row through, followed by the page's own options.

/// Value of the baseline option every group starts with.
pub const ALL: &str = "all";

pub struct FilterOption<T> {
    pub label: String,
    pub value: String,
    filter: Box<dyn Fn(&T) -> bool>,
}

impl<T> FilterOption<T> {
    pub fn new<L, V, F>(label: L, value: V, filter: F) -> Self
    where
        L: Into<String>,
        V: Into<String>,
        F: Fn(&T) -> bool + 'static,
    {
        Self { label: label.into(), value: value.into(), filter: Box::new(filter) }
    }

    /// The pass-everything option.
    pub fn all<L: Into<String>>(label: L) -> Self {
        Self::new(label, ALL, |_| true)
    }

    #[inline]
    pub fn matches(&self, row: &T) -> bool {
        (self.filter)(row)
    }
}

pub struct FilterGroup<T> {
    pub name: String,
    options: Vec<FilterOption<T>>,
}

impl<T> FilterGroup<T> {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), options: vec![FilterOption::all("All")] }
    }

    /// Relabel the baseline option.
    pub fn all_label<S: Into<String>>(mut self, label: S) -> Self {
        self.options[0].label = label.into();
        self
    }

    /// Append an option. Values must be unique within the group; a
    /// duplicate (including "all") is ignored.
    pub fn option<L, V, F>(mut self, label: L, value: V, filter: F) -> Self
    where
        L: Into<String>,
        V: Into<String>,
        F: Fn(&T) -> bool + 'static,
    {
        let opt = FilterOption::new(label, value, filter);
        if self.position(&opt.value).is_none() {
            self.options.push(opt);
        } else {
            logd!("Table: duplicate filter option {:?} in group {:?} ignored", opt.value, self.name);
        }
        self
    }

    pub fn options(&self) -> &[FilterOption<T>] {
        &self.options
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub(crate) fn get(&self, ix: usize) -> &FilterOption<T> {
        // ix always comes from `position` or is 0 (baseline), which always exists
        &self.options[ix.min(self.options.len() - 1)]
    }
}
