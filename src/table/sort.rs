// src/table/sort.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Active sort column and direction. Both are `None` when unsorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn is_active(&self) -> bool {
        self.column.is_some() && self.direction.is_some()
    }

    /// Next state after a header click on `column`:
    /// none → asc → desc → none on the same column, asc on a new one.
    pub fn toggled(self, column: usize) -> Self {
        use SortDirection::*;
        match (self.column, self.direction) {
            (Some(c), Some(Asc)) if c == column => Self { column: Some(c), direction: Some(Desc) },
            (Some(c), Some(Desc)) if c == column => Self::default(),
            _ => Self { column: Some(column), direction: Some(Asc) },
        }
    }

    /// Direction shown on `column`'s header, if it is the sorted one.
    pub fn indicator(&self, column: usize) -> Option<SortDirection> {
        if self.column == Some(column) { self.direction } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_back_to_unsorted() {
        let s = SortState::default().toggled(1).toggled(1).toggled(1);
        assert_eq!(s, SortState::default());
    }

    #[test]
    fn other_column_restarts_ascending() {
        let s = SortState::default().toggled(0).toggled(0).toggled(2);
        assert_eq!(s.column, Some(2));
        assert_eq!(s.direction, Some(SortDirection::Asc));
        assert_eq!(s.indicator(0), None);
    }
}
