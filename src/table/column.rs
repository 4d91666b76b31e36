// src/table/column.rs

use super::value::{Cell, Record, Value};

/// How a column gets its content from a row.
///
/// `Field` reads a named field and sorts on that raw value. `Derived`
/// computes a display cell and sorts on the cell's own sort value.
pub enum ColumnAccessor<T> {
    Field(&'static str),
    Derived(Box<dyn Fn(&T) -> Cell>),
}

pub struct ColumnDescriptor<T> {
    pub header: String,
    pub accessor: ColumnAccessor<T>,
    pub enable_sorting: bool,
}

impl<T: Record> ColumnDescriptor<T> {
    /// Column showing a named field as-is.
    pub fn field<S: Into<String>>(header: S, name: &'static str) -> Self {
        Self {
            header: header.into(),
            accessor: ColumnAccessor::Field(name),
            enable_sorting: false,
        }
    }

    /// Column computed from the whole row.
    pub fn derived<S, F>(header: S, compute: F) -> Self
    where
        S: Into<String>,
        F: Fn(&T) -> Cell + 'static,
    {
        Self {
            header: header.into(),
            accessor: ColumnAccessor::Derived(Box::new(compute)),
            enable_sorting: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.enable_sorting = true;
        self
    }

    pub fn cell(&self, row: &T) -> Cell {
        match &self.accessor {
            ColumnAccessor::Field(name) => Cell::Value(row.field(name)),
            ColumnAccessor::Derived(compute) => compute(row),
        }
    }

    pub fn sort_value(&self, row: &T) -> Value {
        match &self.accessor {
            ColumnAccessor::Field(name) => row.field(name),
            ColumnAccessor::Derived(compute) => compute(row).sort_value(),
        }
    }
}
