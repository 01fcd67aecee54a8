//! Header list - ordered, editable key/value rows

use crate::app::focus::{Column, HeaderCell};
use crate::constants::{KEY_PLACEHOLDER, VALUE_PLACEHOLDER};
use crate::input::TextInput;
use crate::models::Header;

/// One editable header row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderField {
    pub key: TextInput,
    pub value: TextInput,
}

impl Default for HeaderField {
    fn default() -> Self {
        HeaderField {
            key: TextInput::new(KEY_PLACEHOLDER),
            value: TextInput::new(VALUE_PLACEHOLDER),
        }
    }
}

impl HeaderField {
    pub fn cell(&self, column: Column) -> &TextInput {
        match column {
            Column::Key => &self.key,
            Column::Value => &self.value,
        }
    }

    pub fn cell_mut(&mut self, column: Column) -> &mut TextInput {
        match column {
            Column::Key => &mut self.key,
            Column::Value => &mut self.value,
        }
    }

    pub fn to_header(&self) -> Header {
        Header::new(self.key.value(), self.value.value())
    }
}

/// Rows are only ever appended
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderList {
    rows: Vec<HeaderField>,
}

impl HeaderList {
    /// A list holding a single empty row
    pub fn with_empty_row() -> Self {
        let mut list = HeaderList::default();
        list.append();
        list
    }

    /// Append an empty row and return its index
    pub fn append(&mut self) -> usize {
        self.rows.push(HeaderField::default());
        self.rows.len() - 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.rows.iter()
    }

    pub fn get(&self, row: usize) -> Option<&HeaderField> {
        self.rows.get(row)
    }

    /// Out-of-range cells yield `None`
    pub fn cell_mut(&mut self, cell: HeaderCell) -> Option<&mut TextInput> {
        self.rows.get_mut(cell.row).map(|row| row.cell_mut(cell.column))
    }

    pub fn to_headers(&self) -> Vec<Header> {
        self.rows.iter().map(HeaderField::to_header).collect()
    }

    /// Focus exactly `focused` (if any) and blur every other cell
    pub fn sync_focus(&mut self, focused: Option<HeaderCell>) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            for column in [Column::Key, Column::Value] {
                let input = row.cell_mut(column);
                if focused == Some(HeaderCell { row: i, column }) {
                    input.focus();
                } else {
                    input.blur();
                }
            }
        }
    }
}
