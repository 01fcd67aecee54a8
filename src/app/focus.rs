//! Focus state - which region, tab and header cell receives input

use crate::constants::TAB_TITLES;

/// Top-level focus target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    Method,
    #[default]
    Url,
    Tabs,
}

impl Region {
    pub fn next(&self) -> Region {
        match self {
            Region::Method => Region::Url,
            Region::Url => Region::Tabs,
            Region::Tabs => Region::Method,
        }
    }

    pub fn prev(&self) -> Region {
        match self {
            Region::Method => Region::Tabs,
            Region::Url => Region::Method,
            Region::Tabs => Region::Url,
        }
    }
}

/// Sub-view of the tab panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Headers,
    Body,
    Response,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Headers, Tab::Body, Tab::Response];

    pub fn index(&self) -> usize {
        match self {
            Tab::Headers => 0,
            Tab::Body => 1,
            Tab::Response => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        TAB_TITLES[self.index()]
    }
}

/// Which half of a header row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Key,
    Value,
}

/// A single editable cell in the headers table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub row: usize,
    pub column: Column,
}

/// Focus position.
///
/// `header_focus_index` addresses header cells row-major: `2 * row` is the
/// key of `row`, `2 * row + 1` its value. Navigation keeps it inside
/// `[0, 2 * rows - 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusState {
    pub region: Region,
    pub tab: Tab,
    pub header_focus_index: usize,
}

impl FocusState {
    pub fn next_region(&mut self) {
        self.region = self.region.next();
    }

    pub fn prev_region(&mut self) {
        self.region = self.region.prev();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn headers_active(&self) -> bool {
        self.region == Region::Tabs && self.tab == Tab::Headers
    }

    pub fn body_active(&self) -> bool {
        self.region == Region::Tabs && self.tab == Tab::Body
    }

    pub fn response_active(&self) -> bool {
        self.region == Region::Tabs && self.tab == Tab::Response
    }

    pub fn focused_cell(&self) -> HeaderCell {
        HeaderCell {
            row: self.header_focus_index / 2,
            column: if self.header_focus_index % 2 == 0 {
                Column::Key
            } else {
                Column::Value
            },
        }
    }

    /// The header cell receiving input, if the headers tab is active
    pub fn focused_header(&self) -> Option<HeaderCell> {
        self.headers_active().then(|| self.focused_cell())
    }

    pub fn header_up(&mut self) {
        self.header_focus_index = self.header_focus_index.saturating_sub(1);
    }

    pub fn header_down(&mut self, rows: usize) {
        let last = (rows * 2).saturating_sub(1);
        if self.header_focus_index < last {
            self.header_focus_index += 1;
        }
    }

    /// Point at the key cell of `row`
    pub fn focus_header_key(&mut self, row: usize) {
        self.header_focus_index = row * 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_focus() {
        let focus = FocusState::default();
        assert_eq!(focus.region, Region::Url);
        assert_eq!(focus.tab, Tab::Headers);
        assert_eq!(focus.header_focus_index, 0);
        assert_eq!(focus.focused_header(), None);
    }

    #[test]
    fn test_region_cycle_wraps() {
        let mut focus = FocusState::default();
        focus.next_region();
        assert_eq!(focus.region, Region::Tabs);
        focus.next_region();
        assert_eq!(focus.region, Region::Method);
        focus.prev_region();
        assert_eq!(focus.region, Region::Tabs);
        focus.prev_region();
        focus.prev_region();
        assert_eq!(focus.region, Region::Method);
    }

    #[test]
    fn test_cell_decomposition() {
        let mut focus = FocusState {
            region: Region::Tabs,
            ..FocusState::default()
        };
        focus.header_focus_index = 5;
        assert_eq!(
            focus.focused_header(),
            Some(HeaderCell { row: 2, column: Column::Value })
        );
        focus.header_focus_index = 4;
        assert_eq!(focus.focused_cell(), HeaderCell { row: 2, column: Column::Key });
    }

    #[test]
    fn test_header_navigation_is_clamped() {
        let mut focus = FocusState::default();
        focus.header_up();
        assert_eq!(focus.header_focus_index, 0);

        for _ in 0..10 {
            focus.header_down(2);
        }
        assert_eq!(focus.header_focus_index, 3);

        for _ in 0..10 {
            focus.header_up();
        }
        assert_eq!(focus.header_focus_index, 0);
    }

    #[test]
    fn test_header_down_without_rows_stays_put() {
        let mut focus = FocusState::default();
        focus.header_down(0);
        assert_eq!(focus.header_focus_index, 0);
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<_> = Tab::ALL.iter().map(Tab::title).collect();
        assert_eq!(titles, vec!["Headers", "Body", "Response"]);
    }
}
