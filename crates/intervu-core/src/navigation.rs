use crate::views::AppView;

/// One history entry. Entries carry the raw tag rather than the decoded
/// view so that restoring behaves exactly like the browser history API:
/// whatever was stored comes back, and unrecognized tags fall back to the
/// landing view at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    tag: String,
}

impl HistoryEntry {
    fn new(view: AppView) -> Self {
        Self {
            tag: view.tag().to_owned(),
        }
    }

    fn decode(&self) -> AppView {
        AppView::from_tag(&self.tag).unwrap_or(AppView::Landing)
    }
}

/// Maps user intent to current-view changes and keeps the history stack in
/// sync. Owned by the shell state and passed into screens explicitly, never
/// held as ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    current: AppView,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    /// Starts at the landing view with the initial entry already in place,
    /// so the very first back-navigation is well-defined.
    pub fn new() -> Self {
        Self::from_history(Vec::new(), 0)
    }

    /// Rebuilds the controller from raw history tags, as after a reload.
    /// An empty history gets the synthesized landing entry; a cursor past
    /// the end is clamped; an unrecognized tag under the cursor restores
    /// the landing view.
    pub fn from_history(tags: Vec<String>, cursor: usize) -> Self {
        let mut entries: Vec<HistoryEntry> = tags.into_iter().map(|tag| HistoryEntry { tag }).collect();
        if entries.is_empty() {
            entries.push(HistoryEntry::new(AppView::Landing));
        }
        let cursor = cursor.min(entries.len() - 1);
        let current = entries[cursor].decode();
        Self {
            current,
            entries,
            cursor,
        }
    }

    pub fn current_view(&self) -> AppView {
        self.current
    }

    /// Navigates to `target`: any forward entries are discarded and a new
    /// entry carrying the target's tag is pushed, in the exact order calls
    /// arrive. Total over the view enumeration; there is nothing to fail.
    pub fn change_view(&mut self, target: AppView) {
        self.current = target;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::new(target));
        self.cursor += 1;
    }

    /// Back-navigation. Restores the view stored under the previous entry,
    /// or stays on the first entry once the stack is exhausted. Returns
    /// whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.current = self.entries[self.cursor].decode();
        true
    }

    /// Forward-navigation over entries preserved by `back`.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        self.current = self.entries[self.cursor].decode();
        true
    }

    pub fn history_tags(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.tag.as_str()).collect()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing_with_a_synthesized_entry() {
        let nav = NavigationController::new();
        assert_eq!(nav.current_view(), AppView::Landing);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.history_tags(), vec!["LANDING"]);
    }

    #[test]
    fn back_replays_the_exact_reverse_sequence_and_ends_at_landing() {
        let mut nav = NavigationController::new();
        let visited = [
            AppView::Login,
            AppView::Dashboard,
            AppView::Setup,
            AppView::Session,
        ];
        for view in visited {
            nav.change_view(view);
        }
        assert_eq!(nav.current_view(), AppView::Session);

        let mut replay = Vec::new();
        while nav.back() {
            replay.push(nav.current_view());
        }
        assert_eq!(
            replay,
            vec![
                AppView::Setup,
                AppView::Dashboard,
                AppView::Login,
                AppView::Landing
            ]
        );
        assert_eq!(nav.current_view(), AppView::Landing);
        assert!(!nav.back());
        assert_eq!(nav.current_view(), AppView::Landing);
    }

    #[test]
    fn forward_retraces_what_back_left_behind() {
        let mut nav = NavigationController::new();
        nav.change_view(AppView::Dashboard);
        nav.change_view(AppView::History);
        assert!(nav.back());
        assert!(nav.back());
        assert_eq!(nav.current_view(), AppView::Landing);
        assert!(nav.forward());
        assert_eq!(nav.current_view(), AppView::Dashboard);
        assert!(nav.forward());
        assert_eq!(nav.current_view(), AppView::History);
        assert!(!nav.forward());
    }

    #[test]
    fn navigating_discards_forward_entries() {
        let mut nav = NavigationController::new();
        nav.change_view(AppView::Dashboard);
        nav.change_view(AppView::Interviews);
        nav.back();
        nav.change_view(AppView::Setup);
        assert!(!nav.forward());
        assert_eq!(
            nav.history_tags(),
            vec!["LANDING", "DASHBOARD", "SETUP"]
        );
    }

    #[test]
    fn unknown_history_tags_restore_the_landing_view() {
        let mut nav = NavigationController::from_history(
            vec!["DASHBOARD".to_owned(), "NOT_A_VIEW".to_owned()],
            1,
        );
        assert_eq!(nav.current_view(), AppView::Landing);
        assert!(nav.back());
        assert_eq!(nav.current_view(), AppView::Dashboard);
    }

    #[test]
    fn restoring_empty_history_synthesizes_the_landing_entry() {
        let nav = NavigationController::from_history(Vec::new(), 7);
        assert_eq!(nav.current_view(), AppView::Landing);
        assert_eq!(nav.depth(), 1);
    }
}
