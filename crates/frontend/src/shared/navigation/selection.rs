//! Row highlighting of list panels.
//!
//! The routed id is canonical. A click only sets `pending` so the row lights
//! up before the router finishes the transition; the next route change
//! settles the state and drops whatever was pending.

use contracts::domain::common::{Identifier, ResourceItem};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    routed: Option<Identifier>,
    pending: Option<Identifier>,
}

impl SelectionState {
    pub fn from_route(routed: Option<Identifier>) -> Self {
        Self {
            routed,
            pending: None,
        }
    }

    /// Row activated; navigation to it is under way.
    pub fn click(&mut self, id: Identifier) {
        self.pending = Some(id);
    }

    /// Route changed (link, back/forward, direct load).
    pub fn settle(&mut self, routed: Option<Identifier>) {
        self.routed = routed;
        self.pending = None;
    }

    pub fn routed(&self) -> Option<&Identifier> {
        self.routed.as_ref()
    }

    pub fn highlighted(&self) -> Option<&Identifier> {
        self.pending.as_ref().or(self.routed.as_ref())
    }
}

/// Whether a click on a row link is turned into a navigation by the router.
/// Modified or non-primary clicks are left to the browser (new tab, new
/// window) and never change the route, so they must not set `pending`.
pub fn is_router_navigation(button: i16, ctrl: bool, meta: bool, shift: bool, alt: bool) -> bool {
    button == 0 && !(ctrl || meta || shift || alt)
}

/// Identity of the nested detail region of a panel. The region is rebuilt
/// whenever the key changes and only then; it follows the route, never a
/// pending click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailKey(Option<Identifier>);

impl DetailKey {
    pub fn of(routed: Option<&Identifier>) -> Self {
        Self(routed.cloned())
    }

    pub fn into_id(self) -> Option<Identifier> {
        self.0
    }
}

/// Index of the row to mark selected: the first item carrying `id`.
/// Duplicate identifiers therefore highlight only their first occurrence.
pub fn highlighted_row(items: &[ResourceItem], id: Option<&Identifier>) -> Option<usize> {
    let id = id?;
    items.iter().position(|item| &item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<ResourceItem> {
        vec![
            ResourceItem::new("1", "avt-113"),
            ResourceItem::new("2", "avt-114"),
        ]
    }

    #[test]
    fn test_default_id_selects_matching_row() {
        let state = SelectionState::from_route(Some(Identifier::from("2")));
        let row = highlighted_row(&groups(), state.highlighted());
        assert_eq!(row, Some(1));
        assert_eq!(groups()[row.unwrap()].name, "avt-114");
    }

    #[test]
    fn test_no_match_selects_nothing() {
        assert_eq!(highlighted_row(&groups(), None), None);
        assert_eq!(highlighted_row(&groups(), Some(&Identifier::from("42"))), None);
        assert_eq!(highlighted_row(&[], Some(&Identifier::from("1"))), None);
    }

    #[test]
    fn test_at_most_one_row_and_it_matches() {
        let items = groups();
        for candidate in ["1", "2", "3", ""] {
            let id = Identifier::from(candidate);
            let rows: Vec<usize> = (0..items.len())
                .filter(|i| highlighted_row(&items, Some(&id)) == Some(*i))
                .collect();
            let contained = items.iter().any(|item| item.id == id);
            assert!(rows.len() <= 1);
            assert_eq!(rows.len() == 1, contained);
            if let Some(row) = rows.first() {
                assert_eq!(items[*row].id, id);
            }
        }
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let items = vec![
            ResourceItem::new("7", "first"),
            ResourceItem::new("7", "second"),
        ];
        assert_eq!(highlighted_row(&items, Some(&Identifier::from("7"))), Some(0));
    }

    #[test]
    fn test_click_highlights_until_route_settles() {
        let mut state = SelectionState::from_route(Some(Identifier::from("1")));

        state.click(Identifier::from("2"));
        assert_eq!(state.highlighted(), Some(&Identifier::from("2")));
        assert_eq!(state.routed(), Some(&Identifier::from("1")));

        state.settle(Some(Identifier::from("2")));
        assert_eq!(state.highlighted(), Some(&Identifier::from("2")));
    }

    #[test]
    fn test_only_plain_primary_clicks_navigate() {
        assert!(is_router_navigation(0, false, false, false, false));

        assert!(!is_router_navigation(0, true, false, false, false));
        assert!(!is_router_navigation(0, false, true, false, false));
        assert!(!is_router_navigation(0, false, false, true, false));
        assert!(!is_router_navigation(0, false, false, false, true));
        // middle and right button
        assert!(!is_router_navigation(1, false, false, false, false));
        assert!(!is_router_navigation(2, false, false, false, false));
    }

    #[test]
    fn test_ctrl_click_keeps_highlight_on_route() {
        let mut state = SelectionState::from_route(Some(Identifier::from("1")));

        // ctrl+click on row "2" opens a new tab; the route stays on "1"
        if is_router_navigation(0, true, false, false, false) {
            state.click(Identifier::from("2"));
        }

        assert_eq!(state.highlighted(), state.routed());
        assert_eq!(highlighted_row(&groups(), state.highlighted()), Some(0));
    }

    #[test]
    fn test_detail_key_changes_with_routed_id() {
        let first = DetailKey::of(Some(&Identifier::from("1")));
        let second = DetailKey::of(Some(&Identifier::from("2")));

        assert_ne!(first, second);
        assert_eq!(first, DetailKey::of(Some(&Identifier::from("1"))));
        assert_eq!(second.into_id(), Some(Identifier::from("2")));
        assert_eq!(DetailKey::of(None).into_id(), None);
    }

    #[test]
    fn test_detail_key_ignores_pending_click() {
        let mut state = SelectionState::from_route(Some(Identifier::from("1")));
        let before = DetailKey::of(state.routed());

        state.click(Identifier::from("2"));
        assert_eq!(DetailKey::of(state.routed()), before);

        state.settle(Some(Identifier::from("2")));
        assert_ne!(DetailKey::of(state.routed()), before);
    }

    #[test]
    fn test_route_wins_over_pending_click() {
        let mut state = SelectionState::from_route(Some(Identifier::from("1")));

        // click, then the user goes back before the transition lands
        state.click(Identifier::from("2"));
        state.settle(Some(Identifier::from("1")));

        assert_eq!(state, SelectionState::from_route(Some(Identifier::from("1"))));
    }
}
