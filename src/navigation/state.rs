use std::rc::Rc;

use yew::Reducible;

use crate::config;

/// Same-page anchors reachable from the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Features,
    PowerPlay,
    Pricing,
    Contact,
}

impl Section {
    pub const NAV_ORDER: [Section; 4] = [
        Section::Features,
        Section::PowerPlay,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::PowerPlay => "power-play",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Features => "Features",
            Section::PowerPlay => "Why Us",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD
}

/// Where the navbar reads the current vertical scroll offset from.
pub trait ScrollSource {
    fn scroll_offset(&self) -> Option<f64>;
}

pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn scroll_offset(&self) -> Option<f64> {
        web_sys::window()?.scroll_y().ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkSelected(Section),
    CallToAction,
}

impl NavAction {
    pub fn sample<S: ScrollSource + ?Sized>(source: &S) -> Option<NavAction> {
        source.scroll_offset().map(NavAction::Scrolled)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_scrolled: bool,
    pub is_menu_open: bool,
}

impl NavigationState {
    pub fn next(&self, action: NavAction) -> NavigationState {
        match action {
            NavAction::Scrolled(offset) => NavigationState {
                is_scrolled: is_scrolled(offset),
                ..*self
            },
            NavAction::ToggleMenu => NavigationState {
                is_menu_open: !self.is_menu_open,
                ..*self
            },
            NavAction::LinkSelected(_) | NavAction::CallToAction => NavigationState {
                is_menu_open: false,
                ..*self
            },
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeScroll(Cell<Option<f64>>);

    impl ScrollSource for FakeScroll {
        fn scroll_offset(&self) -> Option<f64> {
            self.0.get()
        }
    }

    fn run(state: NavigationState, actions: &[NavAction]) -> NavigationState {
        actions.iter().fold(state, |state, action| state.next(*action))
    }

    #[test]
    fn scroll_threshold_boundaries() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = NavigationState::default();
        assert!(!state.is_menu_open);
        assert!(!state.is_scrolled);
    }

    #[test]
    fn menu_opens_then_link_closes_it() {
        let open = NavigationState::default().next(NavAction::ToggleMenu);
        assert!(open.is_menu_open);
        let closed = open.next(NavAction::LinkSelected(Section::Features));
        assert!(!closed.is_menu_open);
    }

    #[test]
    fn call_to_action_closes_menu() {
        let state = run(NavigationState::default(), &[NavAction::ToggleMenu, NavAction::CallToAction]);
        assert!(!state.is_menu_open);
    }

    #[test]
    fn menu_button_toggles_both_ways() {
        let state = run(NavigationState::default(), &[NavAction::ToggleMenu, NavAction::ToggleMenu]);
        assert!(!state.is_menu_open);
    }

    #[test]
    fn closing_actions_keep_closed_menu_closed() {
        let state = run(
            NavigationState::default(),
            &[NavAction::LinkSelected(Section::Pricing), NavAction::CallToAction],
        );
        assert_eq!(state, NavigationState::default());
    }

    #[test]
    fn scroll_down_and_back_up() {
        let source = FakeScroll(Cell::new(Some(0.0)));
        let mut state = NavigationState::default();

        for (offset, expected) in [(0.0, false), (120.0, true), (10.0, false)] {
            source.0.set(Some(offset));
            let action = NavAction::sample(&source).unwrap();
            state = state.next(action);
            assert_eq!(state.is_scrolled, expected, "offset {}", offset);
        }
    }

    #[test]
    fn missing_scroll_offset_yields_no_action() {
        let source = FakeScroll(Cell::new(None));
        assert_eq!(NavAction::sample(&source), None);
    }

    #[test]
    fn scroll_and_menu_are_orthogonal() {
        let state = run(
            NavigationState::default(),
            &[NavAction::Scrolled(300.0), NavAction::ToggleMenu, NavAction::Scrolled(0.0)],
        );
        assert!(state.is_menu_open);
        assert!(!state.is_scrolled);

        let state = state.next(NavAction::Scrolled(80.0)).next(NavAction::CallToAction);
        assert!(state.is_scrolled);
        assert!(!state.is_menu_open);
    }

    #[test]
    fn reducer_keeps_identity_when_unchanged() {
        let state = Rc::new(NavigationState::default());
        let same = state.clone().reduce(NavAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));
        let changed = state.clone().reduce(NavAction::Scrolled(60.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.is_scrolled);
    }

    #[test]
    fn sections_map_to_anchors() {
        let hrefs: Vec<String> = Section::NAV_ORDER.iter().map(|s| s.href()).collect();
        assert_eq!(hrefs, vec!["#features", "#power-play", "#pricing", "#contact"]);
        assert_eq!(Section::PowerPlay.label(), "Why Us");
    }
}
