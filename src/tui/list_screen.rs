//! Shared state machine for the orders and inventory list screens.
//!
//! Both screens are the same machine over different row types: a saved-view
//! tab strip, multi-select filters, a fuzzy query, single-column sort, and
//! bulk selection. The state and its reducer live here, free of any terminal
//! I/O, so the whole interaction surface is unit-testable. The screen views
//! translate key events into [`ListAction`]s and render the result.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::listview::{
    FilterDefinition, ListRow, ListViewController, SortOption, SortSelection,
};
use crate::tui::components::Toast;
use crate::tui::navigation;

/// What a view-name prompt is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    CreateView,
    RenameView(usize),
    DuplicateView,
}

/// An open view-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPrompt {
    pub kind: PromptKind,
    pub value: String,
}

/// An open filter panel, navigating filter groups and their choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterPanel {
    pub group_index: usize,
    pub choice_index: usize,
}

/// An open sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortMenu {
    pub index: usize,
}

/// Which overlay currently owns the keyboard. Used to route key events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeSnapshot {
    pub prompt_open: bool,
    pub filter_panel_open: bool,
    pub sort_menu_open: bool,
    pub search_focused: bool,
    /// A screen-specific modal (order form, product editor) is open; the
    /// shared reducer stays out of the way entirely.
    pub modal_open: bool,
}

/// Everything a list screen holds besides its column rendering.
#[derive(Debug, Clone)]
pub struct ListScreenState<R: ListRow> {
    pub controller: ListViewController<R>,
    pub sort_options: Vec<SortOption>,
    pub filter_defs: Vec<FilterDefinition>,

    pub selected_index: usize,
    pub scroll_offset: usize,
    pub is_loading: bool,
    pub load_error: Option<String>,

    pub search_focused: bool,
    pub prompt: Option<ViewPrompt>,
    pub filter_panel: Option<FilterPanel>,
    pub sort_menu: Option<SortMenu>,

    /// A saved-view persistence round-trip is in flight.
    pub view_saving: bool,
    /// Set by the reducer when a create/duplicate was submitted; the view
    /// picks it up and commits after the save delay.
    pub pending_view: Option<(PromptKind, String)>,

    pub toast: Option<Toast>,
    pub should_exit: bool,
}

/// Every state transition a list screen can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    NextView,
    PrevView,

    ToggleSelection,
    SelectAll,
    ClearSelection,

    FocusSearch,
    BlurSearch,
    ClearSearch,
    SetQuery(String),

    OpenCreatePrompt,
    OpenRenamePrompt,
    OpenDuplicatePrompt,
    DeleteActiveView,
    SetPromptValue(String),
    SubmitPrompt,
    CancelPrompt,
    /// Applied after the simulated save delay elapses.
    CommitViewSave { kind: PromptKind, name: String },

    OpenFilterPanel,
    CloseFilterPanel,
    FilterNextChoice,
    FilterPrevChoice,
    FilterNextGroup,
    ToggleFilterChoice,
    ClearFilterGroup,
    ClearAllFilters,

    OpenSortMenu,
    CloseSortMenu,
    SortMenuUp,
    SortMenuDown,
    ApplySort,

    DismissToast,
    Quit,
}

impl<R: ListRow> ListScreenState<R> {
    pub fn new(
        controller: ListViewController<R>,
        sort_options: Vec<SortOption>,
        filter_defs: Vec<FilterDefinition>,
    ) -> Self {
        Self {
            controller,
            sort_options,
            filter_defs,
            selected_index: 0,
            scroll_offset: 0,
            is_loading: true,
            load_error: None,
            search_focused: false,
            prompt: None,
            filter_panel: None,
            sort_menu: None,
            view_saving: false,
            pending_view: None,
            toast: None,
            should_exit: false,
        }
    }

    /// Which overlay currently owns the keyboard.
    pub fn mode(&self) -> ModeSnapshot {
        ModeSnapshot {
            prompt_open: self.prompt.is_some(),
            filter_panel_open: self.filter_panel.is_some(),
            sort_menu_open: self.sort_menu.is_some(),
            search_focused: self.search_focused,
            modal_open: false,
        }
    }

    pub fn visible(&self) -> Vec<R> {
        self.controller.visible_rows()
    }

    /// Record a successful page load.
    pub fn rows_loaded(&mut self, rows: Vec<R>) {
        self.controller.set_rows(rows);
        self.is_loading = false;
        self.load_error = None;
        self.clamp();
    }

    /// Record a failed page load. Existing rows are kept on screen.
    pub fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.load_error = Some(message.clone());
        self.toast = Some(Toast::error(message));
    }

    fn clamp(&mut self) {
        let count = self.controller.visible_rows().len();
        navigation::clamp_selection(&mut self.selected_index, &mut self.scroll_offset, count);
    }

    fn cursor_row_id(&self) -> Option<String> {
        self.visible()
            .get(self.selected_index)
            .map(|row| row.row_id().to_string())
    }
}

/// Apply one action. `list_height` is the number of table rows on screen.
pub fn reduce<R: ListRow>(state: &mut ListScreenState<R>, action: ListAction, list_height: usize) {
    let visible_count = state.controller.visible_rows().len();

    match action {
        ListAction::MoveUp => {
            navigation::scroll_up(&mut state.selected_index, &mut state.scroll_offset);
        }
        ListAction::MoveDown => {
            navigation::scroll_down(
                &mut state.selected_index,
                &mut state.scroll_offset,
                visible_count,
                list_height,
            );
        }
        ListAction::GoToTop => {
            navigation::scroll_to_top(&mut state.selected_index, &mut state.scroll_offset);
        }
        ListAction::GoToBottom => {
            navigation::scroll_to_bottom(
                &mut state.selected_index,
                &mut state.scroll_offset,
                visible_count,
                list_height,
            );
        }

        ListAction::NextView => {
            let count = state.controller.views().len();
            let next = (state.controller.active_view() + 1) % count;
            state.controller.set_active_view(next);
        }
        ListAction::PrevView => {
            let count = state.controller.views().len();
            let active = state.controller.active_view();
            let prev = if active == 0 { count - 1 } else { active - 1 };
            state.controller.set_active_view(prev);
        }

        ListAction::ToggleSelection => {
            if let Some(id) = state.cursor_row_id() {
                state.controller.toggle_selection(&id);
            }
        }
        ListAction::SelectAll => state.controller.select_all(),
        ListAction::ClearSelection => state.controller.clear_selection(),

        ListAction::FocusSearch => state.search_focused = true,
        ListAction::BlurSearch => state.search_focused = false,
        ListAction::ClearSearch => {
            state.controller.clear_query();
            state.search_focused = false;
            state.clamp();
        }
        ListAction::SetQuery(text) => {
            state.controller.set_query(text);
            state.selected_index = 0;
            state.scroll_offset = 0;
        }

        ListAction::OpenCreatePrompt => {
            state.prompt = Some(ViewPrompt {
                kind: PromptKind::CreateView,
                value: String::new(),
            });
        }
        ListAction::OpenRenamePrompt => {
            let active = state.controller.active_view();
            let view = &state.controller.views()[active];
            if view.locked {
                state.toast = Some(Toast::info("The default view cannot be renamed"));
            } else {
                state.prompt = Some(ViewPrompt {
                    kind: PromptKind::RenameView(active),
                    value: view.name.clone(),
                });
            }
        }
        ListAction::OpenDuplicatePrompt => {
            let active = state.controller.active_view();
            let name = state.controller.views()[active].name.clone();
            state.prompt = Some(ViewPrompt {
                kind: PromptKind::DuplicateView,
                value: format!("Copy of {}", name),
            });
        }
        ListAction::DeleteActiveView => {
            let active = state.controller.active_view();
            if state.controller.views()[active].locked {
                state.toast = Some(Toast::info("The default view cannot be deleted"));
            } else {
                let name = state.controller.views()[active].name.clone();
                state.controller.delete_view(active);
                state.toast = Some(Toast::success(format!("View \"{}\" deleted", name)));
            }
        }
        ListAction::SetPromptValue(value) => {
            if let Some(prompt) = state.prompt.as_mut() {
                prompt.value = value;
            }
        }
        ListAction::SubmitPrompt => {
            let Some(prompt) = state.prompt.take() else {
                return;
            };
            let name = prompt.value.trim().to_string();
            if name.is_empty() {
                state.prompt = Some(prompt);
                return;
            }
            match prompt.kind {
                PromptKind::RenameView(index) => {
                    if state.controller.rename_view(index, &name) {
                        state.toast = Some(Toast::success(format!("View renamed to \"{}\"", name)));
                    }
                }
                kind @ (PromptKind::CreateView | PromptKind::DuplicateView) => {
                    // Committed by the view after the save delay
                    state.view_saving = true;
                    state.pending_view = Some((kind, name));
                }
            }
        }
        ListAction::CancelPrompt => state.prompt = None,
        ListAction::CommitViewSave { kind, name } => {
            state.view_saving = false;
            match kind {
                PromptKind::CreateView => {
                    state.controller.create_view(&name);
                }
                PromptKind::DuplicateView => {
                    state.controller.duplicate_view(&name);
                }
                PromptKind::RenameView(_) => {}
            }
            state.toast = Some(Toast::success(format!("View \"{}\" saved", name)));
        }

        ListAction::OpenFilterPanel => {
            if !state.filter_defs.is_empty() {
                state.filter_panel = Some(FilterPanel::default());
            }
        }
        ListAction::CloseFilterPanel => state.filter_panel = None,
        ListAction::FilterNextChoice => {
            if let Some(panel) = state.filter_panel.as_mut() {
                let choices = state.filter_defs[panel.group_index].choices.len();
                panel.choice_index = (panel.choice_index + 1).min(choices.saturating_sub(1));
            }
        }
        ListAction::FilterPrevChoice => {
            if let Some(panel) = state.filter_panel.as_mut() {
                panel.choice_index = panel.choice_index.saturating_sub(1);
            }
        }
        ListAction::FilterNextGroup => {
            if let Some(panel) = state.filter_panel.as_mut() {
                panel.group_index = (panel.group_index + 1) % state.filter_defs.len();
                panel.choice_index = 0;
            }
        }
        ListAction::ToggleFilterChoice => {
            if let Some(panel) = state.filter_panel {
                let def = &state.filter_defs[panel.group_index];
                let value = def.choices[panel.choice_index].value.to_string();
                let mut values = state.controller.filter_values(def.key);
                if let Some(pos) = values.iter().position(|v| *v == value) {
                    values.remove(pos);
                } else {
                    values.push(value);
                }
                state.controller.set_filter(def.key, values);
                state.clamp();
            }
        }
        ListAction::ClearFilterGroup => {
            if let Some(panel) = state.filter_panel {
                let key = state.filter_defs[panel.group_index].key;
                state.controller.remove_filter(key);
                state.clamp();
            }
        }
        ListAction::ClearAllFilters => {
            state.controller.clear_all_filters();
            state.clamp();
        }

        ListAction::OpenSortMenu => {
            let current = state.controller.sort().clone();
            let index = state
                .sort_options
                .iter()
                .position(|opt| opt.field == current.field && opt.direction == current.direction)
                .unwrap_or(0);
            state.sort_menu = Some(SortMenu { index });
        }
        ListAction::CloseSortMenu => state.sort_menu = None,
        ListAction::SortMenuUp => {
            if let Some(menu) = state.sort_menu.as_mut() {
                menu.index = menu.index.saturating_sub(1);
            }
        }
        ListAction::SortMenuDown => {
            if let Some(menu) = state.sort_menu.as_mut() {
                menu.index = (menu.index + 1).min(state.sort_options.len().saturating_sub(1));
            }
        }
        ListAction::ApplySort => {
            if let Some(menu) = state.sort_menu.take() {
                let opt = &state.sort_options[menu.index];
                state
                    .controller
                    .set_sort(SortSelection::new(opt.field, opt.direction));
            }
        }

        ListAction::DismissToast => state.toast = None,
        ListAction::Quit => state.should_exit = true,
    }
}

/// Translate a key event into an action, honoring the current overlay.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    mode: &ModeSnapshot,
) -> Option<ListAction> {
    if mode.modal_open {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') => Some(ListAction::Quit),
            _ => None,
        };
    }

    if mode.prompt_open {
        return match code {
            KeyCode::Enter => Some(ListAction::SubmitPrompt),
            KeyCode::Esc => Some(ListAction::CancelPrompt),
            _ => None,
        };
    }

    if mode.search_focused {
        return match code {
            KeyCode::Enter | KeyCode::Tab => Some(ListAction::BlurSearch),
            KeyCode::Esc => Some(ListAction::ClearSearch),
            _ => None,
        };
    }

    if mode.filter_panel_open {
        return match code {
            KeyCode::Char('j') | KeyCode::Down => Some(ListAction::FilterNextChoice),
            KeyCode::Char('k') | KeyCode::Up => Some(ListAction::FilterPrevChoice),
            KeyCode::Tab => Some(ListAction::FilterNextGroup),
            KeyCode::Char(' ') | KeyCode::Enter => Some(ListAction::ToggleFilterChoice),
            KeyCode::Char('x') => Some(ListAction::ClearFilterGroup),
            KeyCode::Char('C') => Some(ListAction::ClearAllFilters),
            KeyCode::Esc => Some(ListAction::CloseFilterPanel),
            _ => None,
        };
    }

    if mode.sort_menu_open {
        return match code {
            KeyCode::Char('j') | KeyCode::Down => Some(ListAction::SortMenuDown),
            KeyCode::Char('k') | KeyCode::Up => Some(ListAction::SortMenuUp),
            KeyCode::Enter => Some(ListAction::ApplySort),
            KeyCode::Esc => Some(ListAction::CloseSortMenu),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(ListAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ListAction::MoveUp),
        KeyCode::Char('g') => Some(ListAction::GoToTop),
        KeyCode::Char('G') => Some(ListAction::GoToBottom),
        KeyCode::Tab => Some(ListAction::NextView),
        KeyCode::BackTab => Some(ListAction::PrevView),
        KeyCode::Char(' ') => Some(ListAction::ToggleSelection),
        KeyCode::Char('a') => Some(ListAction::SelectAll),
        KeyCode::Char('u') => Some(ListAction::ClearSelection),
        KeyCode::Char('/') => Some(ListAction::FocusSearch),
        KeyCode::Char('f') => Some(ListAction::OpenFilterPanel),
        KeyCode::Char('s') => Some(ListAction::OpenSortMenu),
        KeyCode::Char('C') => Some(ListAction::ClearAllFilters),
        KeyCode::Char('n') => Some(ListAction::OpenCreatePrompt),
        KeyCode::Char('r') => Some(ListAction::OpenRenamePrompt),
        KeyCode::Char('d') => Some(ListAction::OpenDuplicatePrompt),
        KeyCode::Char('D') => Some(ListAction::DeleteActiveView),
        KeyCode::Esc => Some(ListAction::DismissToast),
        KeyCode::Char('q') => Some(ListAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listview::{FilterChoice, SortDirection};
    use crate::tui::components::ToastLevel;

    #[derive(Debug, Clone)]
    struct Widget {
        id: String,
        name: String,
        tone: Option<String>,
    }

    impl Widget {
        fn new(id: &str, name: &str, tone: Option<&str>) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
                tone: tone.map(String::from),
            }
        }
    }

    impl ListRow for Widget {
        fn row_id(&self) -> &str {
            &self.id
        }
        fn search_text(&self) -> String {
            self.name.clone()
        }
        fn filter_value(&self, key: &str) -> Option<String> {
            match key {
                "tone" => self.tone.clone(),
                _ => None,
            }
        }
        fn sort_key(&self, _field: &str) -> String {
            self.name.to_lowercase()
        }
    }

    fn state() -> ListScreenState<Widget> {
        let controller =
            ListViewController::new(&["All", "Active"], SortSelection::ascending("name"));
        let defs = vec![FilterDefinition {
            key: "tone",
            label: "Status",
            choices: vec![
                FilterChoice {
                    label: "Active",
                    value: "active",
                },
                FilterChoice {
                    label: "Draft",
                    value: "draft",
                },
            ],
        }];
        let sorts = vec![
            SortOption {
                label: "Name",
                field: "name",
                direction: SortDirection::Ascending,
                direction_label: "A-Z",
            },
            SortOption {
                label: "Name",
                field: "name",
                direction: SortDirection::Descending,
                direction_label: "Z-A",
            },
        ];
        let mut s = ListScreenState::new(controller, sorts, defs);
        s.rows_loaded(vec![
            Widget::new("1", "Mug", Some("active")),
            Widget::new("2", "Kettle", Some("draft")),
        ]);
        s
    }

    #[test]
    fn test_filter_panel_toggle_applies_filter() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenFilterPanel, 10);
        reduce(&mut s, ListAction::ToggleFilterChoice, 10);

        let chips = s.controller.applied_filters();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "tone: active");
        assert_eq!(s.visible().len(), 1);
    }

    #[test]
    fn test_toggle_twice_removes_filter() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenFilterPanel, 10);
        reduce(&mut s, ListAction::ToggleFilterChoice, 10);
        reduce(&mut s, ListAction::ToggleFilterChoice, 10);
        assert!(s.controller.applied_filters().is_empty());
    }

    #[test]
    fn test_create_view_goes_through_pending_commit() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenCreatePrompt, 10);
        reduce(&mut s, ListAction::SetPromptValue("Unfulfilled".into()), 10);
        reduce(&mut s, ListAction::SubmitPrompt, 10);

        assert!(s.view_saving);
        assert!(s.prompt.is_none());
        let (kind, name) = s.pending_view.take().unwrap();
        assert_eq!(kind, PromptKind::CreateView);

        reduce(&mut s, ListAction::CommitViewSave { kind, name }, 10);
        assert!(!s.view_saving);
        assert_eq!(s.controller.views().len(), 3);
        assert_eq!(s.controller.active_view(), 2);
    }

    #[test]
    fn test_submit_empty_prompt_keeps_it_open() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenCreatePrompt, 10);
        reduce(&mut s, ListAction::SubmitPrompt, 10);
        assert!(s.prompt.is_some());
        assert!(!s.view_saving);
    }

    #[test]
    fn test_rename_locked_view_shows_info_toast() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenRenamePrompt, 10);
        assert!(s.prompt.is_none());
        assert_eq!(s.toast.as_ref().unwrap().level, ToastLevel::Info);
    }

    #[test]
    fn test_rename_unlocked_view_commits_immediately() {
        let mut s = state();
        reduce(&mut s, ListAction::NextView, 10);
        reduce(&mut s, ListAction::OpenRenamePrompt, 10);
        reduce(&mut s, ListAction::SetPromptValue("Live".into()), 10);
        reduce(&mut s, ListAction::SubmitPrompt, 10);

        assert!(!s.view_saving);
        assert_eq!(s.controller.views()[1].name, "Live");
    }

    #[test]
    fn test_delete_active_view_falls_back_to_default() {
        let mut s = state();
        reduce(&mut s, ListAction::NextView, 10);
        reduce(&mut s, ListAction::DeleteActiveView, 10);
        assert_eq!(s.controller.views().len(), 1);
        assert_eq!(s.controller.active_view(), 0);
    }

    #[test]
    fn test_query_resets_cursor() {
        let mut s = state();
        reduce(&mut s, ListAction::MoveDown, 10);
        assert_eq!(s.selected_index, 1);
        reduce(&mut s, ListAction::SetQuery("mug".into()), 10);
        assert_eq!(s.selected_index, 0);
        assert_eq!(s.visible().len(), 1);
    }

    #[test]
    fn test_sort_menu_apply() {
        let mut s = state();
        reduce(&mut s, ListAction::OpenSortMenu, 10);
        reduce(&mut s, ListAction::SortMenuDown, 10);
        reduce(&mut s, ListAction::ApplySort, 10);

        assert_eq!(s.controller.sort().direction, SortDirection::Descending);
        assert_eq!(s.visible()[0].name, "Mug");
    }

    #[test]
    fn test_selection_keys() {
        let mut s = state();
        reduce(&mut s, ListAction::ToggleSelection, 10);
        // Visible rows are sorted by name, so the cursor sits on Kettle (id 2)
        assert!(s.controller.is_selected("2"));
        reduce(&mut s, ListAction::SelectAll, 10);
        assert!(s.controller.all_on_page_selected());
        reduce(&mut s, ListAction::ClearSelection, 10);
        assert!(s.controller.selected_ids().is_empty());
    }

    #[test]
    fn test_key_routing_respects_overlays() {
        let mode = ModeSnapshot {
            prompt_open: true,
            ..Default::default()
        };
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, &mode),
            Some(ListAction::SubmitPrompt)
        );
        assert_eq!(key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, &mode), None);

        let modal = ModeSnapshot {
            modal_open: true,
            ..Default::default()
        };
        assert_eq!(key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &modal), None);
    }

    #[test]
    fn test_load_failure_keeps_rows_and_raises_toast() {
        let mut s = state();
        s.load_failed("boom".into());
        assert_eq!(s.controller.rows().len(), 2);
        assert_eq!(s.toast.as_ref().unwrap().level, ToastLevel::Error);
        assert_eq!(s.load_error.as_deref(), Some("boom"));
    }
}
