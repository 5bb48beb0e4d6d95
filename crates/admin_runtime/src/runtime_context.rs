//! Shell provider and context wiring.
//!
//! The provider owns the [`ShellState`] container, the menu tree, and the effect queue. Layout
//! components read state through [`ShellRuntimeContext`] and change it only by dispatching
//! [`ShellAction`] values.

use leptos::*;

use crate::{
    effect_executor,
    i18n::Language,
    menu::MenuTree,
    model::{ShellState, Theme},
    reducer::{reduce_shell, ShellAction, ShellEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`] values.
pub struct ShellRuntimeContext {
    /// Reactive shell state.
    pub state: RwSignal<ShellState>,
    /// Admin menu shown by the sidebar and validated against by the reducer.
    pub menu: StoredValue<MenuTree>,
    /// Effects emitted by the reducer and not yet executed.
    pub effects: RwSignal<Vec<ShellEffect>>,
    /// Router hook supplied by the host page, if any.
    pub navigate: StoredValue<Option<Callback<String>>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }

    pub fn sidebar_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.sidebar_open))
    }

    pub fn language(&self) -> Signal<Language> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.language))
    }

    pub fn theme(&self) -> Signal<Theme> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.theme))
    }

    /// Tracked favorite lookup for one label.
    pub fn is_favorite(&self, label: impl Into<String>) -> Signal<bool> {
        let state = self.state;
        let label = label.into();
        Signal::derive(move || state.with(|state| state.is_favorite(&label)))
    }

    pub fn toggle_favorite(&self, label: impl Into<String>) {
        self.dispatch_action(ShellAction::ToggleFavorite {
            label: label.into(),
        });
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.dispatch_action(ShellAction::SetSidebarOpen(open));
    }

    pub fn navigate(&self, href: impl Into<String>) {
        self.dispatch_action(ShellAction::Navigate { href: href.into() });
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(
    /// Called with the target path when the shell navigates.
    #[prop(optional_no_strip)]
    on_navigate: Option<Callback<String>>,
    /// Route shown on mount.
    #[prop(optional_no_strip)]
    initial_path: Option<String>,
    /// Replaces the built-in admin menu.
    #[prop(optional_no_strip)]
    menu: Option<MenuTree>,
    children: Children,
) -> impl IntoView {
    let menu = menu.unwrap_or_else(|| {
        MenuTree::builtin().unwrap_or_else(|err| {
            logging::warn!("admin menu unavailable: {err}");
            MenuTree::default()
        })
    });
    let menu = store_value(menu);
    let mut initial = ShellState::default();
    if let Some(path) = initial_path {
        initial.active_path = path;
    }
    let state = create_rw_signal(initial);
    let effects = create_rw_signal(Vec::<ShellEffect>::new());
    let navigate = store_value(on_navigate);

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();

        let result = menu.with_value(|menu| reduce_shell(&mut shell, menu, action));
        match result {
            Ok(new_effects) => {
                if shell != previous {
                    state.set(shell);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("shell reducer error: {err}"),
        }
    });

    let runtime = ShellRuntimeContext {
        state,
        menu,
        effects,
        navigate,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    effect_executor::apply_theme(state.get_untracked().theme);

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
