use leptos::html;
use system_ui::{
    use_outside_click, Button, ButtonSize, ButtonVariant, ConfirmModal, ConfirmTone, ContentModal,
    DataTable, MenuItem, MenuSeparator, MenuSurface, Stack, TableBody, TableCell, TableHead,
    TableHeaderCell, TableRow, Text, TextField, TextRole, TextTone,
};

use super::*;
use crate::i18n::Language;
use crate::model::{Theme, NOTIFICATIONS};
use crate::runtime_context::ShellRuntimeContext;
use crate::search::{search_results, suggestion, MIN_QUERY_CHARS, QUICK_ACTIONS, RECENT_SEARCHES};

const MIN_PASSWORD_CHARS: usize = 8;

/// Recent sign-in records: address, client, and when.
const LOGIN_ATTEMPTS: [(&str, &str, &str); 3] = [
    ("175.209.251.44", "Chrome / 143.0 / WinNT", "31 minutes ago (2026-01-07 02:02:02)"),
    ("175.209.251.44", "Chrome / 143.0 / WinNT", "2 hours ago (2026-01-07 00:11:40)"),
    ("10.12.0.8", "Safari / 18.2 / macOS", "1 day ago (2026-01-06 09:41:13)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dialogs opened from the user menu.
enum AccountDialog {
    ChangePassword,
    LoginAttempts,
    ChangeProfilePicture,
    MySettings,
    SignOut,
}

impl AccountDialog {
    const MENU: [Self; 5] = [
        Self::ChangePassword,
        Self::LoginAttempts,
        Self::ChangeProfilePicture,
        Self::MySettings,
        Self::SignOut,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::ChangePassword => "Change password",
            Self::LoginAttempts => "Login attempts",
            Self::ChangeProfilePicture => "Change profile picture",
            Self::MySettings => "My setting",
            Self::SignOut => "Sign out",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::ChangePassword => IconName::LockClosed,
            Self::LoginAttempts => IconName::Clock,
            Self::ChangeProfilePicture => IconName::UserCircle,
            Self::MySettings => IconName::Settings,
            Self::SignOut => IconName::Logout,
        }
    }
}

/// Problem with a new password pair, if any.
fn password_change_error(new_password: &str, confirmation: &str) -> Option<&'static str> {
    if new_password.chars().count() < MIN_PASSWORD_CHARS {
        Some("Password must be at least 8 characters.")
    } else if new_password != confirmation {
        Some("Passwords do not match.")
    } else {
        None
    }
}

fn use_navbar_dropdown(
    runtime: ShellRuntimeContext,
    dropdown: NavbarDropdown,
) -> (NodeRef<html::Div>, Signal<bool>) {
    let container = create_node_ref::<html::Div>();
    let state = runtime.state;
    let open = Signal::derive(move || state.with(|state| state.is_dropdown_open(dropdown)));
    use_outside_click(
        container,
        open,
        Callback::new(move |_| runtime.dispatch_action(ShellAction::CloseDropdown(dropdown))),
    );
    (container, open)
}

#[component]
fn GlobalSearch() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let language = runtime.language();
    let (container, open) = use_navbar_dropdown(runtime, NavbarDropdown::Search);
    let input = create_node_ref::<html::Input>();
    let query = Signal::derive(move || state.with(|state| state.search_query.clone()));

    let idle_panel = move || {
        let language = language.get();
        view! {
            <section data-ui-slot="recent">
                <h3>{language.text(UiText::RecentSearches)}</h3>
                {RECENT_SEARCHES
                    .into_iter()
                    .map(|label| {
                        view! {
                            <MenuItem
                                leading_icon=IconName::Clock
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(ShellAction::SetSearchQuery(label.to_string()));
                                })
                            >
                                {label}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </section>
            <MenuSeparator />
            <section data-ui-slot="quick-actions">
                <h3>{language.text(UiText::QuickActions)}</h3>
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(label, icon)| {
                        view! {
                            <MenuItem
                                leading_icon=icon
                                on_click=Callback::new(move |_| {
                                    logging::log!("quick action: {label}");
                                    runtime.dispatch_action(ShellAction::CloseDropdown(NavbarDropdown::Search));
                                })
                            >
                                {label}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </section>
        }
    };

    let results_panel = move || {
        let language = language.get();
        let query = query.get();
        let results = search_results(&query, language);
        let suggested = suggestion(&query, language).map(|suggested| {
            let target = suggested.target().path;
            view! {
                <Button
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Sm
                    leading_icon=IconName::Sparkles
                    ui_slot="suggestion"
                    on_click=Callback::new(move |_| runtime.navigate(target))
                >
                    {suggested.label(language)}
                </Button>
            }
        });
        let listing = if results.is_empty() {
            view! {
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {language.text(UiText::NoSearchResults)}
                </Text>
            }
            .into_view()
        } else {
            results
                .into_iter()
                .map(|result| {
                    view! {
                        <MenuItem
                            leading_icon=result.icon
                            description=result.description
                            on_click=Callback::new(move |_| runtime.navigate(result.path))
                        >
                            {result.title}
                        </MenuItem>
                    }
                })
                .collect_view()
        };
        view! {
            {suggested}
            <section data-ui-slot="results">
                <h3>{language.text(UiText::SearchResults)}</h3>
                {listing}
            </section>
        }
    };

    view! {
        <div
            class="admin-navbar-search"
            node_ref=container
            data-ui-slot="search"
        >
            <TextField
                id="global-search"
                input_type="search"
                autocomplete="off"
                leading_icon=IconName::Search
                node_ref=input
                placeholder=language.get_untracked().text(UiText::SearchPlaceholder)
                value=query
                on_input=Callback::new(move |value: String| {
                    runtime.dispatch_action(ShellAction::SetSearchQuery(value));
                    runtime.dispatch_action(ShellAction::OpenDropdown(NavbarDropdown::Search));
                })
                on_focus=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::OpenDropdown(NavbarDropdown::Search));
                })
                on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        runtime.dispatch_action(ShellAction::CloseDropdown(NavbarDropdown::Search));
                        if let Some(input) = input.get_untracked() {
                            let _ = input.blur();
                        }
                    }
                })
            />
            <Show when=move || open.get()>
                <MenuSurface role="dialog" aria_label="Search">
                    {move || {
                        if query.get().trim().chars().count() < MIN_QUERY_CHARS {
                            idle_panel().into_view()
                        } else {
                            results_panel().into_view()
                        }
                    }}
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
fn LanguageMenu() -> impl IntoView {
    let runtime = use_shell_runtime();
    let language = runtime.language();
    let (container, open) = use_navbar_dropdown(runtime, NavbarDropdown::Language);

    view! {
        <div node_ref=container data-ui-slot="language">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Sm
                leading_icon=IconName::Globe
                trailing_icon=IconName::ChevronDown
                aria_haspopup="menu"
                aria_expanded=open
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::ToggleDropdown(NavbarDropdown::Language));
                })
            >
                {move || language.get().name()}
            </Button>
            <Show when=move || open.get()>
                <MenuSurface aria_label="Language" align_end=true>
                    {Language::ALL
                        .into_iter()
                        .map(|option| {
                            let selected = Signal::derive(move || language.get() == option);
                            view! {
                                <MenuItem
                                    role="menuitemradio"
                                    selected=selected
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(ShellAction::SetLanguage(option));
                                    })
                                >
                                    <span data-ui-slot="flag" data-ui-code=option.code()></span>
                                    {option.name()}
                                    {move || selected.get().then(|| view! { <Icon icon=IconName::Check size=IconSize::Sm /> })}
                                </MenuItem>
                            }
                        })
                        .collect_view()}
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
fn NotificationsMenu() -> impl IntoView {
    let runtime = use_shell_runtime();
    let language = runtime.language();
    let (container, open) = use_navbar_dropdown(runtime, NavbarDropdown::Notifications);

    view! {
        <div node_ref=container data-ui-slot="notifications">
            <IconButton
                icon=IconName::Bell
                aria_label="Notifications"
                pressed=open
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::ToggleDropdown(NavbarDropdown::Notifications));
                })
            />
            <span data-ui-slot="unread-dot" aria-hidden="true"></span>
            <Show when=move || open.get()>
                <MenuSurface aria_label="Notifications" align_end=true>
                    <h3>{move || language.get().text(UiText::Notifications)}</h3>
                    {NOTIFICATIONS
                        .into_iter()
                        .map(|notification| {
                            view! {
                                <MenuItem
                                    leading_icon=IconName::Info
                                    description=notification.message
                                    selected=notification.highlighted
                                >
                                    {notification.title}
                                    <span data-ui-slot="age">{notification.age}</span>
                                </MenuItem>
                            }
                        })
                        .collect_view()}
                    <MenuSeparator />
                    <MenuItem leading_icon=IconName::Settings>
                        {move || language.get().text(UiText::Settings)}
                        <span data-ui-slot="shortcut">"⌘ O"</span>
                    </MenuItem>
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
fn ChangePasswordForm(on_done: Callback<()>) -> impl IntoView {
    let new_password = create_rw_signal(String::new());
    let confirmation = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |_: web_sys::MouseEvent| {
        match password_change_error(&new_password.get_untracked(), &confirmation.get_untracked()) {
            Some(problem) => {
                logging::warn!("password change rejected: {problem}");
                error.set(Some(problem.to_string()));
            }
            None => {
                error.set(None);
                on_done.call(());
            }
        }
    };

    view! {
        <Stack>
            <TextField id="current-password" label="Current password" input_type="password" required=true />
            <TextField
                id="new-password"
                label="New password"
                input_type="password"
                required=true
                value=new_password
                on_input=Callback::new(move |value: String| new_password.set(value))
            />
            <TextField
                id="confirm-password"
                label="Confirm new password"
                input_type="password"
                required=true
                value=confirmation
                error=error
                on_input=Callback::new(move |value: String| confirmation.set(value))
            />
            <Button ui_slot="submit" on_click=Callback::new(submit)>"Save"</Button>
        </Stack>
    }
}

fn account_dialog_body(dialog: AccountDialog, close: Callback<()>) -> View {
    match dialog {
        AccountDialog::ChangePassword => view! { <ChangePasswordForm on_done=close /> }.into_view(),
        AccountDialog::LoginAttempts => view! {
            <DataTable aria_label="Login attempts" compact=true>
                <TableHead>
                    <TableRow>
                        <TableHeaderCell>"IP address"</TableHeaderCell>
                        <TableHeaderCell>"Client"</TableHeaderCell>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                    </TableRow>
                </TableHead>
                <TableBody>
                    {LOGIN_ATTEMPTS
                        .into_iter()
                        .map(|(address, client, time)| {
                            view! {
                                <TableRow>
                                    <TableCell>{address}</TableCell>
                                    <TableCell>{client}</TableCell>
                                    <TableCell>{time}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </DataTable>
        }
        .into_view(),
        AccountDialog::ChangeProfilePicture => view! {
            <Stack>
                <Icon icon=IconName::UserCircle size=IconSize::Lg />
                <TextField id="profile-picture" label="Profile picture" input_type="file" />
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    "PNG or JPG, up to 2 MB."
                </Text>
            </Stack>
        }
        .into_view(),
        AccountDialog::MySettings => view! {
            <Stack>
                <TextField id="settings-name" label="Display name" value="Admin" />
                <TextField id="settings-email" label="Email" input_type="email" value="admin@dealer365.com" />
            </Stack>
        }
        .into_view(),
        AccountDialog::SignOut => ().into_view(),
    }
}

#[component]
fn UserMenu() -> impl IntoView {
    let runtime = use_shell_runtime();
    let language = runtime.language();
    let (container, open) = use_navbar_dropdown(runtime, NavbarDropdown::User);
    let dialog = create_rw_signal(None::<AccountDialog>);
    let close = Callback::new(move |_: ()| dialog.set(None));

    let content_open =
        Signal::derive(move || dialog.get().is_some_and(|dialog| dialog != AccountDialog::SignOut));
    let sign_out_open = Signal::derive(move || dialog.get() == Some(AccountDialog::SignOut));

    view! {
        <div node_ref=container data-ui-slot="user">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Sm
                leading_icon=IconName::UserCircle
                trailing_icon=IconName::ChevronDown
                aria_haspopup="menu"
                aria_expanded=open
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(ShellAction::ToggleDropdown(NavbarDropdown::User));
                })
            >
                "Admin"
            </Button>
            <Show when=move || open.get()>
                <MenuSurface aria_label="User menu" align_end=true>
                    {AccountDialog::MENU
                        .into_iter()
                        .map(|item| {
                            let separator = (item == AccountDialog::SignOut).then(|| view! { <MenuSeparator /> });
                            view! {
                                {separator}
                                <MenuItem
                                    leading_icon=item.icon()
                                    on_click=Callback::new(move |_| {
                                        runtime.dispatch_action(ShellAction::CloseDropdown(NavbarDropdown::User));
                                        dialog.set(Some(item));
                                    })
                                >
                                    {move || {
                                        if item == AccountDialog::SignOut {
                                            language.get().text(UiText::SignOut)
                                        } else {
                                            item.label()
                                        }
                                    }}
                                </MenuItem>
                            }
                        })
                        .collect_view()}
                </MenuSurface>
            </Show>
            <ContentModal
                open=content_open
                title=Signal::derive(move || dialog.get().map(AccountDialog::label).unwrap_or_default().to_string())
                on_close=close
            >
                {move || dialog.get().map(|current| account_dialog_body(current, close))}
            </ContentModal>
            <ConfirmModal
                open=sign_out_open
                title="Sign out"
                message="You will need to sign in again to continue."
                tone=ConfirmTone::Destructive
                confirm_label="Sign out"
                on_confirm=Callback::new(move |_| {
                    logging::log!("sign out requested");
                    dialog.set(None);
                })
                on_cancel=close
            />
        </div>
    }
}

#[component]
/// Fixed top bar: brand, global search, language, theme, notifications, and the user menu.
pub fn Navbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let theme = runtime.theme();
    let language = runtime.language();

    view! {
        <header class="admin-navbar" data-ui-kind="navbar">
            <a href="/" class="admin-navbar-brand" data-ui-slot="brand" aria-label="Dealer 365 home">
                <Icon icon=IconName::Car size=IconSize::Lg />
                <span>"DEALER"</span>
                <span data-ui-slot="brand-number">"365"</span>
            </a>
            <GlobalSearch />
            <div class="admin-navbar-actions" data-ui-slot="actions">
                <LanguageMenu />
                {move || {
                    let current = theme.get();
                    view! {
                        <IconButton
                            icon=if current == Theme::Dark { IconName::Sun } else { IconName::Moon }
                            aria_label=language.get().text(UiText::ToggleTheme)
                            ui_slot="theme"
                            on_click=Callback::new(move |_| runtime.dispatch_action(ShellAction::ToggleTheme))
                        />
                    }
                }}
                <span data-ui-slot="divider" aria-hidden="true"></span>
                <NotificationsMenu />
                <UserMenu />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_passwords_are_rejected_first() {
        assert_eq!(
            password_change_error("short", "other"),
            Some("Password must be at least 8 characters.")
        );
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        assert_eq!(
            password_change_error("longenough", "longenougH"),
            Some("Passwords do not match.")
        );
        assert_eq!(password_change_error("longenough", "longenough"), None);
    }

    #[test]
    fn sign_out_is_the_last_user_menu_entry() {
        assert_eq!(AccountDialog::MENU.last(), Some(&AccountDialog::SignOut));
        assert_eq!(AccountDialog::LoginAttempts.label(), "Login attempts");
    }
}
