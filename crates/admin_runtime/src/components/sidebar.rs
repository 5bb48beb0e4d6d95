use system_ui::{ButtonVariant, EmptyState};

use super::*;
use crate::menu::{menu_key, FavoriteEntry, MenuItem};

#[component]
/// One row of the admin menu at level 1, 2, or 3.
fn SidebarItem(
    level: u8,
    #[prop(into)] label: String,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] accent: bool,
    #[prop(optional)] chevron: bool,
    #[prop(optional)] location: bool,
    /// Set when the item owns a submenu.
    #[prop(optional_no_strip)]
    expanded: Option<Signal<bool>>,
    /// Set when the item shows a bookmark toggle.
    #[prop(optional_no_strip)]
    favorite: Option<Signal<bool>>,
    #[prop(optional_no_strip)] on_toggle_favorite: Option<Callback<()>>,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let title = label.clone();
    let bookmark = favorite.map(|favorite| {
        let aria_label = format!("Toggle favorite {label}");
        move || {
            let is_favorite = favorite.get();
            view! {
                <IconButton
                    icon=if is_favorite { IconName::BookmarkSolid } else { IconName::Bookmark }
                    aria_label=aria_label.clone()
                    ui_slot="favorite"
                    icon_size=IconSize::Xs
                    pressed=is_favorite
                    on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        if let Some(toggle) = on_toggle_favorite.as_ref() {
                            toggle.call(());
                        }
                    })
                />
            }
        }
    });
    let trailing = expanded.map(|expanded| {
        move || {
            view! {
                <Icon
                    icon=if expanded.get() { IconName::ChevronUp } else { IconName::ChevronDown }
                    size=IconSize::Sm
                />
            }
        }
    });

    view! {
        <div
            class="admin-sidebar-item"
            role="button"
            tabindex="0"
            title=title
            data-ui-level=level.to_string()
            data-ui-active=move || if active.get() { "true" } else { "false" }
            data-ui-accent=if accent { "true" } else { "false" }
            aria-expanded=move || expanded.map(|expanded| expanded.get().to_string())
            on:click=move |_| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(());
                }
            }
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(());
                    }
                }
            }
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Md /> })}
            <span data-ui-slot="label">{label}</span>
            {location.then(|| view! { <Icon icon=IconName::MapPin size=IconSize::Xs /> })}
            {bookmark}
            {trailing}
            {chevron.then(|| view! { <Icon icon=IconName::ChevronRight size=IconSize::Sm /> })}
        </div>
    }
}

fn top_level_item(item: MenuItem) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let key = menu_key(None, &item.label);
    let has_submenu = item.has_submenu();
    let href = item.href.clone();

    let expanded = has_submenu.then(|| {
        let key = key.clone();
        Signal::derive(move || state.with(|state| state.is_expanded(&key)))
    });
    let active = {
        let href = href.clone();
        Signal::derive(move || {
            href.as_deref()
                .is_some_and(|href| state.with(|state| state.active_path == href))
        })
    };
    let (favorite, on_toggle_favorite) = if item.bookmarkable {
        let label = item.label.clone();
        (
            Some(runtime.is_favorite(item.label.clone())),
            Some(Callback::new(move |_: ()| runtime.toggle_favorite(label.clone()))),
        )
    } else {
        (None, None)
    };
    let on_click = Callback::new(move |_: ()| {
        if has_submenu {
            runtime.dispatch_action(ShellAction::ToggleMenu { key: key.clone() });
        } else if let Some(href) = href.as_ref() {
            runtime.navigate(href.clone());
        }
    });

    let parent = item.label.clone();
    let submenu = has_submenu.then(|| {
        let open = expanded.unwrap_or_else(|| Signal::derive(|| false));
        let children = item
            .children
            .iter()
            .cloned()
            .map(|child| second_level_item(&parent, child))
            .collect_view();
        view! {
            <div data-ui-slot="submenu" data-ui-state=move || if open.get() { "open" } else { "closed" }>
                {children}
            </div>
        }
    });

    view! {
        <div data-ui-slot="menu-group">
            <SidebarItem
                level=1
                label=item.label
                icon=item.icon.unwrap_or(IconName::Square3Stack3d)
                active=active
                accent=item.accent
                chevron=item.chevron
                expanded=expanded
                favorite=favorite
                on_toggle_favorite=on_toggle_favorite
                on_click=on_click
            />
            {submenu}
        </div>
    }
}

fn second_level_item(parent: &str, item: MenuItem) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let key = menu_key(Some(parent), &item.label);
    let has_submenu = item.has_submenu();
    let expanded = has_submenu.then(|| {
        let key = key.clone();
        Signal::derive(move || state.with(|state| state.is_expanded(&key)))
    });
    let label = item.label.clone();
    let href = item.href.clone();
    let on_click = Callback::new(move |_: ()| {
        if has_submenu {
            runtime.dispatch_action(ShellAction::ToggleMenu { key: key.clone() });
        } else if let Some(href) = href.as_ref() {
            runtime.navigate(href.clone());
        }
    });

    let third_level = has_submenu.then(|| {
        let open = expanded.unwrap_or_else(|| Signal::derive(|| false));
        let children = item
            .children
            .iter()
            .cloned()
            .map(third_level_item)
            .collect_view();
        view! {
            <div data-ui-slot="submenu" data-ui-state=move || if open.get() { "open" } else { "closed" }>
                {children}
            </div>
        }
    });

    view! {
        <div data-ui-slot="menu-group">
            <SidebarItem
                level=2
                label=item.label
                accent=item.accent
                location=item.location
                expanded=expanded
                favorite=Some(runtime.is_favorite(label.clone()))
                on_toggle_favorite=Some(Callback::new(move |_| runtime.toggle_favorite(label.clone())))
                on_click=on_click
            />
            {third_level}
        </div>
    }
}

fn third_level_item(item: MenuItem) -> impl IntoView {
    let runtime = use_shell_runtime();
    let label = item.label.clone();
    let href = item.href.clone();

    view! {
        <SidebarItem
            level=3
            label=item.label
            accent=item.accent
            location=item.location
            favorite=Some(runtime.is_favorite(label.clone()))
            on_toggle_favorite=Some(Callback::new(move |_| runtime.toggle_favorite(label.clone())))
            on_click=Callback::new(move |_| {
                if let Some(href) = href.as_ref() {
                    runtime.navigate(href.clone());
                }
            })
        />
    }
}

#[component]
fn FavoriteRow(entry: FavoriteEntry) -> impl IntoView {
    let runtime = use_shell_runtime();
    let FavoriteEntry {
        label,
        parent_label,
        icon,
        href,
    } = entry;
    let remove_label = label.clone();
    let open_label = format!("Open {label}");

    view! {
        <div class="admin-sidebar-favorite" data-ui-slot="favorite">
            <IconButton
                icon=icon.unwrap_or(IconName::Bookmark)
                aria_label=open_label
                ui_slot="open"
                icon_size=IconSize::Sm
                disabled=href.is_none()
                on_click=Callback::new(move |_| {
                    if let Some(href) = href.as_ref() {
                        runtime.navigate(href.clone());
                    }
                })
            />
            <div data-ui-slot="favorite-text">
                <span data-ui-slot="label">{label}</span>
                {parent_label.map(|parent| view! { <span data-ui-slot="parent">{parent}</span> })}
            </div>
            <IconButton
                icon=IconName::BookmarkSolid
                aria_label="Remove from Favorites"
                ui_slot="remove"
                icon_size=IconSize::Sm
                on_click=Callback::new(move |_| runtime.toggle_favorite(remove_label.clone()))
            />
        </div>
    }
}

#[component]
/// Admin sidebar. Collapsed it shows top-level icons only; expanded it lists favorites and the
/// full three-level menu.
pub fn Sidebar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;
    let menu = runtime.menu;
    let open = runtime.sidebar_open();
    let language = runtime.language();

    let favorites = create_memo(move |_| {
        state.with(|state| menu.with_value(|menu| menu.favorites(&state.favorites)))
    });

    let collapsed_view = move || {
        menu.with_value(|menu| {
            menu.items()
                .iter()
                .map(|item| {
                    view! {
                        <IconButton
                            icon=item.icon.unwrap_or(IconName::Square3Stack3d)
                            aria_label=item.label.clone()
                            ui_slot="rail-item"
                            variant=ButtonVariant::Ghost
                            icon_size=IconSize::Md
                            on_click=Callback::new(move |_| runtime.set_sidebar_open(true))
                        />
                    }
                })
                .collect_view()
        })
    };

    let expanded_view = move || {
        let menu_items = menu.with_value(|menu| {
            menu.items()
                .iter()
                .cloned()
                .map(top_level_item)
                .collect_view()
        });
        view! {
            <section data-ui-slot="favorites">
                <h2 data-ui-slot="section-title">
                    {move || language.get().text(UiText::FavoritesMenu)}
                </h2>
                {move || {
                    let entries = favorites.get();
                    if entries.is_empty() {
                        view! {
                            <EmptyState
                                icon=IconName::Bookmark
                                title=language.get().text(UiText::NoFavorites).to_string()
                            />
                        }
                        .into_view()
                    } else {
                        entries
                            .into_iter()
                            .map(|entry| view! { <FavoriteRow entry=entry /> })
                            .collect_view()
                    }
                }}
            </section>
            <section data-ui-slot="admin-menu">
                <h2 data-ui-slot="section-title">
                    {move || language.get().text(UiText::AdminMenu)}
                </h2>
                {menu_items}
            </section>
        }
    };

    view! {
        <aside
            class="admin-sidebar"
            data-ui-kind="sidebar"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            style=move || format!("width: {}px;", state.with(|state| state.content_offset_px()))
        >
            <nav data-ui-slot="scroll" aria-label="Admin menu">
                <Show when=move || open.get() fallback=collapsed_view>
                    {expanded_view}
                </Show>
            </nav>
            <footer data-ui-slot="footer">
                {move || {
                    let is_open = open.get();
                    view! {
                        <IconButton
                            icon=if is_open { IconName::ChevronDoubleLeft } else { IconName::ChevronDoubleRight }
                            aria_label=if is_open { "Collapse sidebar" } else { "Expand sidebar" }
                            ui_slot="collapse"
                            on_click=Callback::new(move |_| runtime.dispatch_action(ShellAction::ToggleSidebar))
                        />
                    }
                }}
            </footer>
        </aside>
    }
}
