use super::*;

#[component]
/// Raised panel used for page sections and grids.
pub fn Panel(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-slot=ui_slot
            data-ui-padding=padding.token()
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}

#[component]
/// Card surface for summaries such as KPI tiles.
pub fn Card(
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            role="heading"
            aria-level=if role == TextRole::Display { "1" } else { "2" }
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Coloured tag with an optional remove button.
pub fn Badge(
    #[prop(default = BadgeColor::Zinc)] color: BadgeColor,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional, into)] remove_label: Option<String>,
    #[prop(optional)] on_remove: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-color=color.token()
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Xs /> })}
            <span data-ui-slot="label">{children()}</span>
            {on_remove.map(|on_remove| {
                view! {
                    <button
                        type="button"
                        data-ui-slot="remove"
                        aria-label=remove_label.unwrap_or_else(|| "Remove".to_string())
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_remove.call(());
                        }
                    >
                        <Icon icon=IconName::Close size=IconSize::Xs />
                    </button>
                }
            })}
        </span>
    }
}

#[component]
/// Inline alert with severity icon, optional title, and optional dismiss button.
pub fn Alert(
    #[prop(default = AlertKind::Info)] kind: AlertKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role=kind.role()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=kind.token()
        >
            <span data-ui-slot="icon">
                <Icon icon=kind.icon() size=IconSize::Md />
            </span>
            <div data-ui-slot="copy">
                {title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
                <div data-ui-slot="body">{children()}</div>
            </div>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <IconButton
                        icon=IconName::Close
                        aria_label="Dismiss"
                        ui_slot="dismiss"
                        on_click=Callback::new(move |_| on_dismiss.call(()))
                    />
                }
            })}
        </div>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <div data-ui-slot="title">{title}</div>
            {children.map(|children| view! { <div data-ui-slot="body">{children()}</div> })}
        </div>
    }
}
