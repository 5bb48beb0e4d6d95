use super::*;

const BODY_SCROLL_LOCK_ATTR: &str = "data-ui-scroll-locked";

#[component]
/// Shared overlay surface for menus and popups.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] align_end: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role.unwrap_or_else(|| "menu".to_string())
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-align=if align_end { "end" } else { "start" }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared overlay menu item primitive.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            role=role.unwrap_or_else(|| "menuitem".to_string())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            <span data-ui-slot="label">{children()}</span>
            {description.map(|text| view! { <span data-ui-slot="description">{text}</span> })}
        </button>
    }
}

#[component]
/// Shared overlay menu separator.
pub fn MenuSeparator(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-separator", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

fn set_body_scroll_lock(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let result = if locked {
        body.style().set_property("overflow", "hidden").and_then(|()| {
            body.set_attribute(BODY_SCROLL_LOCK_ATTR, "true")
        })
    } else {
        body.style()
            .remove_property("overflow")
            .and_then(|_| body.remove_attribute(BODY_SCROLL_LOCK_ATTR))
    };
    if let Err(err) = result {
        logging::warn!("modal scroll lock update failed: {err:?}");
    }
}

#[component]
/// Dialog with a title bar, scrollable body, and optional footer.
///
/// Clicking the backdrop, pressing Escape, or using the close button all call `on_close`. The
/// page body does not scroll while the dialog is open.
pub fn ContentModal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] wide: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    create_effect(move |_| set_body_scroll_lock(open.get()));
    on_cleanup(|| set_body_scroll_lock(false));

    let footer = store_value(footer);
    let children = store_value(children);

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| on_close.call(())
            >
                <div
                    class=merge_layout_class("ui-modal", layout_class)
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || title.get()
                    tabindex="-1"
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=if wide { "wide" } else { "default" }
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            on_close.call(());
                        }
                    }
                >
                    <header data-ui-slot="header">
                        <Heading role=TextRole::Title>{move || title.get()}</Heading>
                        <IconButton
                            icon=IconName::Close
                            aria_label="Close dialog"
                            ui_slot="close"
                            on_click=Callback::new(move |_| on_close.call(()))
                        />
                    </header>
                    <div data-ui-slot="body">{children.with_value(|children| children())}</div>
                    {footer
                        .with_value(|footer| footer.clone())
                        .map(|footer| view! { <footer data-ui-slot="footer">{footer.run()}</footer> })}
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Yes/no confirmation built on [`ContentModal`].
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    #[prop(optional)] tone: ConfirmTone,
    #[prop(default = "Confirm".into(), into)] confirm_label: MaybeSignal<String>,
    #[prop(default = "Cancel".into(), into)] cancel_label: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || confirm_label.get());
    let cancel_label = Signal::derive(move || cancel_label.get());
    let footer = move || {
        view! {
            <Cluster justify=LayoutJustify::End>
                <Button
                    variant=ButtonVariant::Outline
                    ui_slot="cancel"
                    on_click=Callback::new(move |_| on_cancel.call(()))
                >
                    {move || cancel_label.get()}
                </Button>
                <Button
                    variant=tone.button_variant()
                    ui_slot="confirm"
                    on_click=Callback::new(move |_| on_confirm.call(()))
                >
                    {move || confirm_label.get()}
                </Button>
            </Cluster>
        }
    };

    view! {
        <ContentModal
            layout_class="ui-confirm-modal"
            open=open
            title=title
            on_close=on_cancel
            footer=footer
        >
            <p data-ui-slot="message" data-ui-tone=tone.token()>{move || message.get()}</p>
        </ContentModal>
    }
}
