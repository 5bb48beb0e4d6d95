use std::collections::BTreeSet;

use table_model::CheckState;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One choice offered by [`SelectField`], [`MultiSelectDropdown`], or [`RadioGroup`].
pub struct SelectOption {
    /// Value reported through change callbacks.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Badge colour used when the option is shown as a selected tag.
    pub color: Option<BadgeColor>,
    /// Whether the option can be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Option whose label equals its value.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            color: None,
            disabled: false,
        }
    }

    /// Overrides the visible label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the tag colour.
    pub fn color(mut self, color: BadgeColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Marks the option as unavailable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Radio choices share the option shape of the select controls.
pub type RadioOption = SelectOption;

fn selected_label(options: &[SelectOption], value: Option<&str>) -> Option<String> {
    let value = value?;
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.clone())
}

/// Selected options in option order, skipping values that are not offered.
fn selected_options(options: &[SelectOption], selected: &BTreeSet<String>) -> Vec<SelectOption> {
    options
        .iter()
        .filter(|option| selected.contains(&option.value))
        .cloned()
        .collect()
}

#[component]
/// Shared button primitive with variant, size, and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_haspopup: Option<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-button", layout_class);
    view! {
        <button
            type=button_type.unwrap_or("button")
            class=class
            id=id
            aria-label=move || {
                let label = aria_label.get();
                (!label.is_empty()).then_some(label)
            }
            aria-expanded=move || aria_expanded.get().to_string()
            aria-haspopup=aria_haspopup
            title=move || {
                let title = title.get();
                (!title.is_empty()).then_some(title)
            }
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Square icon-only button. `aria_label` is required because there is no visible text.
pub fn IconButton(
    icon: IconName,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(default = ButtonVariant::Ghost)] variant: ButtonVariant,
    #[prop(default = IconSize::Sm)] icon_size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title_label = aria_label.clone();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title_label.get()
            aria-pressed=move || pressed.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=ButtonSize::Icon.token()
            data-ui-pressed=move || bool_token(pressed.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=icon_size />
        </button>
    }
}

#[component]
/// Labeled text input with description, error message, and required marker.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let message_id = format!("{id}-message");
    let has_message = description.is_some();

    view! {
        <div
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-invalid=move || bool_token(error.get().is_some())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=id.clone()>
                        {label}
                        {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
                    </label>
                }
            })}
            <div data-ui-slot="control">
                {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
                <input
                    id=id.clone()
                    node_ref=node_ref
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    autocomplete=autocomplete
                    required=required
                    aria-required=required.to_string()
                    aria-invalid=move || error.get().is_some().to_string()
                    aria-describedby=move || {
                        (has_message || error.get().is_some()).then(|| message_id.clone())
                    }
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&ev));
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                    on:focus=move |_| {
                        if let Some(on_focus) = on_focus.as_ref() {
                            on_focus.call(());
                        }
                    }
                />
            </div>
            {move || match error.get() {
                Some(error) => view! {
                    <p data-ui-slot="error" id=format!("{id}-message") role="alert">{error}</p>
                }
                .into_view(),
                None => description
                    .clone()
                    .map(|description| {
                        view! {
                            <p data-ui-slot="description" id=format!("{id}-message")>{description}</p>
                        }
                    })
                    .into_view(),
            }}
        </div>
    }
}

#[component]
/// Tri-state checkbox. Indeterminate is rendered, never produced by a click.
///
/// `on_toggle` receives the checked value the user asked for: `false` when the box is currently
/// checked, `true` otherwise.
pub fn Checkbox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] state: MaybeSignal<CheckState>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let state = Signal::derive(move || state.get());

    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=move || state.get().token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| ev.stop_propagation()
        >
            <input
                type="checkbox"
                aria-label=aria_label
                aria-checked=move || match state.get() {
                    CheckState::Checked => "true",
                    CheckState::Indeterminate => "mixed",
                    CheckState::Unchecked => "false",
                }
                prop:checked=move || state.get() == CheckState::Checked
                prop:indeterminate=move || state.get() == CheckState::Indeterminate
                disabled=move || disabled.get()
                on:change=move |_| {
                    if let Some(on_toggle) = on_toggle.as_ref() {
                        on_toggle.call(state.get_untracked() != CheckState::Checked);
                    }
                }
            />
            <span data-ui-slot="box" aria-hidden="true">
                {move || match state.get() {
                    CheckState::Checked => view! { <Icon icon=IconName::Check size=IconSize::Xs /> }.into_view(),
                    CheckState::Indeterminate => view! { <Icon icon=IconName::Minus size=IconSize::Xs /> }.into_view(),
                    CheckState::Unchecked => ().into_view(),
                }}
            </span>
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </label>
    }
}

#[component]
/// Shared switch with explicit `role="switch"` semantics.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <div class=merge_layout_class("ui-switch-field", layout_class)>
            <button
                type="button"
                class="ui-switch"
                role="switch"
                aria-label=move || aria_label.get()
                aria-checked=move || checked.get().to_string()
                disabled=move || disabled.get()
                data-ui-primitive="true"
                data-ui-kind="switch"
                data-ui-selected=move || bool_token(checked.get())
                data-ui-disabled=move || bool_token(disabled.get())
                on:click=move |_| handle_toggle()
                on:keydown=move |ev| match ev.key().as_str() {
                    " " | "Enter" => {
                        ev.prevent_default();
                        handle_toggle();
                    }
                    _ => {}
                }
            >
                <span data-ui-slot="track">
                    <span data-ui-slot="thumb"></span>
                </span>
            </button>
            {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
        </div>
    }
}

#[component]
/// Radio button group bound to one selected value.
pub fn RadioGroup(
    #[prop(optional)] layout_class: Option<&'static str>,
    name: &'static str,
    options: Vec<RadioOption>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let radios = options
        .into_iter()
        .map(|option| {
            let option_value = option.value.clone();
            let checked_value = option.value.clone();
            let option_disabled = option.disabled;
            view! {
                <label
                    data-ui-slot="option"
                    data-ui-selected=move || bool_token(value.get() == checked_value)
                >
                    <input
                        type="radio"
                        name=name
                        value=option.value.clone()
                        prop:checked={
                            let option_value = option.value.clone();
                            move || value.get() == option_value
                        }
                        disabled=move || option_disabled || disabled.get()
                        on:change=move |_| {
                            if let Some(on_change) = on_change.as_ref() {
                                on_change.call(option_value.clone());
                            }
                        }
                    />
                    <span data-ui-slot="label">{option.label}</span>
                </label>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-radio-group", layout_class)
            role="radiogroup"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="radio-group"
        >
            {radios}
        </div>
    }
}

#[component]
/// Single-value select rendered as a custom listbox. Closes on outside click.
pub fn SelectField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    options: Vec<SelectOption>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] value: MaybeSignal<Option<String>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let container = create_node_ref::<html::Div>();
    use_outside_click(container, open.into(), Callback::new(move |_| open.set(false)));

    let options = store_value(options);
    let value = Signal::derive(move || value.get());
    let error = Signal::derive(move || error.get());
    let placeholder = placeholder.unwrap_or_else(|| "Select".to_string());
    let listbox_id = format!("{id}-listbox");
    let current_label = move || {
        options
            .with_value(|options| selected_label(options, value.get().as_deref()))
            .unwrap_or_else(|| placeholder.clone())
    };

    view! {
        <div
            class=merge_layout_class("ui-select", layout_class)
            node_ref=container
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            data-ui-invalid=move || bool_token(error.get().is_some())
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=id.clone()>
                        {label}
                        {required.then(|| view! { <span data-ui-slot="required" aria-hidden="true">"*"</span> })}
                    </label>
                }
            })}
            <button
                type="button"
                id=id.clone()
                data-ui-slot="trigger"
                aria-haspopup="listbox"
                aria-controls=listbox_id.clone()
                aria-expanded=move || open.get().to_string()
                data-ui-placeholder=move || bool_token(value.get().is_none())
                disabled=move || disabled.get()
                on:click=move |_| open.update(|open| *open = !*open)
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        open.set(false);
                    }
                }
            >
                <span data-ui-slot="value">{current_label}</span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </button>
            <Show when=move || open.get() fallback=|| ()>
                <ul data-ui-slot="listbox" role="listbox" id=listbox_id.clone()>
                    {options.with_value(|options| {
                        options
                            .iter()
                            .cloned()
                            .map(|option| {
                                let choice = option.value.clone();
                                let is_selected = Signal::derive({
                                    let choice = choice.clone();
                                    move || value.get().as_deref() == Some(choice.as_str())
                                });
                                view! {
                                    <li
                                        role="option"
                                        aria-selected=move || is_selected.get().to_string()
                                        aria-disabled=option.disabled.to_string()
                                        data-ui-slot="option"
                                        data-ui-selected=move || bool_token(is_selected.get())
                                        on:click=move |_| {
                                            if option.disabled {
                                                return;
                                            }
                                            open.set(false);
                                            if let Some(on_change) = on_change.as_ref() {
                                                on_change.call(choice.clone());
                                            }
                                        }
                                    >
                                        {option.label.clone()}
                                    </li>
                                }
                            })
                            .collect_view()
                    })}
                </ul>
            </Show>
            {move || error.get().map(|error| view! { <p data-ui-slot="error" role="alert">{error}</p> })}
        </div>
    }
}

#[component]
/// Multi-value dropdown showing the selection as removable tags.
///
/// `on_toggle` flips a single value (option rows and tag remove buttons both use it);
/// `on_clear` empties the selection. The menu closes on outside click.
pub fn MultiSelectDropdown(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
    #[prop(into)] selected: MaybeSignal<BTreeSet<String>>,
    #[prop(optional)] on_toggle: Option<Callback<String>>,
    #[prop(optional)] on_clear: Option<Callback<()>>,
) -> impl IntoView {
    let open = create_rw_signal(false);
    let container = create_node_ref::<html::Div>();
    use_outside_click(container, open.into(), Callback::new(move |_| open.set(false)));

    let options = store_value(options);
    let selected = Signal::derive(move || selected.get());
    let toggle = move |value: String| {
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(value);
        }
    };
    let trigger_label = label.clone();

    view! {
        <div
            class=merge_layout_class("ui-multi-select", layout_class)
            node_ref=container
            data-ui-primitive="true"
            data-ui-kind="multi-select"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
        >
            <div
                data-ui-slot="trigger"
                role="button"
                tabindex="0"
                aria-haspopup="listbox"
                aria-expanded=move || open.get().to_string()
                aria-label=trigger_label
                on:click=move |_| open.update(|open| *open = !*open)
                on:keydown=move |ev| match ev.key().as_str() {
                    "Enter" | " " => {
                        ev.prevent_default();
                        open.update(|open| *open = !*open);
                    }
                    "Escape" => open.set(false),
                    _ => {}
                }
            >
                <span data-ui-slot="label">{label.clone()}</span>
                <span data-ui-slot="tags">
                    {move || {
                        let chosen = options.with_value(|options| selected_options(options, &selected.get()));
                        chosen
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                view! {
                                    <Badge
                                        color=option.color.unwrap_or_default()
                                        remove_label=format!("Remove {}", option.label)
                                        on_remove=Callback::new(move |_| toggle(value.clone()))
                                    >
                                        {option.label.clone()}
                                    </Badge>
                                }
                            })
                            .collect_view()
                    }}
                </span>
                <Icon icon=IconName::ChevronDown size=IconSize::Sm />
            </div>
            <Show when=move || open.get() fallback=|| ()>
                <div data-ui-slot="menu" role="listbox" aria-multiselectable="true">
                    {options.with_value(|options| {
                        options
                            .iter()
                            .cloned()
                            .map(|option| {
                                let value = option.value.clone();
                                let probe = option.value.clone();
                                let state = Signal::derive(move || {
                                    if selected.get().contains(&probe) {
                                        CheckState::Checked
                                    } else {
                                        CheckState::Unchecked
                                    }
                                });
                                view! {
                                    <div data-ui-slot="option" role="option">
                                        <Checkbox
                                            state=state
                                            label=option.label.clone()
                                            disabled=option.disabled
                                            on_toggle=Callback::new(move |_| toggle(value.clone()))
                                        />
                                    </div>
                                }
                            })
                            .collect_view()
                    })}
                    <Show when=move || !selected.get().is_empty() fallback=|| ()>
                        <Button
                            variant=ButtonVariant::Link
                            size=ButtonSize::Sm
                            ui_slot="clear"
                            on_click=Callback::new(move |_| {
                                if let Some(on_clear) = on_clear.as_ref() {
                                    on_clear.call(());
                                }
                            })
                        >
                            "Clear all"
                        </Button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("DLR").label("Dealer"),
            SelectOption::new("DGP").label("Dealer group").color(BadgeColor::Blue),
            SelectOption::new("HQ").disabled(),
        ]
    }

    #[test]
    fn selected_label_resolves_value_to_option_label() {
        assert_eq!(
            selected_label(&options(), Some("DGP")),
            Some("Dealer group".to_string())
        );
        assert_eq!(selected_label(&options(), Some("missing")), None);
        assert_eq!(selected_label(&options(), None), None);
    }

    #[test]
    fn selected_options_follow_option_order_and_skip_unknown_values() {
        let selected: BTreeSet<String> = ["HQ", "DLR", "ghost"].iter().map(|v| v.to_string()).collect();
        let values: Vec<String> = selected_options(&options(), &selected)
            .into_iter()
            .map(|option| option.value)
            .collect();
        assert_eq!(values, vec!["DLR".to_string(), "HQ".to_string()]);
    }

    #[test]
    fn option_builder_defaults_label_to_value() {
        let option = SelectOption::new("Active");
        assert_eq!(option.label, "Active");
        assert_eq!(option.color, None);
        assert!(!option.disabled);
    }
}
