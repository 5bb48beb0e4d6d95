use std::collections::BTreeSet;

use leptos::*;
use system_ui::prelude::*;
use table_model::header_check_state;

use super::{Controls, Preview, ToggleControl, TokenPicker};

const PERIODS: [&str; 4] = ["Daily", "Weekly", "Monthly", "Yearly"];
const DEALER_TYPES: [(&str, BadgeColor); 4] = [
    ("Basic", BadgeColor::Zinc),
    ("Premium", BadgeColor::Amber),
    ("Partner", BadgeColor::Sky),
    ("Group", BadgeColor::Violet),
];

#[component]
pub(super) fn ButtonStory() -> impl IntoView {
    let variant = create_rw_signal(ButtonVariant::Default);
    let size = create_rw_signal(ButtonSize::Md);
    let disabled = create_rw_signal(false);
    let with_icon = create_rw_signal(true);
    let clicks = create_rw_signal(0_u32);
    let on_click = Callback::new(move |_: ev::MouseEvent| clicks.update(|count| *count += 1));

    view! {
        <Controls>
            <TokenPicker
                id="button-variant"
                label="Variant"
                items=&ButtonVariant::ALL
                token=ButtonVariant::token
                value=variant
            />
            <TokenPicker id="button-size" label="Size" items=&ButtonSize::ALL token=ButtonSize::token value=size />
            <ToggleControl label="Leading icon" value=with_icon />
            <ToggleControl label="Disabled" value=disabled />
        </Controls>
        <Preview>
            <Cluster gap=LayoutGap::Sm>
                {move || {
                    let disabled = Signal::derive(move || disabled.get());
                    if size.get() == ButtonSize::Icon {
                        view! {
                            <Button variant=variant.get() size=ButtonSize::Icon aria_label="Create" disabled on_click>
                                <Icon icon=IconName::Plus />
                            </Button>
                        }
                    } else if with_icon.get() {
                        view! {
                            <Button variant=variant.get() size=size.get() leading_icon=IconName::Plus disabled on_click>
                                "Create dealer"
                            </Button>
                        }
                    } else {
                        view! {
                            <Button variant=variant.get() size=size.get() disabled on_click>
                                "Create dealer"
                            </Button>
                        }
                    }
                }}
            </Cluster>
            <Text tone=TextTone::Secondary>{move || format!("Clicked {} times", clicks.get())}</Text>
        </Preview>
        <Preview label="All variants">
            <Cluster gap=LayoutGap::Sm>
                {ButtonVariant::ALL
                    .into_iter()
                    .map(|variant| view! { <Button variant>{variant.token()}</Button> })
                    .collect_view()}
            </Cluster>
        </Preview>
    }
}

#[component]
pub(super) fn IconButtonStory() -> impl IntoView {
    let variant = create_rw_signal(ButtonVariant::Ghost);
    let pressed = create_rw_signal(false);
    let last = create_rw_signal::<Option<&'static str>>(None);
    let actions = [
        (IconName::Search, "Search"),
        (IconName::Bell, "Notifications"),
        (IconName::Settings, "Settings"),
        (IconName::Trash, "Delete"),
    ];

    view! {
        <Controls>
            <TokenPicker
                id="icon-button-variant"
                label="Variant"
                items=&ButtonVariant::ALL
                token=ButtonVariant::token
                value=variant
            />
            <ToggleControl label="Pressed" value=pressed />
        </Controls>
        <Preview>
            <Cluster gap=LayoutGap::Sm>
                {move || {
                    actions
                        .into_iter()
                        .map(|(icon, label)| {
                            view! {
                                <IconButton
                                    icon
                                    aria_label=label
                                    variant=variant.get()
                                    pressed=Signal::derive(move || pressed.get())
                                    on_click=Callback::new(move |_| last.set(Some(label)))
                                />
                            }
                        })
                        .collect_view()
                }}
            </Cluster>
            <Text tone=TextTone::Secondary>
                {move || match last.get() {
                    Some(label) => format!("Last action: {label}"),
                    None => "No action yet".to_string(),
                }}
            </Text>
        </Preview>
    }
}

#[component]
pub(super) fn TextFieldStory() -> impl IntoView {
    let value = create_rw_signal(String::new());
    let required = create_rw_signal(true);
    let disabled = create_rw_signal(false);
    let with_icon = create_rw_signal(false);
    let error = Signal::derive(move || {
        (required.get() && value.get().trim().is_empty()).then(|| "Dealer code is required".to_string())
    });

    view! {
        <Controls>
            <ToggleControl label="Required" value=required />
            <ToggleControl label="Leading icon" value=with_icon />
            <ToggleControl label="Disabled" value=disabled />
        </Controls>
        <Preview>
            {move || {
                let on_input = Callback::new(move |next: String| value.set(next));
                let disabled = Signal::derive(move || disabled.get());
                let current = Signal::derive(move || value.get());
                if with_icon.get() {
                    view! {
                        <TextField
                            id="story-text-field"
                            label="Dealer code"
                            description="Shown on invoices and reports."
                            placeholder="DLR-0001"
                            required=required.get()
                            leading_icon=IconName::Search
                            error
                            value=current
                            disabled
                            on_input
                        />
                    }
                } else {
                    view! {
                        <TextField
                            id="story-text-field"
                            label="Dealer code"
                            description="Shown on invoices and reports."
                            placeholder="DLR-0001"
                            required=required.get()
                            error
                            value=current
                            disabled
                            on_input
                        />
                    }
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn CheckboxStory() -> impl IntoView {
    let children = create_rw_signal([true, false]);
    let disabled = create_rw_signal(false);
    let parent_state = Signal::derive(move || {
        let checked = children.get().iter().filter(|checked| **checked).count();
        header_check_state(checked, 2)
    });

    let child = move |index: usize, label: &'static str| {
        view! {
            <Checkbox
                label=label
                state=Signal::derive(move || CheckState::from(children.get()[index]))
                disabled=Signal::derive(move || disabled.get())
                on_toggle=Callback::new(move |next| children.update(|children| children[index] = next))
            />
        }
    };

    view! {
        <Controls>
            <ToggleControl label="Disabled" value=disabled />
        </Controls>
        <Preview>
            <Stack gap=LayoutGap::Sm>
                <Checkbox
                    label="All branches"
                    state=parent_state
                    disabled=Signal::derive(move || disabled.get())
                    on_toggle=Callback::new(move |next| children.set([next, next]))
                />
                <Stack gap=LayoutGap::Sm layout_class="showcase-indent">
                    {child(0, "Seoul branch")}
                    {child(1, "Busan branch")}
                </Stack>
            </Stack>
            <Text tone=TextTone::Secondary>
                {move || format!("Parent state: {}", parent_state.get().token())}
            </Text>
        </Preview>
    }
}

#[component]
pub(super) fn SwitchStory() -> impl IntoView {
    let enabled = create_rw_signal(true);
    let disabled = create_rw_signal(false);

    view! {
        <Controls>
            <ToggleControl label="Disabled" value=disabled />
        </Controls>
        <Preview>
            <Switch
                label="Email notifications"
                aria_label="Email notifications"
                checked=Signal::derive(move || enabled.get())
                disabled=Signal::derive(move || disabled.get())
                on_toggle=Callback::new(move |next| enabled.set(next))
            />
            <Text tone=TextTone::Secondary>
                {move || if enabled.get() { "Notifications on" } else { "Notifications off" }}
            </Text>
        </Preview>
    }
}

#[component]
pub(super) fn RadioStory() -> impl IntoView {
    let value = create_rw_signal(PERIODS[0].to_string());
    let disabled = create_rw_signal(false);

    view! {
        <Controls>
            <ToggleControl label="Disabled" value=disabled />
        </Controls>
        <Preview>
            <RadioGroup
                name="story-period"
                aria_label="Reporting period"
                options=PERIODS.into_iter().map(SelectOption::new).collect()
                value=Signal::derive(move || value.get())
                disabled=Signal::derive(move || disabled.get())
                on_change=Callback::new(move |next| value.set(next))
            />
            <Text tone=TextTone::Secondary>{move || format!("Period: {}", value.get())}</Text>
        </Preview>
    }
}

#[component]
pub(super) fn SelectStory() -> impl IntoView {
    let value = create_rw_signal::<Option<String>>(None);
    let required = create_rw_signal(false);
    let disabled = create_rw_signal(false);
    let error = Signal::derive(move || {
        (required.get() && value.get().is_none()).then(|| "Choose a dealer type".to_string())
    });
    let options = move || {
        DEALER_TYPES
            .into_iter()
            .map(|(label, _)| SelectOption::new(label))
            .chain(std::iter::once(SelectOption::new("Retired").disabled()))
            .collect::<Vec<_>>()
    };

    view! {
        <Controls>
            <ToggleControl label="Required" value=required />
            <ToggleControl label="Disabled" value=disabled />
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                on_click=Callback::new(move |_| value.set(None))
            >
                "Reset"
            </Button>
        </Controls>
        <Preview>
            {move || {
                view! {
                    <SelectField
                        id="story-select"
                        label="Dealer type"
                        placeholder="Select a type"
                        options=options()
                        required=required.get()
                        error
                        value=Signal::derive(move || value.get())
                        disabled=Signal::derive(move || disabled.get())
                        on_change=Callback::new(move |next| value.set(Some(next)))
                    />
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn MultiSelectStory() -> impl IntoView {
    let selected = create_rw_signal(BTreeSet::from(["Premium".to_string()]));
    let options = DEALER_TYPES
        .into_iter()
        .map(|(label, color)| SelectOption::new(label).color(color))
        .collect::<Vec<_>>();

    view! {
        <Preview>
            <MultiSelectDropdown
                label="Dealer Type"
                options
                selected=Signal::derive(move || selected.get())
                on_toggle=Callback::new(move |value: String| {
                    selected.update(|selected| {
                        if !selected.remove(&value) {
                            selected.insert(value);
                        }
                    });
                })
                on_clear=Callback::new(move |_| selected.update(BTreeSet::clear))
            />
            <Text tone=TextTone::Secondary>
                {move || {
                    let selected = selected.get();
                    if selected.is_empty() {
                        "No filter applied".to_string()
                    } else {
                        selected.into_iter().collect::<Vec<_>>().join(", ")
                    }
                }}
            </Text>
        </Preview>
    }
}

#[component]
pub(super) fn BadgeStory() -> impl IntoView {
    let color = create_rw_signal(BadgeColor::Emerald);
    let removable = create_rw_signal(true);
    let removed = create_rw_signal(false);

    view! {
        <Controls>
            <TokenPicker id="badge-color" label="Colour" items=&BadgeColor::ALL token=BadgeColor::token value=color />
            <ToggleControl label="Removable" value=removable />
        </Controls>
        <Preview>
            {move || {
                if removed.get() {
                    view! {
                        <Button
                            variant=ButtonVariant::Link
                            on_click=Callback::new(move |_| removed.set(false))
                        >
                            "Restore badge"
                        </Button>
                    }
                    .into_view()
                } else if removable.get() {
                    view! {
                        <Badge
                            color=color.get()
                            remove_label="Remove status"
                            on_remove=Callback::new(move |_| removed.set(true))
                        >
                            "Active"
                        </Badge>
                    }
                    .into_view()
                } else {
                    view! { <Badge color=color.get() leading_icon=IconName::Check>"Active"</Badge> }
                        .into_view()
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn AlertStory() -> impl IntoView {
    let kind = create_rw_signal(AlertKind::Info);
    let with_title = create_rw_signal(true);
    let dismissed = create_rw_signal(false);

    view! {
        <Controls>
            <TokenPicker id="alert-kind" label="Kind" items=&AlertKind::ALL token=AlertKind::token value=kind />
            <ToggleControl label="Title" value=with_title />
        </Controls>
        <Preview>
            {move || {
                if dismissed.get() {
                    return view! {
                        <Button
                            variant=ButtonVariant::Link
                            on_click=Callback::new(move |_| dismissed.set(false))
                        >
                            "Show alert again"
                        </Button>
                    }
                    .into_view();
                }
                let on_dismiss = Callback::new(move |_: ()| dismissed.set(true));
                if with_title.get() {
                    view! {
                        <Alert kind=kind.get() title="Import finished" on_dismiss>
                            "80 dealers were imported from the spreadsheet."
                        </Alert>
                    }
                    .into_view()
                } else {
                    view! {
                        <Alert kind=kind.get() on_dismiss>
                            "80 dealers were imported from the spreadsheet."
                        </Alert>
                    }
                    .into_view()
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn EmptyStateStory() -> impl IntoView {
    let icon = create_rw_signal(IconName::TableCells);

    view! {
        <Controls>
            <TokenPicker id="empty-state-icon" label="Icon" items=&IconName::ALL token=IconName::token value=icon />
        </Controls>
        <Preview>
            {move || {
                view! {
                    <EmptyState icon=icon.get() title="No dealers match these filters">
                        <Text tone=TextTone::Secondary>"Clear a filter or change the search term."</Text>
                    </EmptyState>
                }
            }}
        </Preview>
    }
}
