use std::collections::BTreeSet;

use admin_runtime::{use_grid_query, ContentHeader, DataGrid, GridColumn};
use leptos::*;
use leptos_meta::Title;
use system_ui::{
    Alert, AlertKind, Badge, BadgeColor, Button, ButtonVariant, Card, Checkbox, CheckState,
    Cluster, ContentModal, Grid, Heading, Icon, IconName, IconSize, LayoutGap, SelectField,
    SelectOption, Stack, Tab, TabList, Text, TextField, TextRole, TextTone,
};
use table_model::{
    ColumnDef, FilterGroup, RowId, SortDirection, TableConfig, TableRecord, TableState,
};

use crate::data::{
    self, Dealer, GrowthPeriod, EDITIONS, GROWTH_AXIS_MAX, GROWTH_FIRST_YEAR, KPI_CARDS,
};
use crate::dealer_form::{add_dealer, today_stamp, DealerField, DealerForm, DEALER_TYPES};

const CHART_WIDTH: u32 = 300;
const CHART_HEIGHT: u32 = 160;

fn dealer_config() -> TableConfig {
    TableConfig::new(vec![
        ColumnDef::new("code", "Dealer Code").width(140),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("edition", "Edition").width(80),
        ColumnDef::new("dealer_type", "Dealer Type"),
        ColumnDef::new("side_menu_set", "Side Menu Set").width(120),
        ColumnDef::new("active", "Active"),
        ColumnDef::new("creation_time", "Creation Time").width(120),
    ])
    .searchable(["code", "name"])
    .filter_group(FilterGroup::new(
        "Dealer Type",
        "dealer_type",
        ["Standard", "Premium", "Enterprise", "Basic"],
    ))
    .filter_group(FilterGroup::new(
        "Side Menu Set",
        "side_menu_set",
        ["SSC", "Genesis", "Full Set"],
    ))
    .filter_group(FilterGroup::new("Status", "active", ["Active", "Inactive"]))
}

fn strong_column(def: ColumnDef) -> GridColumn<Dealer> {
    let key = def.key.clone();
    GridColumn::new(def)
        .render(move |dealer: &Dealer| view! { <strong>{dealer.cell(&key).display()}</strong> }.into_view())
}

fn badge_column(def: ColumnDef) -> GridColumn<Dealer> {
    let key = def.key.clone();
    GridColumn::new(def).render(move |dealer: &Dealer| {
        let value = dealer.cell(&key).display();
        view! { <Badge color=data::dealer_badge_color(&key, &value)>{value}</Badge> }.into_view()
    })
}

fn dealer_columns(config: &TableConfig) -> Vec<GridColumn<Dealer>> {
    config
        .columns
        .iter()
        .cloned()
        .map(|def| match def.key.as_str() {
            "dealer_type" | "side_menu_set" | "active" => badge_column(def),
            _ => strong_column(def),
        })
        .collect()
}

fn branch_columns() -> Vec<GridColumn<Dealer>> {
    vec![
        strong_column(ColumnDef::new("code", "Branch Code")),
        GridColumn::new(ColumnDef::new("name", "Name")),
        GridColumn::new(ColumnDef::new("email", "Email")),
        badge_column(ColumnDef::new("active", "IsActive")),
    ]
}

#[component]
/// Dealer dashboard: KPI cards, trend widgets, and the dealer grid.
pub fn DealersPage() -> impl IntoView {
    let dealers = create_rw_signal(data::dealers());
    let config = store_value(dealer_config());
    let table = create_rw_signal(config.with_value(TableState::new));
    let rows = Signal::derive(move || dealers.get());
    let page = use_grid_query(rows, config, table);
    let columns = config.with_value(dealer_columns);
    let create_open = create_rw_signal(false);

    let on_create = Callback::new(move |form: DealerForm| {
        dealers.update(|dealers| match add_dealer(dealers, form, today_stamp()) {
            Ok(id) => logging::log!("created dealer {id}"),
            Err(err) => logging::warn!("dealer not created: {err}"),
        });
    });

    view! {
        <Title text="Dealers | Dealer 365" />
        <ContentHeader
            title="Dealers"
            favorite_label="Dealers"
            action_label="Create dealer"
            on_action=Callback::new(move |_| create_open.set(true))
        />
        <Stack gap=LayoutGap::Lg ui_slot="dealers-dashboard">
            <KpiCards />
            <Grid columns=3 gap=LayoutGap::Lg ui_slot="widgets">
                <GrowthTrendWidget />
                <DealerGoalWidget />
                <EditionWidget />
            </Grid>
            <DataGrid
                title="List"
                rows=rows
                page=page
                config=config
                columns=columns
                sub_columns=branch_columns()
                state=table
                search_placeholder="Search for dealer code, dealer name"
                filter_color=Callback::new(|(label, value): (String, String)| {
                    data::dealer_badge_color(&label, &value)
                })
                on_sort=Callback::new(|(key, direction): (String, SortDirection)| {
                    logging::log!("dealers sorted by {key} {}", direction.token());
                })
                on_bulk_confirm=Callback::new(|selected: BTreeSet<RowId>| {
                    logging::log!("confirmed {} dealer rows", selected.len());
                })
                on_bulk_delete=Callback::new(move |selected: BTreeSet<RowId>| {
                    dealers.update(|dealers| data::remove_dealers(dealers, &selected));
                })
            />
        </Stack>
        <CreateDealerModal open=create_open on_create=on_create />
    }
}

#[component]
fn KpiCards() -> impl IntoView {
    view! {
        <Grid columns=3 min_track_px=240 gap=LayoutGap::Lg ui_slot="kpis">
            {KPI_CARDS
                .into_iter()
                .map(|(title, count, delta, favorable)| {
                    let trend = if delta.starts_with('-') { IconName::ArrowDown } else { IconName::ArrowUp };
                    let color = if favorable { BadgeColor::Green } else { BadgeColor::Rose };
                    view! {
                        <Card ui_slot="kpi">
                            <Text role=TextRole::Label>{title}</Text>
                            <Cluster gap=LayoutGap::Sm>
                                <Heading role=TextRole::Display>{count}</Heading>
                                <Text role=TextRole::Title>"Case"</Text>
                                <Badge color=color leading_icon=trend>{format!("{delta} /vs last mo")}</Badge>
                            </Cluster>
                        </Card>
                    }
                })
                .collect_view()}
        </Grid>
    }
}

#[component]
fn PeriodTabs(id: &'static str, selected: RwSignal<GrowthPeriod>) -> impl IntoView {
    view! {
        <TabList aria_label="Reporting period">
            {GrowthPeriod::ALL
                .into_iter()
                .map(|period| {
                    view! {
                        <Tab
                            id=format!("{id}-{}", period.label())
                            controls=format!("{id}-panel")
                            selected=Signal::derive(move || selected.get() == period)
                            on_select=Callback::new(move |_| selected.set(period))
                        >
                            {period.label()}
                        </Tab>
                    }
                })
                .collect_view()}
        </TabList>
    }
}

#[component]
fn GrowthTrendWidget() -> impl IntoView {
    let period = create_rw_signal(GrowthPeriod::default());
    let points = move || {
        data::sparkline_points(&period.get().growth_series(), CHART_WIDTH, CHART_HEIGHT, GROWTH_AXIS_MAX)
    };
    let years = (0..8u16)
        .map(|offset| view! { <span>{GROWTH_FIRST_YEAR + offset}</span> })
        .collect_view();

    view! {
        <Card ui_slot="growth-trend">
            <Heading role=TextRole::Title>"Dealer Growth Trend"</Heading>
            <PeriodTabs id="growth" selected=period />
            <div id="growth-panel" role="tabpanel" data-ui-slot="chart">
                <svg
                    viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                    preserveAspectRatio="none"
                    role="img"
                    aria-label="Dealer growth trend"
                >
                    <polyline points=points fill="none" stroke="currentColor" stroke-width="2" />
                </svg>
                <div data-ui-slot="axis">{years}</div>
            </div>
        </Card>
    }
}

#[component]
fn DealerGoalWidget() -> impl IntoView {
    let period = create_rw_signal(GrowthPeriod::default());
    let percent = move || period.get().goal_percent();

    view! {
        <Card ui_slot="dealer-goal">
            <Heading role=TextRole::Title>"Active Dealer Goal"</Heading>
            <PeriodTabs id="goal" selected=period />
            <div id="goal-panel" role="tabpanel" data-ui-slot="gauge">
                <div
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || percent().to_string()
                    data-ui-slot="gauge-track"
                >
                    <div data-ui-slot="gauge-fill" style=move || format!("width: {}%;", percent())></div>
                </div>
                <Heading role=TextRole::Display>{move || format!("{}%", percent())}</Heading>
            </div>
        </Card>
    }
}

#[component]
fn EditionWidget() -> impl IntoView {
    let period = create_rw_signal(GrowthPeriod::default());

    view! {
        <Card ui_slot="editions">
            <Heading role=TextRole::Title>"Dealers by Edition"</Heading>
            <PeriodTabs id="edition" selected=period />
            <Stack gap=LayoutGap::Sm>
                {EDITIONS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (edition, volume))| {
                        let width = move || format!("width: {}%;", period.get().edition_widths()[index]);
                        view! {
                            <div data-ui-slot="edition-bar" style=width>
                                <Text role=TextRole::Label>{edition}</Text>
                                <Text role=TextRole::Caption>{volume}</Text>
                            </div>
                        }
                    })
                    .collect_view()}
            </Stack>
        </Card>
    }
}

fn form_field(
    form: RwSignal<DealerForm>,
    field: DealerField,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> View {
    view! {
        <TextField
            id=id
            label=label
            placeholder=placeholder
            required=DealerForm::is_required(field)
            input_type=input_type
            value=Signal::derive(move || form.with(|form| field.value(form).to_string()))
            on_input=Callback::new(move |value: String| form.update(|form| field.set(form, value)))
        />
    }
    .into_view()
}

#[component]
fn CreateDealerModal(open: RwSignal<bool>, on_create: Callback<DealerForm>) -> impl IntoView {
    let form = create_rw_signal(DealerForm::default());
    let error = create_rw_signal(None::<String>);

    let close = Callback::new(move |_: ()| {
        open.set(false);
        form.set(DealerForm::default());
        error.set(None);
    });

    let confirm = move |_: ev::MouseEvent| {
        let submitted = form.get_untracked();
        match submitted.validate() {
            Ok(()) => {
                on_create.call(submitted);
                close.call(());
            }
            Err(err) => {
                logging::warn!("create dealer rejected: {err}");
                error.set(Some(err.to_string()));
            }
        }
    };

    let footer = move || {
        view! {
            <Button variant=ButtonVariant::Outline on_click=Callback::new(move |_| close.call(()))>
                "Cancel"
            </Button>
            <Button on_click=Callback::new(confirm)>"Confirm"</Button>
        }
    };

    view! {
        <ContentModal open=open title="Create dealer" on_close=close footer=footer>
            <Stack>
                {move || error.get().map(|message| view! {
                    <Alert kind=AlertKind::Error title="Missing information" on_dismiss=Callback::new(move |_| error.set(None))>
                        {message}
                    </Alert>
                })}
                <SelectField
                    id="dealer-type"
                    label="Dealer type"
                    options=DEALER_TYPES.into_iter().map(SelectOption::new).collect::<Vec<_>>()
                    value=Signal::derive(move || Some(form.with(|form| form.dealer_type.clone())))
                    on_change=Callback::new(move |value: String| form.update(|form| form.dealer_type = value))
                />
                {form_field(form, DealerField::Code, "dealer-code", "Dealer code", "A11 Ad 50501", "text")}
                {form_field(form, DealerField::Name, "dealer-name", "Dealer name", "Dealer name", "text")}
                {form_field(form, DealerField::PostalCode, "postal-code", "Postal code", "12345", "text")}
                {form_field(form, DealerField::Address, "full-address", "Full address", "123 Main Street Springfield", "text")}
                {form_field(form, DealerField::Email, "representative-email", "Representative email", "email@domain.com", "email")}
                {form_field(form, DealerField::Phone, "phone-number", "Phone number", "010-0000-0000", "tel")}
                <Checkbox
                    label="Set random password"
                    state=Signal::derive(move || CheckState::from(form.with(|form| form.random_password)))
                    on_toggle=Callback::new(move |checked: bool| form.update(|form| form.random_password = checked))
                />
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    <Icon icon=IconName::Info size=IconSize::Xs />
                    " A temporary password is emailed to the representative."
                </Text>
                {form_field(form, DealerField::Website, "website-url", "Website URL", "https://", "url")}
            </Stack>
        </ContentModal>
    }
}
