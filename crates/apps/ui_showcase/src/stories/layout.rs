use leptos::*;
use system_ui::prelude::*;
use table_model::{ColumnAlign, SortDescriptor, SortDirection};

use super::{Controls, Preview, ToggleControl};

const GRID_COLUMNS: [&str; 3] = ["2", "3", "4"];
const PAGE_COUNTS: [&str; 3] = ["1", "5", "12"];
const SAMPLE_DEALERS: [(&str, &str, u32); 4] = [
    ("DLR-0001", "Gangnam Motors", 128),
    ("DLR-0002", "Harbor Auto", 64),
    ("DGP-0003", "Northline Group", 311),
    ("DLR-0004", "Riverside Cars", 97),
];

#[component]
pub(super) fn ContainersStory() -> impl IntoView {
    let columns = create_rw_signal(GRID_COLUMNS[1].to_string());

    view! {
        <Controls>
            <RadioGroup
                name="story-grid-columns"
                aria_label="Grid columns"
                options=GRID_COLUMNS.into_iter().map(SelectOption::new).collect()
                value=Signal::derive(move || columns.get())
                on_change=Callback::new(move |next| columns.set(next))
            />
        </Controls>
        <Preview label="Stack">
            <Stack gap=LayoutGap::Sm>
                <Text>"First row"</Text>
                <Text>"Second row"</Text>
                <Text>"Third row"</Text>
            </Stack>
        </Preview>
        <Preview label="Cluster">
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                <Badge color=BadgeColor::Emerald>"Active"</Badge>
                <Badge color=BadgeColor::Amber>"Pending"</Badge>
                <Badge color=BadgeColor::Red>"Inactive"</Badge>
            </Cluster>
        </Preview>
        <Preview label="Grid">
            {move || {
                let count = columns.get().parse::<u8>().unwrap_or(3);
                view! {
                    <Grid columns=count gap=LayoutGap::Sm>
                        {(1..=6)
                            .map(|cell| view! { <Card padding=LayoutPadding::Sm>{format!("Cell {cell}")}</Card> })
                            .collect_view()}
                    </Grid>
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn SurfacesStory() -> impl IntoView {
    view! {
        <Grid columns=2 gap=LayoutGap::Md>
            <Panel aria_label="Panel sample">
                <Heading>"Panel"</Heading>
                <Text tone=TextTone::Secondary>"Groups a section of a page, such as a toolbar and its table."</Text>
            </Panel>
            <Card>
                <Stack gap=LayoutGap::Sm>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>"Active dealers"</Text>
                    <Heading role=TextRole::Display>"1,284"</Heading>
                    <Text tone=TextTone::Success>"+12% vs last month"</Text>
                </Stack>
            </Card>
        </Grid>
    }
}

#[component]
pub(super) fn NavigationStory() -> impl IntoView {
    let tab = create_rw_signal(0_usize);
    let tabs = ["Overview", "Branches", "Documents"];

    view! {
        <Preview label="Breadcrumbs">
            <Breadcrumbs items=vec![
                ("Dealer Management".to_string(), None),
                ("Dealers".to_string(), Some("/".to_string())),
                ("Gangnam Motors".to_string(), None),
            ] />
        </Preview>
        <Preview label="Tabs">
            <TabList aria_label="Dealer sections">
                {tabs
                    .into_iter()
                    .enumerate()
                    .map(|(index, label)| {
                        view! {
                            <Tab
                                id=format!("story-tab-{index}")
                                controls="story-tab-panel"
                                selected=Signal::derive(move || tab.get() == index)
                                on_select=Callback::new(move |_| tab.set(index))
                            >
                                {label}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
            <div id="story-tab-panel" role="tabpanel">
                <Text tone=TextTone::Secondary>{move || format!("{} content", tabs[tab.get()])}</Text>
            </div>
        </Preview>
        <Preview label="Toolbar">
            <ToolBar aria_label="Table actions">
                <TextField id="story-toolbar-search" placeholder="Search dealers" leading_icon=IconName::Search />
                <Cluster gap=LayoutGap::Sm>
                    <Button variant=ButtonVariant::Outline leading_icon=IconName::ViewColumns>"Edit columns"</Button>
                    <Button variant=ButtonVariant::Outline leading_icon=IconName::ArrowUpTray>"Excel"</Button>
                </Cluster>
            </ToolBar>
        </Preview>
    }
}

#[component]
pub(super) fn PaginationStory() -> impl IntoView {
    let page = create_rw_signal(1_usize);
    let page_count = create_rw_signal(5_usize);

    view! {
        <Controls>
            <RadioGroup
                name="story-page-count"
                aria_label="Page count"
                options=PAGE_COUNTS.into_iter().map(SelectOption::new).collect()
                value=Signal::derive(move || page_count.get().to_string())
                on_change=Callback::new(move |next: String| {
                    let count = next.parse::<usize>().unwrap_or(1);
                    page_count.set(count);
                    page.update(|page| *page = (*page).min(count));
                })
            />
        </Controls>
        <Preview>
            <Pagination
                page=Signal::derive(move || page.get())
                page_count=Signal::derive(move || page_count.get())
                on_page_change=Callback::new(move |next| page.set(next))
            />
            <Text tone=TextTone::Secondary>
                {move || format!("Page {} of {}", page.get(), page_count.get())}
            </Text>
        </Preview>
    }
}

#[component]
pub(super) fn TableStory() -> impl IntoView {
    let compact = create_rw_signal(false);
    let sort = create_rw_signal::<Option<SortDescriptor>>(None);
    let selected = create_rw_signal::<Option<&'static str>>(None);

    let rows = move || {
        let mut rows = SAMPLE_DEALERS.to_vec();
        if let Some(sort) = sort.get() {
            match sort.key.as_str() {
                "name" => rows.sort_by_key(|(_, name, _)| *name),
                _ => rows.sort_by_key(|(_, _, users)| *users),
            }
            if sort.direction == SortDirection::Descending {
                rows.reverse();
            }
        }
        rows
    };
    let header = move |key: &'static str, label: &'static str, align: ColumnAlign| {
        view! {
            <TableHeaderCell
                align
                sortable=true
                sort=Signal::derive(move || {
                    sort.get().filter(|sort| sort.key == key).map(|sort| sort.direction)
                })
                on_sort=Callback::new(move |_| {
                    sort.update(|sort| *sort = Some(SortDescriptor::after_header_click(sort.as_ref(), key)));
                })
            >
                {label}
            </TableHeaderCell>
        }
    };

    view! {
        <Controls>
            <ToggleControl label="Compact" value=compact />
        </Controls>
        <Preview>
            {move || {
                view! {
                    <DataTable aria_label="Sample dealers" compact=compact.get()>
                        <TableHead>
                            <TableRow>
                                <TableHeaderCell width=Some(120)>"Code"</TableHeaderCell>
                                {header("name", "Name", ColumnAlign::Left)}
                                {header("users", "Users", ColumnAlign::Right)}
                            </TableRow>
                        </TableHead>
                        <TableBody>
                            {move || {
                                rows()
                                    .into_iter()
                                    .map(|(code, name, users)| {
                                        view! {
                                            <TableRow selected=Signal::derive(move || selected.get() == Some(code))>
                                                <TableCell>
                                                    <Button
                                                        variant=ButtonVariant::Link
                                                        on_click=Callback::new(move |_| selected.set(Some(code)))
                                                    >
                                                        {code}
                                                    </Button>
                                                </TableCell>
                                                <TableCell>{name}</TableCell>
                                                <TableCell align=ColumnAlign::Right>{users}</TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </DataTable>
                }
            }}
        </Preview>
    }
}

#[component]
pub(super) fn MenuStory() -> impl IntoView {
    let open = create_rw_signal(false);
    let density = create_rw_signal("Comfortable");
    let container = create_node_ref::<html::Div>();
    use_outside_click(
        container,
        Signal::derive(move || open.get()),
        Callback::new(move |_| open.set(false)),
    );

    let item = move |label: &'static str| {
        view! {
            <MenuItem
                role="menuitemradio"
                selected=Signal::derive(move || density.get() == label)
                on_click=Callback::new(move |_| {
                    density.set(label);
                    open.set(false);
                })
            >
                {label}
            </MenuItem>
        }
    };

    view! {
        <Preview>
            <div class="showcase-menu-anchor" node_ref=container>
                <Button
                    variant=ButtonVariant::Outline
                    trailing_icon=IconName::ChevronDown
                    aria_expanded=Signal::derive(move || open.get())
                    aria_haspopup="menu"
                    on_click=Callback::new(move |_| open.update(|open| *open = !*open))
                >
                    {move || format!("Density: {}", density.get())}
                </Button>
                <Show when=move || open.get() fallback=|| ()>
                    <MenuSurface role="menu" aria_label="Table density">
                        {item("Comfortable")}
                        {item("Compact")}
                        <MenuSeparator />
                        <MenuItem leading_icon=IconName::Settings disabled=true>"More settings"</MenuItem>
                    </MenuSurface>
                </Show>
            </div>
        </Preview>
    }
}

#[component]
pub(super) fn ModalStory() -> impl IntoView {
    let content_open = create_rw_signal(false);
    let confirm_open = create_rw_signal(false);
    let wide = create_rw_signal(false);
    let destructive = create_rw_signal(true);
    let answer = create_rw_signal::<Option<&'static str>>(None);
    let close_content = Callback::new(move |_: ()| content_open.set(false));

    view! {
        <Controls>
            <ToggleControl label="Wide content dialog" value=wide />
            <ToggleControl label="Destructive confirm" value=destructive />
        </Controls>
        <Preview>
            <Cluster gap=LayoutGap::Sm>
                <Button on_click=Callback::new(move |_| content_open.set(true))>"Open dialog"</Button>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |_| confirm_open.set(true))
                >
                    "Ask for confirmation"
                </Button>
            </Cluster>
            <Text tone=TextTone::Secondary>
                {move || match answer.get() {
                    Some(answer) => format!("Last answer: {answer}"),
                    None => "No answer yet".to_string(),
                }}
            </Text>
        </Preview>
        {move || {
            view! {
                <ContentModal
                    open=Signal::derive(move || content_open.get())
                    title="Dealer details"
                    on_close=close_content
                    wide=wide.get()
                    footer=ViewFn::from(move || {
                        view! {
                            <Button on_click=Callback::new(move |_| close_content.call(()))>"Close"</Button>
                        }
                    })
                >
                    <Stack gap=LayoutGap::Sm>
                        {SAMPLE_DEALERS
                            .into_iter()
                            .map(|(code, name, _)| view! { <Text>{format!("{code} {name}")}</Text> })
                            .collect_view()}
                    </Stack>
                </ContentModal>
            }
        }}
        {move || {
            let tone = if destructive.get() { ConfirmTone::Destructive } else { ConfirmTone::Default };
            view! {
                <ConfirmModal
                    open=Signal::derive(move || confirm_open.get())
                    title="Delete selected dealers?"
                    message="The selected dealers and their branches will be removed."
                    tone
                    confirm_label="Delete"
                    on_confirm=Callback::new(move |_| {
                        answer.set(Some("confirmed"));
                        confirm_open.set(false);
                    })
                    on_cancel=Callback::new(move |_| {
                        answer.set(Some("cancelled"));
                        confirm_open.set(false);
                    })
                />
            }
        }}
    }
}
