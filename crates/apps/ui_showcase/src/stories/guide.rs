use leptos::*;
use system_ui::prelude::*;

use super::Preview;
use crate::catalog::{filter_icons, DESIGN_PRINCIPLES};

#[component]
pub(super) fn PrinciplesStory() -> impl IntoView {
    view! {
        <Grid columns=2 gap=LayoutGap::Md>
            {DESIGN_PRINCIPLES
                .into_iter()
                .enumerate()
                .map(|(index, (title, body))| {
                    view! {
                        <Card>
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {format!("{:02}", index + 1)}
                                </Text>
                                <Heading>{title}</Heading>
                                <Text tone=TextTone::Secondary>{body}</Text>
                            </Stack>
                        </Card>
                    }
                })
                .collect_view()}
        </Grid>
    }
}

#[component]
pub(super) fn IconsStory() -> impl IntoView {
    let query = create_rw_signal(String::new());
    let icons = create_memo(move |_| query.with(|query| filter_icons(query)));

    view! {
        <TextField
            id="story-icon-search"
            label="Filter icons"
            placeholder="chevron, user, arrow..."
            leading_icon=IconName::Search
            value=Signal::derive(move || query.get())
            on_input=Callback::new(move |next| query.set(next))
        />
        <Text tone=TextTone::Secondary>
            {move || format!("{} of {} icons", icons.with(Vec::len), IconName::ALL.len())}
        </Text>
        <Preview label="Icon registry">
            {move || {
                let icons = icons.get();
                if icons.is_empty() {
                    return view! { <EmptyState icon=IconName::Search title="No icon matches this filter" /> }
                        .into_view();
                }
                view! {
                    <Grid columns=6 min_track_px=96 gap=LayoutGap::Sm>
                        {icons
                            .into_iter()
                            .map(|icon| {
                                view! {
                                    <Card padding=LayoutPadding::Sm ui_slot="icon-tile">
                                        <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                                            <Icon icon size=IconSize::Lg />
                                            <Text role=TextRole::Caption>{icon.token()}</Text>
                                        </Stack>
                                    </Card>
                                }
                            })
                            .collect_view()}
                    </Grid>
                }
                .into_view()
            }}
        </Preview>
    }
}

#[component]
pub(super) fn ColorsStory() -> impl IntoView {
    view! {
        <DataTable aria_label="Badge colours" compact=true>
            <TableHead>
                <TableRow>
                    <TableHeaderCell>"Sample"</TableHeaderCell>
                    <TableHeaderCell>"Name"</TableHeaderCell>
                    <TableHeaderCell>"Token"</TableHeaderCell>
                </TableRow>
            </TableHead>
            <TableBody>
                {BadgeColor::ALL
                    .into_iter()
                    .map(|color| {
                        view! {
                            <TableRow>
                                <TableCell>
                                    <Badge color>{color.label()}</Badge>
                                </TableCell>
                                <TableCell>{color.label()}</TableCell>
                                <TableCell>
                                    <code>{format!("data-ui-color=\"{}\"", color.token())}</code>
                                </TableCell>
                            </TableRow>
                        }
                    })
                    .collect_view()}
            </TableBody>
        </DataTable>
    }
}
