//! Shared UI primitive library for the admin console.
//!
//! The crate owns reusable Leptos primitives, the closed [`IconName`] catalogue, and the stable
//! `data-ui-*` DOM contract consumed by the stylesheet. Layout shells and pages compose these
//! primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod outside_click;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use outside_click::use_outside_click;
pub use primitives::{
    Alert, AlertKind, Badge, BadgeColor, Breadcrumbs, Button, ButtonSize, ButtonVariant, Card,
    Checkbox, Cluster, ConfirmModal, ConfirmTone, ContentModal, DataTable, EmptyState, Grid,
    Heading, IconButton, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem,
    MenuSeparator, MenuSurface, MultiSelectDropdown, Pagination, Panel, RadioGroup, RadioOption,
    SelectField, SelectOption, Stack, Switch, Tab, TabList, TableBody, TableCell, TableHead,
    TableHeaderCell, TableRow, Text, TextField, TextRole, TextTone, ToolBar,
};
pub use table_model::CheckState;

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        use_outside_click, Alert, AlertKind, Badge, BadgeColor, Breadcrumbs, Button, ButtonSize,
        ButtonVariant, Card, CheckState, Checkbox, Cluster, ConfirmModal, ConfirmTone,
        ContentModal, DataTable, EmptyState, Grid, Heading, Icon, IconButton, IconName, IconSize,
        LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSeparator,
        MenuSurface, MultiSelectDropdown, Pagination, Panel, RadioGroup, RadioOption, SelectField,
        SelectOption, Stack, Switch, Tab, TabList, TableBody, TableCell, TableHead,
        TableHeaderCell, TableRow, Text, TextField, TextRole, TextTone, ToolBar,
    };
}
