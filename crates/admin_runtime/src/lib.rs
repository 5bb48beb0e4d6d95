pub mod components;
pub mod data_grid;
mod effect_executor;
pub mod i18n;
pub mod menu;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod search;

pub use components::{AppShell, ContentHeader, ContentWrapper, Navbar, Sidebar};
pub use data_grid::{use_grid_query, DataGrid, GridColumn, GridPage};
pub use i18n::{Language, UiText};
pub use menu::{FavoriteEntry, MenuItem, MenuTree};
pub use model::*;
pub use reducer::{reduce_shell, ShellAction, ShellEffect, ShellError};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
