//! Drains reducer-emitted shell effects in order.

use leptos::*;

use crate::model::Theme;
use crate::reducer::ShellEffect;
use crate::runtime_context::ShellRuntimeContext;

const DARK_THEME_CLASS: &str = "dark";

pub(crate) fn install(runtime: ShellRuntimeContext) {
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_effect(runtime, effect);
        }
    });
}

fn run_effect(runtime: ShellRuntimeContext, effect: ShellEffect) {
    match effect {
        ShellEffect::ApplyTheme(theme) => apply_theme(theme),
        ShellEffect::Navigate(href) => match runtime.navigate.get_value() {
            Some(navigate) => navigate.call(href),
            None => logging::log!("shell navigation to {href} has no router attached"),
        },
    }
}

/// Mirrors the theme onto the document element so `.dark` token overrides apply.
pub(crate) fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let result = root
        .class_list()
        .toggle_with_force(DARK_THEME_CLASS, theme == Theme::Dark)
        .and_then(|_| root.set_attribute("data-theme", theme.token()));
    if let Err(err) = result {
        logging::warn!("theme update failed: {err:?}");
    }
}
