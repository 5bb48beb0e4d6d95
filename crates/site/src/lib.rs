mod data;
mod dealer_form;
mod pages;
mod web_app;

pub use data::{Dealer, Document, GrowthPeriod};
pub use dealer_form::{DealerField, DealerForm, DealerFormError};
pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
