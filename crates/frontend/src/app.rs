use crate::domain::product_table::api;
use crate::domain::product_table::ui::add_form::AddProductForm;
use crate::domain::product_table::ui::list::ProductTable;
use crate::domain::product_table::ui::status::{StatusBanner, StatusController};
use crate::shared::api_utils::ApiConfig;
use contracts::domain::product::ProductRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    provide_context(config.clone());

    let products = RwSignal::new(Vec::<ProductRecord>::new());
    let status = StatusController::new();

    // Initial fill of the table. The page stays usable if this fails;
    // the error only goes to the console.
    spawn_local(async move {
        match api::fetch_products(&config).await {
            Ok(items) => products.set(items),
            Err(e) => log::error!("failed to load tracked products: {}", e),
        }
    });

    view! {
        <main class="content">
            <div class="header">
                <h2>"DiscountChecker"</h2>
            </div>
            <AddProductForm products=products status=status />
            <StatusBanner status=status />
            <ProductTable products=products />
        </main>
    }
}
