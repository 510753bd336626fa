//! Add-product form: a URL text box and the submit button the status
//! banner locks during its fade cycle.

use crate::domain::product_table::api;
use crate::domain::product_table::ui::status::{StatusController, StatusKind};
use crate::shared::api_utils::ApiConfig;
use contracts::domain::product::ProductRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn AddProductForm(
    products: RwSignal<Vec<ProductRecord>>,
    status: StatusController,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig not found in context");
    let (url, set_url) = signal(String::new());

    let submit = move || {
        let value = url.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }

        let config = config.clone();
        spawn_local(async move {
            match api::add_product(&config, &value).await {
                Ok(resp) => {
                    if resp.success {
                        if let Some(record) = resp.product_data {
                            products.update(|items| items.push(record));
                        }
                        set_url.set(String::new());
                        status.show(StatusKind::Success, resp.message);
                    } else {
                        status.show(StatusKind::Error, resp.message);
                    }
                }
                Err(e) => {
                    log::error!("add_product failed: {}", e);
                    status.show(
                        StatusKind::Error,
                        "Could not reach the server, please try again later.".to_string(),
                    );
                }
            }
        });
    };

    view! {
        <form
            class="add-product-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                type="text"
                id="product-url"
                placeholder="Product URL from Bol.com or MediaMarkt"
                prop:value=url
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="button"
                id="submit-button"
                disabled=move || status.is_locked()
            >
                "Add product"
            </button>
        </form>
    }
}
