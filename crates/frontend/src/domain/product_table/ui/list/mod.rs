//! Product table: one row per tracked product, a placeholder row when
//! nothing is tracked.

use crate::domain::product_table::api;
use crate::domain::product_table::model::{take_removal_name, ProductRowModel};
use crate::shared::api_utils::ApiConfig;
use contracts::domain::product::ProductRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const EMPTY_TABLE_TEXT: &str =
    "This table is empty. Add a product by giving the text box above a URL";

#[component]
pub fn ProductTable(products: RwSignal<Vec<ProductRecord>>) -> impl IntoView {
    let config = use_context::<ApiConfig>().expect("ApiConfig not found in context");

    let row_count = Memo::new(move |_| products.with(|items| items.len()));

    let remove_product = move |id: String| {
        // Optimistic: the row disappears immediately, the backend is
        // told afterwards. A failed notification is logged, not rolled
        // back, so the next page load re-syncs with the server.
        let name = products
            .try_update(|items| take_removal_name(items, &id))
            .flatten();
        let Some(name) = name else { return };

        let config = config.clone();
        spawn_local(async move {
            if let Err(e) = api::remove_row(&config, &name).await {
                log::warn!("remove_row failed for '{}': {}", name, e);
            }
        });
    };

    view! {
        <div class="table-container">
            <table class="product-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Current price"</th>
                        <th>"Original price"</th>
                        <th>"Savings"</th>
                    </tr>
                </thead>
                <tbody id="product-table-body">
                    {move || (row_count.get() == 0).then(|| view! { <EmptyTableRow /> })}
                    {move || {
                        let remove = remove_product.clone();
                        products
                            .get()
                            .into_iter()
                            .map(move |record| {
                                let remove = remove.clone();
                                let id = record.id.clone();
                                view! {
                                    <ProductRow
                                        record=record
                                        on_remove=Callback::new(move |_| remove(id.clone()))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ProductRow(record: ProductRecord, on_remove: Callback<()>) -> impl IntoView {
    let model = ProductRowModel::from(&record);

    view! {
        <tr id=model.row_id class="product-row">
            <td class="product-name-td">
                <span class="website-name">
                    <a target="_blank" href=model.site.home_url()>
                        <strong>{model.site.label()}</strong>
                    </a>
                </span>
                <a target="_blank" class="product-name" id=model.name_id href=record.url>
                    {record.name}
                </a>
                <button class="button remove-btn" on:click=move |_| on_remove.run(())>
                    "Remove"
                </button>
            </td>
            <td class="current-price" id=model.current_price_id>{model.current_price_text}</td>
            <td class="og-price" id=model.og_price_id>{model.og_price_text}</td>
            <td class=model.savings_class id=model.savings_id>{model.savings_text}</td>
        </tr>
    }
}

/// The single wide row shown while no products are tracked. The parent
/// renders it only for an empty set, so it can never duplicate.
#[component]
pub fn EmptyTableRow() -> impl IntoView {
    view! {
        <tr id="empty-table-row">
            <td id="empty-table-Cell" colspan="4">{EMPTY_TABLE_TEXT}</td>
        </tr>
    }
}
