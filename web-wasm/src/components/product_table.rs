//! 商品一覧テーブル

use crate::handle::ConsoleHandle;
use catalog_admin_common::{format_price, Product};
use leptos::prelude::*;

#[component]
pub fn ProductTable(handle: ConsoleHandle) -> impl IntoView {
    let state = handle.state();

    view! {
        <div class="product-table">
            <table class="table">
                <thead>
                    <tr>
                        <th scope="col">"No."</th>
                        <th scope="col">"品名"</th>
                        <th scope="col">"カテゴリ"</th>
                        <th scope="col">"定価"</th>
                        <th scope="col">"販売価格"</th>
                        <th scope="col">"状態"</th>
                        <th scope="col">"操作"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state.with(|s| {
                            s.products
                                .iter()
                                .enumerate()
                                .map(|(index, product)| product_row(handle, index, product))
                                .collect_view()
                        })
                    }}
                </tbody>
            </table>
            <Show when=move || state.with(|s| s.products.is_empty())>
                <p class="text-muted">"商品がありません"</p>
            </Show>
        </div>
    }
}

fn product_row(handle: ConsoleHandle, index: usize, product: &Product) -> impl IntoView {
    let detail_id = product.id.clone();
    let edit_id = product.id.clone();
    let delete_id = product.id.clone();
    let status_class = if product.is_enabled { "text-success" } else { "text-danger" };

    view! {
        <tr>
            <th scope="row">{index + 1}</th>
            <td>{product.title.clone()}</td>
            <td>{product.category.clone()}</td>
            <td>{format_price(product.origin_price)}</td>
            <td>{format_price(product.price)}</td>
            <td><span class=status_class>{product.status_label()}</span></td>
            <td class="actions">
                <button
                    type="button"
                    class="btn btn-info"
                    on:click=move |_| handle.update(|console| {
                        let _ = console.open_detail(&detail_id);
                    })
                >
                    "詳細"
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| handle.update(|console| {
                        let _ = console.open_edit(&edit_id);
                    })
                >
                    "編集"
                </button>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| {
                        let id = delete_id.clone();
                        handle.spawn(|mut console| async move {
                            let _ = console.delete(&id).await;
                            console
                        });
                    }
                >
                    "削除"
                </button>
            </td>
        </tr>
    }
}
