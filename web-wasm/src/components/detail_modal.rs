//! 商品詳細モーダル（メイン画像とサムネイル）

use crate::handle::ConsoleHandle;
use catalog_admin_common::format_price;
use leptos::prelude::*;

#[component]
pub fn DetailModal(handle: ConsoleHandle) -> impl IntoView {
    let state = handle.state();
    let on_close = move |_| handle.update(|console| console.close_detail());

    let body = move || {
        state.with(|s| {
            let product = s.detail.product()?.clone();
            let current = s.detail.current_image().unwrap_or_default().to_string();
            let thumbnails: Vec<String> = s.detail.thumbnails().into_iter().map(str::to_string).collect();

            Some(view! {
                <div class="modal-header">
                    <h2 class="modal-title">{product.title.clone()}</h2>
                    <button type="button" class="btn-close" aria-label="閉じる" on:click=on_close>"×"</button>
                </div>
                <div class="modal-body">
                    <img src=current class="detail-image" alt="product-img" />
                    <div class="thumbnails">
                        {thumbnails
                            .into_iter()
                            .map(|url| {
                                let target = url.clone();
                                view! {
                                    <img
                                        src=url
                                        class="thumbnail"
                                        alt="product-img"
                                        on:click=move |_| {
                                            let target = target.clone();
                                            handle.update(|console| console.show_image(target));
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                    <h3>{format!("販売価格：{}", format_price(product.price))}</h3>
                    <p>{product.description.clone()}</p>
                    <p>{product.content.clone()}</p>
                </div>
            })
        })
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal-dialog">
                {body}
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=on_close>"閉じる"</button>
                </div>
            </div>
        </div>
    }
}
