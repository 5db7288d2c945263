//! 商品の追加・編集モーダル

use crate::handle::ConsoleHandle;
use catalog_admin_common::{FieldInput, ProductField, IMAGE_SLOT_CAPACITY};
use leptos::prelude::*;

#[component]
pub fn ProductFormModal(handle: ConsoleHandle) -> impl IntoView {
    let state = handle.state();
    let mode = move || state.with(|s| s.draft.mode());

    let on_close = move |_| handle.update(|console| console.close_form());
    let on_submit = move |_| {
        handle.spawn(|mut console| async move {
            let _ = console.submit().await;
            console
        });
    };

    let fields = ProductField::ALL
        .into_iter()
        .map(|field| field_input(handle, field))
        .collect_view();

    let image_slots = (0..IMAGE_SLOT_CAPACITY)
        .map(|index| image_slot_input(handle, index))
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal-dialog modal-lg">
                <div class="modal-header">
                    <h2 class="modal-title">{move || mode().title()}</h2>
                    <button type="button" class="btn-close" aria-label="閉じる" on:click=on_close>"×"</button>
                </div>
                <form class="modal-body" on:submit=|ev| ev.prevent_default()>
                    {fields}
                    {image_slots}
                </form>
                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" on:click=on_close>"キャンセル"</button>
                    <button type="button" class="btn btn-primary" on:click=on_submit>
                        {move || mode().submit_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn field_input(handle: ConsoleHandle, field: ProductField) -> AnyView {
    let state = handle.state();
    let id = format!("product-{}", field.name());

    if field.is_checkbox() {
        return view! {
            <div class="form-check">
                <input
                    type="checkbox"
                    id=id.clone()
                    class="form-check-input"
                    prop:checked=move || state.with(|s| s.draft.is_enabled)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        handle.update(|console| console.set_field(field, FieldInput::Checked(checked)));
                    }
                />
                <label for=id class="form-check-label">
                    {move || if state.with(|s| s.draft.is_enabled) { "有効" } else { "無効" }}
                </label>
            </div>
        }
        .into_any();
    }

    let value = move || state.with(|s| s.draft.field_text(field));
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        handle.update(|console| console.set_field(field, FieldInput::Text(text)));
    };

    if field == ProductField::Description {
        return view! {
            <div class="form-group">
                <label for=id.clone()>{field.label()}</label>
                <textarea id=id name=field.name() prop:value=value on:input=on_input />
            </div>
        }
        .into_any();
    }

    let input_type = if field.is_numeric() { "number" } else { "text" };
    view! {
        <div class="form-group">
            <label for=id.clone()>{field.label()}</label>
            <input type=input_type id=id name=field.name() min="0" prop:value=value on:input=on_input />
        </div>
    }
    .into_any()
}

fn image_slot_input(handle: ConsoleHandle, index: usize) -> impl IntoView {
    let state = handle.state();
    let id = format!("product-images-{}", index + 1);

    view! {
        <div class="form-group">
            <label for=id.clone()>{format!("副画像URL-{}", index + 1)}</label>
            <input
                type="text"
                id=id
                prop:value=move || state.with(|s| s.draft.images.get(index).unwrap_or_default().to_string())
                on:input=move |ev| {
                    let url = event_target_value(&ev);
                    handle.update(|console| {
                        let _ = console.set_image_slot(index, url);
                    });
                }
            />
        </div>
    }
}
