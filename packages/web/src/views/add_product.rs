use api::{Field, ImageUpload};
use dioxus::prelude::*;
use ui::components::{FileField, SubmitButton, TextField};
use ui::controllers::{preview_data_url, AddProductController, AddProductForm, ProductFields};
use ui::{use_portal, FieldRules, FieldStates, Notice, NoticeBanner, SubmitControl, SubmitOutcome};

use super::follow;

const CATEGORY_OPTIONS: &str = "category-options";

#[component]
pub fn AddProduct() -> Element {
    let ctx = use_portal();
    let nav = use_navigator();
    let mut fields = use_signal(ProductFields::default);
    let mut states = use_signal(FieldStates::default);
    let mut control = use_signal(SubmitControl::for_form::<AddProductForm>);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut categories = use_signal(Vec::<String>::new);
    let mut preview = use_signal(|| Option::<String>::None);

    let load_ctx = ctx.clone();
    use_effect(move || {
        let controller = AddProductController::new(load_ctx.clone());
        spawn(async move {
            categories.set(controller.load_categories().await);
        });
    });

    let mut edit = move |field: Field, value: String| {
        {
            let mut f = fields.write();
            match field {
                Field::ProductName => f.name = value,
                Field::Price => f.set_price(&value),
                Field::Quantity => f.set_quantity(&value),
                Field::Category => f.category = value,
                _ => {}
            }
        }
        let updates = fields.read().on_input(field);
        states.write().apply(updates);
    };
    let mut leave = move |field: Field| {
        let updates = fields.read().on_blur(field);
        states.write().apply(updates);
    };
    let pick = move |(name, bytes): (String, Vec<u8>)| {
        let upload = ImageUpload::new(name, bytes);
        preview.set(Some(preview_data_url(&upload)));
        fields.write().image = Some(upload);
        let updates = fields.read().on_input(Field::Image);
        states.write().apply(updates);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = AddProductController::new(ctx.clone());
        spawn(async move {
            notice.set(None);
            let current = fields();
            match controller.submit(&mut control, &current).await {
                SubmitOutcome::Succeeded(redirect) => follow(redirect, notice, nav).await,
                SubmitOutcome::Invalid(errors) => states.write().show_errors(&errors),
                SubmitOutcome::Failed(message) => notice.set(Some(Notice::error(message))),
                SubmitOutcome::Busy => {}
            }
        });
    };

    rsx! {
        h2 { class: "page-title", "Add Product" }
        form {
            class: "product-form",
            novalidate: true,
            onsubmit: handle_submit,

            TextField {
                id: "name",
                label: "Product name",
                value: fields.read().name.clone(),
                state: states.read().get(Field::ProductName),
                oninput: move |v| edit(Field::ProductName, v),
                onblur: move |_| leave(Field::ProductName),
            }
            TextField {
                id: "price",
                label: "Price",
                kind: "number",
                placeholder: "0.00",
                value: fields.read().price.clone(),
                state: states.read().get(Field::Price),
                oninput: move |v| edit(Field::Price, v),
                onblur: move |_| leave(Field::Price),
            }
            TextField {
                id: "quantity",
                label: "Quantity",
                kind: "number",
                placeholder: "0",
                value: fields.read().quantity.clone(),
                state: states.read().get(Field::Quantity),
                oninput: move |v| edit(Field::Quantity, v),
                onblur: move |_| leave(Field::Quantity),
            }
            TextField {
                id: "category",
                label: "Category",
                value: fields.read().category.clone(),
                state: states.read().get(Field::Category),
                list: CATEGORY_OPTIONS.to_string(),
                oninput: move |v| edit(Field::Category, v),
                onblur: move |_| leave(Field::Category),
            }
            datalist {
                id: CATEGORY_OPTIONS,
                for category in categories() {
                    option { key: "{category}", value: "{category}" }
                }
            }
            FileField {
                id: "image",
                label: "Product image",
                state: states.read().get(Field::Image),
                onpick: pick,
            }
            if let Some(src) = preview() {
                img { class: "product-form__preview", src: "{src}", alt: "Preview" }
            }

            SubmitButton { control }
            NoticeBanner { notice: notice() }
        }
    }
}
