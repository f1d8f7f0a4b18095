//! Add-product page controller.

use api::validation::{
    check_category, check_product_name, clamp_non_negative, parse_price, parse_quantity,
    submit_state,
};
use api::{
    ApiError, Field, FieldError, FieldState, ImageUpload, NewProduct, PortalApi,
    ValidationError,
};
use base64::Engine;
use store::KeyValueStore;

use crate::context::PortalContext;
use crate::form::{self, collect, FieldRules, FormSpec, SubmitLock, SubmitOutcome};
use crate::nav::{Destination, Redirect};
use crate::notice::Notice;

pub const ADDED_NOTICE: &str = "Product added successfully!";

/// Raw inputs of the add-product form. Price and quantity stay as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub image: Option<ImageUpload>,
}

impl ProductFields {
    /// Store a typed price, replacing a negative value with `0`.
    pub fn set_price(&mut self, raw: &str) {
        self.price = clamp_non_negative(raw);
    }

    /// Store a typed quantity, replacing a negative value with `0`.
    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = clamp_non_negative(raw);
    }

    fn check(&self, field: Field) -> Option<FieldState> {
        let state = match field {
            Field::ProductName => submit_state(&check_product_name(&self.name)),
            Field::Price => submit_state(&parse_price(&self.price)),
            Field::Quantity => submit_state(&parse_quantity(&self.quantity)),
            Field::Category => submit_state(&check_category(&self.category)),
            Field::Image => submit_state(&self.image_or_error()),
            _ => return None,
        };
        Some(state)
    }

    fn raw(&self, field: Field) -> &str {
        match field {
            Field::ProductName => &self.name,
            Field::Price => &self.price,
            Field::Quantity => &self.quantity,
            Field::Category => &self.category,
            _ => "",
        }
    }

    fn image_or_error(&self) -> Result<&ImageUpload, ValidationError> {
        self.image.as_ref().ok_or(ValidationError::ImageRequired)
    }
}

impl FieldRules for ProductFields {
    fn on_input(&self, field: Field) -> Vec<(Field, FieldState)> {
        if field != Field::Image && self.raw(field).trim().is_empty() {
            return vec![(field, FieldState::Empty)];
        }
        self.check(field).map(|s| vec![(field, s)]).unwrap_or_default()
    }

    fn on_blur(&self, field: Field) -> Vec<(Field, FieldState)> {
        self.check(field).map(|s| vec![(field, s)]).unwrap_or_default()
    }
}

pub struct AddProductForm;

impl FormSpec for AddProductForm {
    type Fields = ProductFields;
    type Payload = NewProduct;
    type Success = Option<String>;

    const IDLE_LABEL: &'static str = "Add Product";
    const BUSY_LABEL: &'static str = "Saving...";
    const FALLBACK_ERROR: &'static str = "Error adding product";

    fn validate(&self, fields: &ProductFields) -> Result<NewProduct, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = collect(&mut errors, Field::ProductName, check_product_name(&fields.name));
        let price = collect(&mut errors, Field::Price, parse_price(&fields.price));
        let quantity = collect(&mut errors, Field::Quantity, parse_quantity(&fields.quantity));
        let category = collect(&mut errors, Field::Category, check_category(&fields.category));
        let image = collect(&mut errors, Field::Image, fields.image_or_error());
        match (name, price, quantity, category, image) {
            (Some(name), Some(price), Some(quantity), Some(category), Some(image)) => {
                Ok(NewProduct {
                    name,
                    price,
                    quantity,
                    category,
                    image: image.clone(),
                })
            }
            _ => Err(errors),
        }
    }

    async fn send<A: PortalApi>(
        &self,
        api: &A,
        payload: NewProduct,
    ) -> Result<Option<String>, ApiError> {
        api.add_product(&payload).await?.into_result()
    }
}

/// `data:` URL of the selected image, for the local preview.
pub fn preview_data_url(image: &ImageUpload) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
    format!("data:{};base64,{}", image.content_type, encoded)
}

pub struct AddProductController<A, S> {
    ctx: PortalContext<A, S>,
}

impl<A: PortalApi, S: KeyValueStore> AddProductController<A, S> {
    pub fn new(ctx: PortalContext<A, S>) -> Self {
        Self { ctx }
    }

    /// Validate all five fields and post the multipart form.
    pub async fn submit<L: SubmitLock>(
        &self,
        lock: &mut L,
        fields: &ProductFields,
    ) -> SubmitOutcome<Redirect> {
        let delay_ms = self.ctx.config.redirect.after_add_product_ms;
        form::run(&AddProductForm, &self.ctx.api, lock, fields)
            .await
            .and_then(|_| {
                tracing::info!("Added product {}", fields.name.trim());
                SubmitOutcome::Succeeded(Redirect::after(
                    Destination::Products,
                    delay_ms,
                    Notice::success(ADDED_NOTICE),
                ))
            })
    }

    /// Existing categories, offered as suggestions. Empty when unavailable.
    pub async fn load_categories(&self) -> Vec<String> {
        match self.ctx.api.categories().await {
            Ok(list) if list.success => list.categories,
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to load categories: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmitControl;
    use crate::testing::{context, Call, MockApi};
    use api::{Ack, CategoryList};

    fn filled() -> ProductFields {
        ProductFields {
            name: " Mug ".to_string(),
            price: "12.5".to_string(),
            quantity: "4".to_string(),
            category: "Kitchen".to_string(),
            image: Some(ImageUpload::new("mug.png", vec![1, 2, 3])),
        }
    }

    #[test]
    fn test_empty_form_reports_all_five_fields() {
        let errors = AddProductForm
            .validate(&ProductFields::default())
            .unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::ProductName,
                Field::Price,
                Field::Quantity,
                Field::Category,
                Field::Image
            ]
        );
    }

    #[test]
    fn test_valid_payload() {
        let payload = AddProductForm.validate(&filled()).unwrap();
        assert_eq!(payload.name, "Mug");
        assert_eq!(payload.price, 12.5);
        assert_eq!(payload.quantity, 4);
        assert_eq!(payload.image.content_type, "image/png");
    }

    #[test]
    fn test_quantity_must_be_whole() {
        let mut fields = filled();
        fields.quantity = "1.5".to_string();
        let errors = AddProductForm.validate(&fields).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new(Field::Quantity, ValidationError::InvalidQuantity)]
        );
    }

    #[test]
    fn test_negative_input_is_clamped() {
        let mut fields = ProductFields::default();
        fields.set_price("-3");
        fields.set_quantity("-1");
        assert_eq!(fields.price, "0");
        assert_eq!(fields.quantity, "0");

        fields.set_price("7.25");
        assert_eq!(fields.price, "7.25");
    }

    #[test]
    fn test_live_rules() {
        let fields = ProductFields::default();
        assert_eq!(
            fields.on_input(Field::Price),
            vec![(Field::Price, FieldState::Empty)]
        );
        assert_eq!(
            fields.on_blur(Field::Image),
            vec![(Field::Image, FieldState::Invalid(ValidationError::ImageRequired))]
        );
        assert_eq!(
            filled().on_input(Field::Category),
            vec![(Field::Category, FieldState::Valid)]
        );
    }

    #[test]
    fn test_preview_data_url() {
        let image = ImageUpload::new("dot.gif", b"GIF".to_vec());
        assert_eq!(preview_data_url(&image), "data:image/gif;base64,R0lG");
    }

    #[tokio::test]
    async fn test_success_redirects_to_products() {
        let api = MockApi::default();
        let controller = AddProductController::new(context(api.clone()));
        let mut control = SubmitControl::for_form::<AddProductForm>();

        let outcome = controller.submit(&mut control, &filled()).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded(Redirect::after(
                Destination::Products,
                1500,
                Notice::success(ADDED_NOTICE)
            ))
        );
        assert_eq!(api.calls(), vec![Call::AddProduct("Mug".to_string())]);
        assert_eq!(control.label(), "Add Product");
    }

    #[tokio::test]
    async fn test_refusal_uses_fallback() {
        let api = MockApi {
            add: Ok(Ack::default()),
            ..MockApi::default()
        };
        let controller = AddProductController::new(context(api));
        let mut control = SubmitControl::for_form::<AddProductForm>();

        let outcome = controller.submit(&mut control, &filled()).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Error adding product".to_string()));
    }

    #[tokio::test]
    async fn test_categories_fall_back_to_empty() {
        let api = MockApi {
            categories: Ok(CategoryList {
                success: true,
                categories: vec!["Kitchen".to_string(), "Office".to_string()],
            }),
            ..MockApi::default()
        };
        let controller = AddProductController::new(context(api));
        assert_eq!(controller.load_categories().await, vec!["Kitchen", "Office"]);

        let offline = MockApi {
            categories: Err(ApiError::Network("refused".to_string())),
            ..MockApi::default()
        };
        let controller = AddProductController::new(context(offline));
        assert!(controller.load_categories().await.is_empty());
    }
}
