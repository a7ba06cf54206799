//! ViewModel for the "Create New Product" card

use crate::domain::a003_product::api;
use crate::shared::api_client::ApiClient;
use crate::shared::form_utils::{optional_text, parse_count, parse_money, required_text};
use contracts::domain::a003_product::ProductDto;
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let stock = parse_count("Stock", &self.stock)?;
        if stock < 0 {
            return Err("Stock cannot be negative".into());
        }
        Ok(ProductDto {
            name: required_text("Name", &self.name)?,
            sku: required_text("SKU", &self.sku)?,
            description: optional_text(&self.description),
            price: parse_money("Price", &self.price)?,
            stock,
        })
    }
}

#[derive(Clone)]
pub struct ProductCreateVm {
    client: ApiClient,
    pub name: RwSignal<String>,
    pub sku: RwSignal<String>,
    pub description: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductCreateVm {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            name: RwSignal::new(String::new()),
            sku: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn snapshot(&self) -> ProductForm {
        ProductForm {
            name: self.name.get_untracked(),
            sku: self.sku.get_untracked(),
            description: self.description.get_untracked(),
            price: self.price.get_untracked(),
            stock: self.stock.get_untracked(),
        }
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let saving = self.saving;
        let name = self.name;
        let sku = self.sku;
        Signal::derive(move || {
            saving.get() || name.get().trim().is_empty() || sku.get().trim().is_empty()
        })
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.sku.set(String::new());
        self.description.set(String::new());
        self.price.set(String::new());
        self.stock.set(String::new());
        self.error.set(None);
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let dto = match self.snapshot().to_dto() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match api::create(&this.client, &dto).await {
                Ok(created) => {
                    log::info!("product #{} ({}) created", created.id, created.sku);
                    this.saving.set(false);
                    this.reset();
                    on_saved.run(());
                }
                Err(e) => {
                    this.saving.set(false);
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dto() {
        let form = ProductForm {
            name: "Hex bolt".into(),
            sku: "HB-10".into(),
            description: "".into(),
            price: "1.25".into(),
            stock: "100".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.sku, "HB-10");
        assert_eq!(dto.description, None);
        assert_eq!(dto.price, 1.25);
        assert_eq!(dto.stock, 100);
    }

    #[test]
    fn test_sku_is_required() {
        let form = ProductForm {
            name: "Hex bolt".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(), Err("SKU is required".to_string()));
    }

    #[test]
    fn test_stock_must_be_whole_and_non_negative() {
        let mut form = ProductForm {
            name: "Hex bolt".into(),
            sku: "HB-10".into(),
            stock: "2.5".into(),
            ..Default::default()
        };
        assert!(form.to_dto().is_err());
        form.stock = "-1".into();
        assert_eq!(form.to_dto(), Err("Stock cannot be negative".to_string()));
    }
}
