use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query-string parameter carrying the active page key
const PAGE_PARAM: &str = "page";

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppPage {
    #[default]
    Dashboard,
    Contacts,
    Deals,
    Sales,
    Invoices,
    Inventory,
    Projects,
}

impl AppPage {
    pub fn key(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Contacts => "contacts",
            AppPage::Deals => "deals",
            AppPage::Sales => "sales",
            AppPage::Invoices => "invoices",
            AppPage::Inventory => "inventory",
            AppPage::Projects => "projects",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "Dashboard",
            AppPage::Contacts => "Contacts",
            AppPage::Deals => "Deals",
            AppPage::Sales => "Sales Orders",
            AppPage::Invoices => "Invoices",
            AppPage::Inventory => "Inventory",
            AppPage::Projects => "Projects",
        }
    }

    /// Icon name understood by `shared::icons::icon`
    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::Contacts => "customers",
            AppPage::Deals => "deals",
            AppPage::Sales => "orders",
            AppPage::Invoices => "invoices",
            AppPage::Inventory => "products",
            AppPage::Projects => "projects",
        }
    }

    /// Sidebar order
    pub fn all() -> &'static [AppPage] {
        &[
            AppPage::Dashboard,
            AppPage::Contacts,
            AppPage::Deals,
            AppPage::Sales,
            AppPage::Invoices,
            AppPage::Inventory,
            AppPage::Projects,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.key() == key)
    }

    /// Page named by a location search string such as `?page=deals`
    pub fn from_query(search: &str) -> Option<Self> {
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        params.get(PAGE_PARAM).and_then(|k| Self::from_key(k))
    }

    /// Search string (with leading `?`) selecting this page
    pub fn to_query(&self) -> String {
        let query = serde_qs::to_string(&HashMap::from([(PAGE_PARAM, self.key())]))
            .unwrap_or_default();
        format!("?{}", query)
    }
}

/// Page to restore from the URL when the main layout mounts.
///
/// An explicit navigation made before mounting (the post-login redirect)
/// wins over whatever `?page=` is left in the address bar.
pub fn page_to_restore(already_navigated: bool, search: &str) -> Option<AppPage> {
    if already_navigated {
        None
    } else {
        AppPage::from_query(search)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
    pub left_open: RwSignal<bool>,
    /// Set by `open`, cleared by `reset`
    navigated: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
            left_open: RwSignal::new(true),
            navigated: RwSignal::new(false),
        }
    }

    /// Restore the page from `?page=` and keep the URL in step with navigation
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_to_restore(self.navigated.get_untracked(), &search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = this.active.get().to_query();

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn open(&self, page: AppPage) {
        log::debug!("open page '{}'", page.key());
        self.navigated.set(true);
        self.active.set(page);
    }

    /// Back to the default page with a bare URL; used on logout
    pub fn reset(&self) {
        self.navigated.set(false);
        self.active.set(AppPage::default());

        if let Some(w) = window() {
            let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
            }
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for page in AppPage::all() {
            assert_eq!(AppPage::from_key(page.key()), Some(*page));
        }
        assert_eq!(AppPage::from_key("reports"), None);
    }

    #[test]
    fn test_query_string() {
        assert_eq!(AppPage::Deals.to_query(), "?page=deals");
        assert_eq!(AppPage::from_query("?page=invoices"), Some(AppPage::Invoices));
        assert_eq!(AppPage::from_query("page=projects"), Some(AppPage::Projects));
        assert_eq!(AppPage::from_query(""), None);
        assert_eq!(AppPage::from_query("?page=unknown"), None);
    }

    #[test]
    fn test_explicit_navigation_wins_over_stale_query() {
        assert_eq!(page_to_restore(true, "?page=deals"), None);
        assert_eq!(page_to_restore(false, "?page=deals"), Some(AppPage::Deals));
        assert_eq!(page_to_restore(false, ""), None);
    }

    #[test]
    fn test_sidebar_order() {
        let labels: Vec<&str> = AppPage::all().iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Dashboard",
                "Contacts",
                "Deals",
                "Sales Orders",
                "Invoices",
                "Inventory",
                "Projects"
            ]
        );
    }
}
