//! The session, catalog, cart and favorites state holder.
//!
//! [`AppState`] is the single source of truth the screens read from. Every
//! operation that talks to the server follows the same shape: local checks,
//! `is_loading = true`, the request, then either the result or a
//! user-facing message stored in state, and finally `is_loading = false`.
//! Nothing is returned to the caller on failure and nothing is retried.

use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tracing::{debug, info, trace, warn};

use super::events::{create_event_channel, StateEvent, StateEventSender, EVENT_CHANNEL_CAPACITY};
use super::forms::ProductForm;
use crate::api::{ApiClient, LoginRequest, RegisterRequest, VerifyCodeRequest};
use crate::error::{check_login, check_otp, check_register, is_blank, AppError, Operation};
use crate::models::{Cart, Favorites, Kitchen, KitchenId, Product, Session};
use crate::prefs::{NotificationSettings, ProfilePrefs, SessionPrefs};
use crate::traits::{HttpClient, PreferenceStore};

pub struct AppState<C: HttpClient, P: PreferenceStore> {
    api: ApiClient<C>,
    prefs: P,
    events: StateEventSender,

    session: Option<Session>,
    /// Username read back from the session flags at launch
    remembered_user: Option<String>,
    is_loading: bool,
    error_message: Option<String>,

    catalog: Vec<Kitchen>,
    /// Catalog failures are shown inline on the home screen
    catalog_error: Option<String>,
    selected_product: Option<Product>,

    cart: Cart,
    favorites: Favorites,

    register_success: bool,
    verify_code_success: bool,
    add_product_success: bool,
}

impl<C: HttpClient, P: PreferenceStore> AppState<C, P> {
    pub fn new(api: ApiClient<C>, prefs: P) -> Self {
        let (events, _) = create_event_channel(EVENT_CHANNEL_CAPACITY);
        Self {
            api,
            prefs,
            events,
            session: None,
            remembered_user: None,
            is_loading: false,
            error_message: None,
            catalog: Vec::new(),
            catalog_error: None,
            selected_product: None,
            cart: Cart::new(),
            favorites: Favorites::new(),
            register_success: false,
            verify_code_success: false,
            add_product_success: false,
        }
    }

    /// Receive a [`StateEvent`] for every change made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StateEvent> {
        self.events.subscribe()
    }

    // ---- Read access ----

    pub fn api(&self) -> &ApiClient<C> {
        &self.api
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Name of the current user, from the live session or the remembered one.
    pub fn username(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(Session::username)
            .or(self.remembered_user.as_deref())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn catalog(&self) -> &[Kitchen] {
        &self.catalog
    }

    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn register_success(&self) -> bool {
        self.register_success
    }

    pub fn verify_code_success(&self) -> bool {
        self.verify_code_success
    }

    pub fn add_product_success(&self) -> bool {
        self.add_product_success
    }

    // ---- Authentication ----

    pub async fn login(&mut self, identifier: &str, password: &str) {
        if let Err(err) = check_login(identifier, password) {
            self.fail(Operation::Login, err.into());
            return;
        }

        self.begin();
        let request = LoginRequest {
            identifier: identifier.trim().to_string(),
            password: password.to_string(),
        };
        match self.api.login(&request).await {
            Ok(response) => {
                let session = Session::from(response);
                let username = session.username().to_string();
                self.api.set_auth_token(Some(session.token.clone()));
                self.session = Some(session);
                self.remembered_user = Some(username.clone());

                if let Err(err) = self.prefs.save_session(&SessionPrefs::logged_in(&username)).await {
                    warn!(error = %err, "Failed to persist session flags");
                }

                info!(username = %username, "Logged in");
                self.emit(StateEvent::LoggedIn { username });
            }
            Err(err) => self.fail(Operation::Login, err.into()),
        }
        self.finish();
    }

    /// Create an account. On success only `register_success` is set; the
    /// user still has to log in.
    pub async fn register(
        &mut self,
        email: &str,
        username: &str,
        phone: &str,
        password: &str,
        confirmation: &str,
    ) {
        if let Err(err) = check_register(email, username, phone, password, confirmation) {
            self.fail(Operation::Register, err.into());
            return;
        }

        self.begin();
        let request = RegisterRequest {
            email: email.trim().to_string(),
            username: username.trim().to_string(),
            phone: phone.trim().to_string(),
            password: password.to_string(),
            password2: confirmation.to_string(),
        };
        match self.api.register(&request).await {
            Ok(response) => {
                info!(username = %response.user.username, "Registered");
                self.register_success = true;
                self.emit(StateEvent::Registered);
            }
            Err(err) => self.fail(Operation::Register, err.into()),
        }
        self.finish();
    }

    pub async fn verify_code(&mut self, email: &str, otp: &str) {
        if let Err(err) = check_otp(email, otp) {
            self.fail(Operation::VerifyCode, err.into());
            return;
        }

        self.begin();
        let request = VerifyCodeRequest {
            email: email.trim().to_string(),
            otp: otp.to_string(),
        };
        match self.api.verify_code(&request).await {
            Ok(_) => {
                info!(email = %request.email, "Account activated");
                self.verify_code_success = true;
                self.emit(StateEvent::CodeVerified);
            }
            Err(err) => self.fail(Operation::VerifyCode, err.into()),
        }
        self.finish();
    }

    /// Forget the session, the cart and the favorites, here and on disk.
    pub async fn logout(&mut self) {
        let username = self.username().map(str::to_string);

        self.session = None;
        self.remembered_user = None;
        self.api.set_auth_token(None);
        self.cart.clear();
        self.favorites.clear();
        self.selected_product = None;
        self.set_error(None);

        if let Err(err) = self.prefs.clear_session().await {
            warn!(error = %err, "Failed to clear session flags");
        }

        info!(username = ?username, "Logged out");
        self.emit(StateEvent::LoggedOut);
    }

    /// Read the session flags saved by a previous login.
    ///
    /// Unreadable flags count as logged out.
    pub async fn restore_session(&mut self) -> SessionPrefs {
        let flags = self.prefs.load_session().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read session flags");
            SessionPrefs::default()
        });
        self.remembered_user = flags.remembered_user().map(str::to_string);
        debug!(username = ?self.remembered_user, "Session flags restored");
        flags
    }

    // ---- Catalog ----

    /// Fetch the kitchen list unless it is already cached.
    pub async fn load_catalog(&mut self) {
        if !self.catalog.is_empty() {
            debug!(count = self.catalog.len(), "Catalog already loaded");
            return;
        }

        // Catalog failures live in catalog_error; a pending form error stays
        self.catalog_error = None;
        self.set_loading(true);
        match self.api.list_kitchens().await {
            Ok(kitchens) => {
                info!(count = kitchens.len(), "Catalog loaded");
                let count = kitchens.len();
                self.catalog = kitchens;
                self.emit(StateEvent::CatalogLoaded { count });
            }
            Err(err) => {
                let err = AppError::from(err);
                warn!(
                    operation = Operation::LoadCatalog.as_str(),
                    category = %err.category(),
                    error = %err,
                    "Catalog request failed"
                );
                self.catalog_error = Some(err.user_message(Operation::LoadCatalog));
            }
        }
        self.finish();
    }

    /// Drop the cached list and fetch it again.
    pub async fn reload_catalog(&mut self) {
        self.catalog.clear();
        self.load_catalog().await;
    }

    pub async fn load_product_detail(&mut self, id: KitchenId) {
        self.begin();
        self.selected_product = None;
        match self.api.get_product(id).await {
            Ok(product) => {
                info!(id, name = %product.name, "Product loaded");
                self.selected_product = Some(product);
                self.emit(StateEvent::ProductLoaded { id });
            }
            Err(err) => self.fail(Operation::LoadProduct, err.into()),
        }
        self.finish();
    }

    pub async fn add_product(&mut self, form: &ProductForm) {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(err) => {
                self.fail(Operation::AddProduct, err.into());
                return;
            }
        };

        self.begin();
        match self.api.add_product(&request).await {
            Ok(kitchen) => {
                info!(id = kitchen.id, name = %kitchen.name, "Product added");
                let id = kitchen.id;
                // An empty catalog has not been fetched yet; the next load brings it in
                if !self.catalog.is_empty() {
                    self.catalog.push(kitchen);
                }
                self.add_product_success = true;
                self.emit(StateEvent::ProductAdded { id });
            }
            Err(err) => self.fail(Operation::AddProduct, err.into()),
        }
        self.finish();
    }

    /// Case-insensitive name filter. A blank query matches everything.
    pub fn search_catalog(&self, query: &str) -> Vec<&Kitchen> {
        if is_blank(query) {
            return self.catalog.iter().collect();
        }
        let query = query.trim();
        self.catalog
            .iter()
            .filter(|kitchen| kitchen.name_matches(query))
            .collect()
    }

    // ---- Cart ----

    /// Add one unit. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, kitchen: &Kitchen) -> u32 {
        self.add_to_cart_with_quantity(kitchen, 1)
    }

    /// Add `quantity` units. Zero is ignored.
    pub fn add_to_cart_with_quantity(&mut self, kitchen: &Kitchen, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.cart.line(kitchen.id).map_or(0, |line| line.quantity());
        }
        let quantity = self.cart.add_quantity(kitchen, quantity);
        debug!(id = kitchen.id, quantity, "Added to cart");
        self.emit(StateEvent::CartChanged {
            id: kitchen.id,
            quantity,
        });
        quantity
    }

    /// Returns the new quantity, or `None` when the kitchen is not in the cart.
    pub fn increase_quantity(&mut self, id: KitchenId) -> Option<u32> {
        let quantity = self.cart.increase(id)?;
        self.emit(StateEvent::CartChanged { id, quantity });
        Some(quantity)
    }

    /// Returns the new quantity; `Some(0)` means the line was removed.
    pub fn decrease_quantity(&mut self, id: KitchenId) -> Option<u32> {
        let quantity = self.cart.decrease(id)?;
        self.emit(StateEvent::CartChanged { id, quantity });
        Some(quantity)
    }

    pub fn remove_from_cart(&mut self, id: KitchenId) -> bool {
        let removed = self.cart.remove(id);
        if removed {
            self.emit(StateEvent::CartChanged { id, quantity: 0 });
        }
        removed
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn cart_item_count(&self) -> u32 {
        self.cart.item_count()
    }

    // ---- Favorites ----

    /// Returns `true` when the kitchen is a favorite afterwards.
    pub fn toggle_favorite(&mut self, kitchen: &Kitchen) -> bool {
        let favorite = self.favorites.toggle(kitchen);
        self.emit(StateEvent::FavoriteToggled {
            id: kitchen.id,
            favorite,
        });
        favorite
    }

    pub fn is_favorite(&self, id: KitchenId) -> bool {
        self.favorites.contains(id)
    }

    // ---- One-shot flags ----

    pub fn reset_register_state(&mut self) {
        self.register_success = false;
        self.set_error(None);
    }

    pub fn reset_verify_code_state(&mut self) {
        self.verify_code_success = false;
        self.set_error(None);
    }

    pub fn reset_add_product_state(&mut self) {
        self.add_product_success = false;
        self.set_error(None);
    }

    /// Set or clear the error message directly.
    pub fn update_error_message(&mut self, message: Option<String>) {
        self.set_error(message);
    }

    // ---- Profile preferences ----

    /// Saved profile edits, or defaults when nothing was saved.
    pub async fn load_profile(&self) -> ProfilePrefs {
        self.prefs.load_profile().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read profile");
            ProfilePrefs::default()
        })
    }

    pub async fn save_profile(&self, profile: &ProfilePrefs) -> Result<(), AppError> {
        self.prefs.save_profile(profile).await?;
        info!("Profile saved");
        Ok(())
    }

    pub async fn load_notification_settings(&self) -> NotificationSettings {
        self.load_profile().await.notification_settings
    }

    /// Replace the notification toggles, keeping the rest of the profile.
    pub async fn save_notification_settings(
        &self,
        settings: NotificationSettings,
    ) -> Result<(), AppError> {
        let mut profile = self.load_profile().await;
        profile.notification_settings = settings;
        self.prefs.save_profile(&profile).await?;
        debug!(?settings, "Notification settings saved");
        Ok(())
    }

    // ---- Internals ----

    fn begin(&mut self) {
        self.set_error(None);
        self.set_loading(true);
    }

    fn finish(&mut self) {
        self.set_loading(false);
    }

    fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        self.emit(StateEvent::LoadingChanged(loading));
    }

    fn fail(&mut self, operation: Operation, err: AppError) {
        let category = err.category();
        warn!(
            operation = operation.as_str(),
            category = %category,
            hint = category.recovery_hint(),
            error = %err,
            "Operation failed"
        );
        self.set_error(Some(err.user_message(operation)));
    }

    fn set_error(&mut self, message: Option<String>) {
        if self.error_message != message {
            self.error_message = message.clone();
            self.emit(StateEvent::ErrorChanged(message));
        }
    }

    fn emit(&self, event: StateEvent) {
        trace!(event = event.kind(), "State event");
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
