use std::sync::Arc;

use crate::{
    cart::CartService, config::Config, session::SessionService, store::RecordStore,
    wishlist::WishlistService,
};

pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
    pub sessions: SessionService,
    pub carts: CartService,
    pub wishlists: WishlistService,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let sessions = SessionService::new(&config);

        Arc::new(Self {
            config,
            store: RecordStore::seeded(),
            sessions,
            carts: CartService::default(),
            wishlists: WishlistService::default(),
        })
    }
}
