use crate::shop::Shop;
use std::sync::Mutex;
use tauri::{AppHandle, Manager};

/// Every webview command and the selector ticker go through this lock, so
/// events reach the shop strictly one at a time.
pub struct AppState {
    pub shop: Mutex<Shop>,
}

impl AppState {
    pub fn new(shop: Shop) -> Self {
        AppState {
            shop: Mutex::new(shop),
        }
    }
}

pub trait ShopExt {
    fn shop(&self) -> &Mutex<Shop>;
}

impl ShopExt for AppHandle {
    fn shop(&self) -> &Mutex<Shop> {
        &self.state::<AppState>().inner().shop
    }
}
