use crate::models::{CartView, OrderSnapshot};
use crate::state::ShopExt;
use tauri::AppHandle;

/// Returns the snapshot to show, or `None` when the cart was empty.
#[tauri::command]
pub fn confirm_order(app: AppHandle) -> Result<Option<OrderSnapshot>, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.confirm_order();
    Ok(shop.snapshot().cloned())
}

#[tauri::command]
pub fn get_snapshot(app: AppHandle) -> Result<Option<OrderSnapshot>, String> {
    let shop = app.shop().lock().map_err(|e| e.to_string())?;
    Ok(shop.snapshot().cloned())
}

#[tauri::command]
pub fn dismiss_confirmation(app: AppHandle) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.dismiss_confirmation();
    Ok(shop.cart_view())
}

#[tauri::command]
pub fn start_new_order(app: AppHandle) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.start_new_order();
    Ok(shop.cart_view())
}
