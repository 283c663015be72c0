use crate::models::{CartView, LineId};
use crate::state::ShopExt;
use tauri::AppHandle;

#[tauri::command]
pub fn get_cart(app: AppHandle) -> Result<CartView, String> {
    let shop = app.shop().lock().map_err(|e| e.to_string())?;
    Ok(shop.cart_view())
}

#[tauri::command]
pub fn add_to_cart(app: AppHandle, name: String, quantity: i64) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.add_to_cart(&name, quantity);
    Ok(shop.cart_view())
}

/// Absolute set. A quantity of zero removes the line.
#[tauri::command]
#[allow(non_snake_case)]
pub fn update_quantity(app: AppHandle, lineId: u64, quantity: i64) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.update_quantity(LineId(lineId), quantity);
    Ok(shop.cart_view())
}

#[tauri::command]
#[allow(non_snake_case)]
pub fn remove_from_cart(app: AppHandle, lineId: u64) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.remove_from_cart(LineId(lineId));
    Ok(shop.cart_view())
}

#[tauri::command]
pub fn clear_cart(app: AppHandle) -> Result<CartView, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.clear_cart();
    Ok(shop.cart_view())
}
