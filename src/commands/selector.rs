use crate::models::CardView;
use crate::state::ShopExt;
use std::time::Instant;
use tauri::AppHandle;

#[tauri::command]
pub fn get_cards(app: AppHandle) -> Result<Vec<CardView>, String> {
    let shop = app.shop().lock().map_err(|e| e.to_string())?;
    Ok(shop.cards())
}

/// The card's "Add to Cart" button.
#[tauri::command]
pub fn open_selector(app: AppHandle, name: String) -> Result<Vec<CardView>, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.open_selector(&name, Instant::now());
    Ok(shop.cards())
}

#[tauri::command]
pub fn increment_selector(app: AppHandle, name: String) -> Result<Vec<CardView>, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.increment(&name, Instant::now());
    Ok(shop.cards())
}

#[tauri::command]
pub fn decrement_selector(app: AppHandle, name: String) -> Result<Vec<CardView>, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.decrement(&name, Instant::now());
    Ok(shop.cards())
}

/// Reported on every mousedown. `card` is the card under the pointer, if any.
#[tauri::command]
pub fn pointer_down(app: AppHandle, card: Option<String>) -> Result<Vec<CardView>, String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.pointer_down(card.as_deref());
    Ok(shop.cards())
}

#[tauri::command]
pub fn mount_card(app: AppHandle, name: String) -> Result<(), String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.mount_card(&name).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn unmount_card(app: AppHandle, name: String) -> Result<(), String> {
    let mut shop = app.shop().lock().map_err(|e| e.to_string())?;
    shop.unmount_card(&name);
    Ok(())
}
