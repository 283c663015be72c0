pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod selector;
pub mod session;
pub mod shop;
pub mod timer;

#[cfg(feature = "desktop")]
mod commands;
#[cfg(feature = "desktop")]
mod state;


pub use cart::CartStore;
pub use catalog::{Catalog, CatalogError};
pub use config::{load_config, ShopConfig};
pub use error::CartError;
pub use selector::{SelectorController, SelectorPhase};
pub use session::OrderSession;
pub use shop::Shop;
pub use timer::{TimerId, TimerQueue};

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Safe to call more than once.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::{cart, order, selector};
    use state::{AppState, ShopExt};
    use std::time::{Duration, Instant};
    use tauri::{AppHandle, Emitter, Manager};

    // Fires due selector deadlines. Runs under the same lock as the commands.
    fn spawn_selector_ticker(app: AppHandle, every: Duration) {
        tauri::async_runtime::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let closed = match app.shop().lock() {
                    Ok(mut shop) => shop.tick(Instant::now()),
                    Err(e) => {
                        tracing::error!(error = %e, "shop state poisoned, stopping selector ticker");
                        break;
                    }
                };
                for name in closed {
                    if let Err(e) = app.emit("selector-closed", &name) {
                        tracing::warn!(error = %e, card = %name, "failed to emit selector-closed");
                    }
                }
            }
        });
    }

    let config = load_config();
    init_tracing(&config.log_filter);

    tauri::Builder::default()
        .setup(move |app| {
            let shop = Shop::from_config(&config);
            tracing::info!(items = shop.catalog().len(), "shop ready");
            app.manage(AppState::new(shop));

            spawn_selector_ticker(app.handle().clone(), config.tick_interval());

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Cart
            cart::get_cart,
            cart::add_to_cart,
            cart::update_quantity,
            cart::remove_from_cart,
            cart::clear_cart,
            // Selectors
            selector::get_cards,
            selector::open_selector,
            selector::increment_selector,
            selector::decrement_selector,
            selector::pointer_down,
            selector::mount_card,
            selector::unmount_card,
            // Order
            order::confirm_order,
            order::get_snapshot,
            order::dismiss_confirmation,
            order::start_new_order,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
