//! Review Log entry point
//!
//! On the web this wires the review list and form into the page. Natively it
//! prints the seeded list from in-memory storage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("Review log starting...");

    if let Err(e) = review_log::web::run() {
        log::error!("Review log failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use review_log::platform::{MemoryStorage, SystemClock};
    use review_log::{ReviewBoard, ReviewCard, ReviewLogConfig};

    env_logger::init();
    log::info!("Review log (native) starting with in-memory storage");

    let board = ReviewBoard::new(MemoryStorage::new(), SystemClock, ReviewLogConfig::default());
    let mut cards: Vec<ReviewCard> = Vec::new();
    board.render(&mut cards);

    for card in &cards {
        println!("{}  {}  {}", card.stars, card.name, card.date);
        if !card.message.is_empty() {
            println!("    {}", card.message);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
