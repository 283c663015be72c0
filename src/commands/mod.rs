pub mod cart;
pub mod order;
pub mod selector;
