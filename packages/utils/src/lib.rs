pub mod accounting;
pub mod messenger;
pub mod observer;
pub mod rate;
