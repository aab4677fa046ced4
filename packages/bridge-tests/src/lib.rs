pub mod builder;
pub mod mock_accounting;
pub mod mock_messenger;
pub mod mock_observer;
