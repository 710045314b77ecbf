mod broadcaster;

pub use broadcaster::PresenceBroadcaster;
