pub mod threat_store;

pub use threat_store::IThreatStore;
