pub mod alert_mock;
pub mod vlibras_mock;
