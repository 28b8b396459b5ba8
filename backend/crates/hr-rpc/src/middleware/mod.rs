pub mod authentication;
pub mod deadline;
pub mod request_tracking;
