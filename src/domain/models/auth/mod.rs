pub mod authenticated_user;
pub mod authentication_request;
