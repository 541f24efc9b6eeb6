pub mod billing_gateway;

pub use billing_gateway::{gateway_from_config, BillingGateway, DisabledGateway, StripeGateway};
