pub mod reqwest_service_client;

pub use reqwest_service_client::ReqwestServiceClient;
