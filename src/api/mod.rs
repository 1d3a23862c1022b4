mod listings_client;

pub use listings_client::ListingsClient;
