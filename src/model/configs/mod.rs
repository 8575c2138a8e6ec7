pub mod fred_server_config;
pub mod page_config;
pub mod system_config;
pub mod total_config;
