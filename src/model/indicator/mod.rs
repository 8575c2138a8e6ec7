pub mod indicator_config;
pub mod indicator_list_config;
pub mod treasury_config;
