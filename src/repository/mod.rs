pub mod fred_repository_impl;
