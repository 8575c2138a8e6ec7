pub mod fred_repository;
