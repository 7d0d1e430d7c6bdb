pub mod run_model;
