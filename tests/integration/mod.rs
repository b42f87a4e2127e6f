mod alpha_vantage_integration;
mod cli_integration;
