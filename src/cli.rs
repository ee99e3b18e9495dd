use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use common::PredictionForm;

pub mod commands;

use crate::config::{
    ClientConfig, ServerConfig, DEFAULT_API_URL, DEFAULT_BIND_ADDRESS, DEFAULT_STATIC_DIR,
    DEFAULT_TIMEOUT_SECS,
};
use commands::{predict, serve, status};

#[derive(Parser)]
#[command(name = "solarsite")]
#[command(about = "Portfolio page with a solar irradiance prediction form")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built page
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory containing the built frontend (index.html and the wasm bundle)
        #[arg(short, long, env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
        static_dir: String,
    },
    /// Request a solar irradiance prediction
    ///
    /// Values are validated locally before anything is sent:
    /// temperature -10..50 °C, cloud cover and humidity 0..100 %,
    /// hour 0..23, month 1..12.
    Predict {
        #[command(flatten)]
        service: ServiceArgs,

        /// Air temperature in °C
        #[arg(long, allow_hyphen_values = true)]
        temperature: String,

        /// Cloud cover in percent
        #[arg(long)]
        cloud_cover: String,

        /// Relative humidity in percent
        #[arg(long)]
        humidity: String,

        /// Hour of day (0-23)
        #[arg(long)]
        hour: String,

        /// Month (1-12)
        #[arg(long)]
        month: String,
    },
    /// Check that the prediction service is up and show its model
    Status {
        #[command(flatten)]
        service: ServiceArgs,
    },
}

#[derive(Args, Debug)]
pub struct ServiceArgs {
    /// Base URL of the prediction service
    #[arg(long, env = "PREDICTION_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl ServiceArgs {
    fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::new(&self.api_url, self.timeout_secs)?)
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, static_dir } => {
                serve(ServerConfig::new(&bind_address, &static_dir)).await?;
            }
            Commands::Predict {
                service,
                temperature,
                cloud_cover,
                humidity,
                hour,
                month,
            } => {
                let form = PredictionForm {
                    temperature,
                    cloud_cover,
                    humidity,
                    hour,
                    month,
                };
                predict(service.client_config()?, form).await?;
            }
            Commands::Status { service } => {
                status(service.client_config()?).await?;
            }
        }
        Ok(())
    }
}
