use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("servers must be greater than 0")]
    ServersZero,
    #[error("arrival rate must be > 0 (got {0})")]
    InvalidArrivalRate(f64),
    #[error("service rate must be > 0 (got {0})")]
    InvalidServiceRate(f64),
    #[error("system unstable: utilization {0:.2} is not below 1")]
    Unstable(f64),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
