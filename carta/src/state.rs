//! Application-wide state (shared between endpoint functions).

use actix_web::web::Data;
use carta_configuration::Configuration;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use thiserror::Error;

use crate::establish_database_connection_pool;


#[derive(Debug, Error)]
pub enum ApplicationStateError {
    #[error("unable to connect to database")]
    UnableToConnectToDatabase {
        #[from]
        #[source]
        error: sqlx::Error,
    },
}


/// Central application state.
///
/// Use [`ApplicationState`] instead as it already wraps this struct
/// in [`actix_web::web::Data`]!
///
/// If you need mutable state, opt for internal mutability as the struct
/// is internally essentially wrapped in an `Arc` by actix.
/// For more information about mutable state, see
/// <https://actix.rs/docs/application#shared-mutable-state>.
pub struct ApplicationStateInner {
    /// The configuration that this server was loaded with.
    #[allow(unused)]
    pub configuration: Configuration,

    /// PostgreSQL database connection pool.
    pub database_pool: PgPool,
}

impl ApplicationStateInner {
    pub async fn new(configuration: Configuration) -> Result<Self, ApplicationStateError> {
        let database_pool = establish_database_connection_pool(&configuration.database).await?;

        Ok(Self {
            configuration,
            database_pool,
        })
    }

    /// Checks out a single connection from the pool.
    ///
    /// Endpoint functions can `?`-propagate the error directly; it maps
    /// onto a `500 Internal Server Error`.
    pub async fn acquire_database_connection(
        &self,
    ) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.database_pool.acquire().await
    }
}


/// Central application state, wrapped in an actix [`Data`] wrapper,
/// which enables usage in endpoint functions.
///
/// See <https://actix.rs/docs/application#state> for more information.
pub type ApplicationState = Data<ApplicationStateInner>;
