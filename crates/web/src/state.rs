use gateway::ResendMailer;
use storage::Database;

use crate::config::Config;
use crate::middleware::auth::ApiKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub mailer: ResendMailer,
    pub admin_keys: ApiKeys,
    pub operator_keys: ApiKeys,
    pub config: Config,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        let mailer = ResendMailer::new(config.resend_api_key.clone(), config.mail_from.clone());
        let admin_keys = ApiKeys::from_comma_separated(&config.admin_api_keys);
        let operator_keys = ApiKeys::from_comma_separated(&config.operator_api_keys);

        Self {
            db,
            mailer,
            admin_keys,
            operator_keys,
            config,
        }
    }
}
