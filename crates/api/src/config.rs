use railasset_core::roles::{ROLE_ADMIN, ROLE_MANAGER, ROLE_VIEWER};

use crate::auth::password::hash_password;

/// A statically provisioned account bound to a role.
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    /// PHC-formatted argon2id hash.
    pub password_hash: String,
    pub role: &'static str,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The three provisioned accounts (admin/manager/viewer).
    pub accounts: Vec<Account>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_PASSWORD`       | `adminPass!`               |
    /// | `MANAGER_PASSWORD`     | `managerPass!`             |
    /// | `VIEWER_PASSWORD`      | `viewerPass!`              |
    ///
    /// Passwords are hashed with argon2id at load time; only hashes are kept
    /// in memory afterwards.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let accounts = provision_accounts();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            accounts,
        }
    }

    /// Look up a provisioned account by username.
    pub fn find_account(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }
}

/// Build the three static accounts, hashing each password at startup.
///
/// Panics on a hashing failure, which is the desired behaviour -- we want
/// misconfiguration to fail fast.
pub fn provision_accounts() -> Vec<Account> {
    [
        ("admin", "ADMIN_PASSWORD", "adminPass!", ROLE_ADMIN),
        ("manager", "MANAGER_PASSWORD", "managerPass!", ROLE_MANAGER),
        ("viewer", "VIEWER_PASSWORD", "viewerPass!", ROLE_VIEWER),
    ]
    .into_iter()
    .map(|(username, env_var, default, role)| {
        let password = std::env::var(env_var).unwrap_or_else(|_| default.into());
        let password_hash = hash_password(&password)
            .unwrap_or_else(|e| panic!("Failed to hash password for '{username}': {e}"));
        Account {
            username: username.to_string(),
            password_hash,
            role,
        }
    })
    .collect()
}
