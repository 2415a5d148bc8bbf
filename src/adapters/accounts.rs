use crate::domain::model::Account;
use crate::domain::ports::AccountStore;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::fs;

/// Account store backed by a JSON file containing an array of accounts.
/// When no file is configured, serves built-in sample data so the demo
/// renders something.
#[derive(Debug, Clone)]
pub struct JsonAccountStore {
    path: Option<String>,
}

impl JsonAccountStore {
    pub fn new(path: Option<String>) -> Self {
        Self { path }
    }

    fn sample_accounts() -> Vec<Account> {
        (1..=8)
            .map(|i| Account {
                id: i,
                balance: (i * 125) as f64,
            })
            .collect()
    }

    fn load(&self) -> Result<Vec<Account>> {
        match &self.path {
            Some(path) => {
                let data = fs::read(path)?;
                serde_json::from_slice(&data).map_err(|e| AppError::AccountStoreError {
                    message: format!("{}: {}", path, e),
                })
            }
            None => {
                tracing::warn!("No accounts file configured, generating sample data");
                Ok(Self::sample_accounts())
            }
        }
    }
}

#[async_trait]
impl AccountStore for JsonAccountStore {
    async fn top_by_balance(&self, limit: usize) -> Result<Vec<Account>> {
        let mut accounts = self.load()?;
        accounts.sort_by(|a, b| b.balance.total_cmp(&a.balance));
        accounts.truncate(limit);
        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn store_with_accounts(accounts: &[(i64, f64)]) -> (JsonAccountStore, NamedTempFile) {
        let json: Vec<serde_json::Value> = accounts
            .iter()
            .map(|(id, balance)| serde_json::json!({ "id": id, "balance": balance }))
            .collect();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::Value::Array(json)).unwrap();
        let store = JsonAccountStore::new(Some(file.path().to_str().unwrap().to_string()));
        (store, file)
    }

    #[tokio::test]
    async fn test_orders_by_balance_descending() {
        let (store, _file) = store_with_accounts(&[(1, 10.0), (2, 300.0), (3, 150.0)]);
        let accounts = store.top_by_balance(50).await.unwrap();
        let ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_truncates_to_limit() {
        let rows: Vec<(i64, f64)> = (1..=60).map(|i| (i, i as f64)).collect();
        let (store, _file) = store_with_accounts(&rows);
        let accounts = store.top_by_balance(50).await.unwrap();
        assert_eq!(accounts.len(), 50);
        // Highest balances survive the cut
        assert_eq!(accounts[0].id, 60);
        assert_eq!(accounts[49].id, 11);
    }

    #[tokio::test]
    async fn test_sample_data_when_no_file_configured() {
        let store = JsonAccountStore::new(None);
        let accounts = store.top_by_balance(50).await.unwrap();
        assert!(!accounts.is_empty());
        assert!(accounts.windows(2).all(|w| w[0].balance >= w[1].balance));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let store = JsonAccountStore::new(Some("/nonexistent/accounts.json".to_string()));
        assert!(store.top_by_balance(50).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_account_store_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let store = JsonAccountStore::new(Some(file.path().to_str().unwrap().to_string()));
        let err = store.top_by_balance(50).await.unwrap_err();
        assert!(matches!(err, AppError::AccountStoreError { .. }));
    }
}
