//! Retry a tentativi limitati con attesa fissa, usato all'avvio.

use std::future::Future;
use std::time::Duration;

/// Numero massimo di tentativi e attesa tra un tentativo e il successivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: 5, delay: Duration::from_secs(3) }
    }
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }
}

/// Esegue `op` finché non riesce o finché non si esauriscono i tentativi.
/// `op` riceve il numero del tentativo (da 1). Dopo l'ultimo fallimento
/// restituisce l'errore di quel tentativo. Con `attempts == 0` viene comunque
/// fatto un tentativo.
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!(
                    "attempt {}/{} failed: {:#}. Trying again in {:?}...",
                    attempt,
                    attempts,
                    e,
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!("attempt {}/{} failed, giving up: {:#}", attempt, attempts, e);
                return Err(e);
            }
        }
    }
}
