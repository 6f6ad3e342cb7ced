//! Restoring the admin session at startup.

use crate::auth::Credentials;
use crate::traits::CredentialsProvider;

/// Load stored credentials and keep them only if the token is still usable.
///
/// Expired or unreadable credentials are cleared so the next start does
/// not trip over them again.
pub async fn restore_credentials(
    provider: &dyn CredentialsProvider,
    now: i64,
) -> Option<Credentials> {
    let creds = match provider.load().await {
        Ok(Some(creds)) => creds,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored credentials");
            if let Err(e) = provider.clear().await {
                tracing::warn!(error = %e, "could not clear unreadable credentials");
            }
            return None;
        }
    };

    if creds.is_usable(now) {
        tracing::info!("restored saved session");
        Some(creds)
    } else {
        tracing::info!("saved session expired, discarding");
        if let Err(e) = provider.clear().await {
            tracing::warn!(error = %e, "could not clear expired credentials");
        }
        None
    }
}
