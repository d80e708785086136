//! Graceful shutdown.
//!
//! The server stops accepting connections on Ctrl+C or SIGTERM and lets
//! in-flight recipe requests finish before exiting.

use std::{fmt, io};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),

    #[cfg(windows)]
    #[error("failed to install Windows terminate handler: {0}")]
    Terminate(#[source] io::Error),
}

/// The signal that triggered shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interrupt => "ctrl_c",
            Self::Terminate => "terminate",
        })
    }
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .map_err(ShutdownSignalError::CtrlC)
            .map(|()| ShutdownSignal::Interrupt)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::Terminate)
    };

    // Windows has no SIGTERM; a console close arrives as ctrl_c.
    #[cfg(windows)]
    let terminate = async {
        signal::windows::ctrl_c()
            .map_err(ShutdownSignalError::Terminate)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::Terminate)
    };

    tokio::select! {
        received = interrupt => received,
        received = terminate => received,
    }
}

/// Wait for a shutdown signal, then stop the server gracefully.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let received = wait_for_signal().await?;

    info!(signal = %received, "shutdown signal received, draining in-flight requests");

    handle.stop_graceful(None);

    Ok(())
}
